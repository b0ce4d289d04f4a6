//! Concrete grammar nodes, grouped the way the grammar is layered: shared
//! identifier atoms, annotations, the header, patterns, expressions, types,
//! the body forms, and the source root.

pub mod annotation;
pub mod body;
pub mod expr;
pub mod header;
pub mod names;
pub mod pattern;
pub mod source;
pub mod typ;

pub use annotation::{Annotate, Annotation, Annotations, EnclosedAnnotation, FlatAnnotation};
pub use body::{
    Body, BodyElement, Constrainer, Constraint, ConstraintElem, Def, DefBinding, DefBody,
    Deriving, SpecBody, SpecDef, SpecHead, SpecInst, SpecMember, Syntax, SyntaxRule, SyntaxSymbol,
    TypeAlias, TypeConstructor, TypeDef, TypeDefBody, Typing, Visibility, WhereClause, WithClause,
    WithClauseArm,
};
pub use expr::{
    Access, CaseArm, CaseExpr, Expr, ExprApp, LambdaAbstraction, LambdaBinder, LambdaBinders,
    LetBinding, LetBindingMember, LetExpr,
};
pub use header::{Header, ImportQualifier, ImportStatement, Module, PackageImport};
pub use names::{Hole, Ident, ImportPathIdent, Literal, LowerIdent, Name, UpperIdent, Wildcard};
pub use pattern::{Pattern, PatternApp, PatternAtom, PatternEnclosed};
pub use source::YewSource;
pub use typ::{
    AppType, ConstrainedType, EnclosedInner, EnclosedType, ForallType, FunctionType,
    ImplicitTyping, InnerTypeTerms, InnerTyping, Modality, Type, TypeAccess, UnitType,
};

/// Declares a leaf node wrapping a single token.
macro_rules! token_node {
    ($(#[$meta:meta])* $name:ident, $label:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            token: yew_tokens::Token,
        }

        impl $name {
            pub fn new(token: yew_tokens::Token) -> Self {
                Self { token }
            }

            pub fn token(&self) -> &yew_tokens::Token {
                &self.token
            }

            pub fn text(&self) -> &str {
                &self.token.value
            }
        }

        impl yew_tokens::Positioned for $name {
            fn get_pos(&self) -> yew_tokens::Position {
                self.token.get_pos()
            }
        }

        impl crate::node::Node for $name {
            fn describe(&self) -> (String, Vec<&dyn crate::node::Node>) {
                ($label.to_string(), vec![&self.token])
            }
        }
    };
}

pub(crate) use token_node;
