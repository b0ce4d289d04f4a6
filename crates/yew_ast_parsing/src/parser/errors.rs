//! Syntax failure messages.

pub const EXPECTED_ACCESS_DOT: &str = "expected '.'";
pub const EXPECTED_ALIAS_BINDING: &str = "expected '=' to follow type alias name";
pub const EXPECTED_BINDING_TERM: &str = "expected a binding term";
pub const EXPECTED_BODY_ELEMENT: &str = "expected body element";
pub const EXPECTED_BOUND_EXPR: &str = "let-binding requires a bound expression";
pub const EXPECTED_CASE_ARM: &str = "expected case arm";
pub const EXPECTED_CASE_ARM_THICK_ARROW: &str = "expected '=>' to follow case arm pattern";
pub const EXPECTED_COLON_EQUAL: &str = "expected ':='";
pub const EXPECTED_COMMAND: &str = "expected command";
pub const EXPECTED_CONSTRAINER: &str = "expected constrainer";
pub const EXPECTED_CONSTRAINT: &str = "expected type constraint";
pub const EXPECTED_CONSTRAINT_ELEM: &str = "expected constraint element";
pub const EXPECTED_DEF: &str = "expected definition";
pub const EXPECTED_DERIVING_BODY: &str = "expected body for deriving clause";
pub const EXPECTED_END_OF_FILE: &str = "expected end of file";
pub const EXPECTED_EXPR: &str = "expected expression";
pub const EXPECTED_FORALL_BINDER: &str = "expected forall binder";
pub const EXPECTED_FORALL_IN: &str = "expected 'in' to follow 'forall' binders";
pub const EXPECTED_ID: &str = "expected identifier";
pub const EXPECTED_IMPORT_PATH: &str = "expected import path";
pub const EXPECTED_IN: &str = "expected 'in'";
pub const EXPECTED_INST_WHERE: &str = "expected 'where' clause to follow inst declaration";
pub const EXPECTED_LAMBDA_ABSTRACTION: &str = "expected lambda abstraction";
pub const EXPECTED_LAMBDA_THICK_ARROW: &str = "expected '=>' to follow lambda binders";
pub const EXPECTED_LET_EXPR: &str = "expected let expression";
pub const EXPECTED_MAIN_ELEMENT: &str = "expected main element";
pub const EXPECTED_MODAL_ID: &str = "modality must be followed by an identifier";
pub const EXPECTED_MODULE_ID: &str = "expected module name";
pub const EXPECTED_NAME: &str = "expected name";
pub const EXPECTED_NAMESPACE_ALIAS: &str = "expected namespace alias to follow 'as'";
pub const EXPECTED_OF: &str = "expected 'of' to follow case scrutinee";
pub const EXPECTED_PATTERN: &str = "expected pattern";
pub const EXPECTED_RAW_KEYWORD: &str = "expected raw keyword";
pub const EXPECTED_RIGHT_BRACE: &str = "expected '}'";
pub const EXPECTED_RIGHT_PAREN: &str = "expected ')'";
pub const EXPECTED_SPEC_DEF: &str = "expected spec definition";
pub const EXPECTED_SPEC_INST: &str = "expected spec instance";
pub const EXPECTED_SPEC_WHERE: &str = "expected 'where' clause to follow spec declaration";
pub const EXPECTED_SYNTAX: &str = "expected syntax definition";
pub const EXPECTED_SYNTAX_BINDING: &str = "expected '=' to follow syntax rule";
pub const EXPECTED_SYNTAX_BINDING_ID: &str = "expected syntax binding identifier";
pub const EXPECTED_SYNTAX_RULE: &str = "expected syntax rule";
pub const EXPECTED_TYPE: &str = "expected a type";
pub const EXPECTED_TYPE_ALIAS: &str = "expected type alias";
pub const EXPECTED_TYPE_ALIAS_NAME: &str = "expected a name to follow 'alias'";
pub const EXPECTED_TYPE_CONSTRUCTOR_NAME: &str = "expected type constructor name";
pub const EXPECTED_TYPE_JUDGMENT: &str = "expected type judgement";
pub const EXPECTED_TYPE_SIG: &str = "expected type signature";
pub const EXPECTED_TYPING: &str = "expected typing";
pub const EXPECTED_TYPING_OR_DEF: &str = "expected a typing or definition";
pub const EXPECTED_UPPER_ID: &str = "expected uppercase identifier";
pub const EXPECTED_WITH_ARM_THICK_ARROW: &str = "expected '=>' to follow with arm pattern";
pub const EXPECTED_WITH_CLAUSE: &str = "expected 'with' clause";
pub const EXPECTED_WITH_CLAUSE_ARM: &str = "expected 'with' clause arm";
pub const ILLEGAL_EMPTY_USING_CLAUSE: &str = "illegal empty using clause";
pub const ILLEGAL_LOWERCASE_CONSTRUCTOR_NAME: &str =
    "constructor names cannot be lowercase identifiers";
pub const ILLEGAL_METHOD_TYPE_CONSTRUCTOR: &str =
    "type constructors cannot be identified by method identifiers";
pub const ILLEGAL_MULTIPLE_ENCLOSURE: &str = "illegal multiply enclosed term";
pub const ILLEGAL_NAMESPACE_ALIAS: &str = "illegal namespace alias, expected lowercase identifier";
pub const ILLEGAL_OPEN_MODIFIER: &str = "modifier 'open' can only target data type definitions";
pub const ILLEGAL_OPEN_MODIFIER_TYPING: &str =
    "modifier 'open' targeted a typing, but no constructors were found";
pub const ILLEGAL_UNENCLOSED_USING_CLAUSE: &str =
    "illegal unenclosed symbol selection in using clause";
pub const ILLEGAL_VISIBILITY_TARGET: &str = "illegal target for visibility modifier";
pub const ILLEGAL_VISIBLE_DEF: &str =
    "visibility modifiers cannot be applied to definitions, only their signatures";
pub const INVALID_ANNOTATION_TARGET: &str = "cannot find a valid target for annotations";
pub const UNEXPECTED_EOF: &str = "unexpected end of file";
pub const UNEXPECTED_TOKEN: &str = "unexpected token";
