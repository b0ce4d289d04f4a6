//! The header section: the optional module declaration followed by import
//! statements.
//!
//! Annotations ahead of the header bind to the module when one is present,
//! otherwise to the first import; when neither materialises the cursor is
//! rolled back so the annotations can bind to the first body element
//! instead.

use crate::parser::{errors, Parse, Parser, DROP_AFTER};
use yew_ast::ast::{
    Annotate, Header, ImportQualifier, ImportStatement, ImportPathIdent, Module, Name,
    PackageImport,
};
use yew_ast::data::{Either, List, Maybe, NonEmpty};
use yew_tokens::{Positioned, TokenType};

impl Parser {
    pub(crate) fn parse_header(&mut self) -> Parse<Maybe<Header>> {
        let origin = self.cursor;
        let annotations = self.parse_annotations()?;
        let mut module = self.parse_module()?;
        let mut carried = None;
        if module.is_just() {
            module = module.map(|mut m| {
                m.annotate(annotations);
                m
            });
        } else {
            carried = Some(annotations);
        }
        let had_annotations = carried.as_ref().is_some_and(Maybe::is_just);
        let imports = self.parse_imports(carried)?;
        if module.is_nothing() && imports.is_empty() {
            if had_annotations {
                self.cursor = origin;
            }
            return Ok(Maybe::nothing(self.here()));
        }
        Ok(Maybe::just(Header::new(module, imports)))
    }

    fn parse_module(&mut self) -> Parse<Maybe<Module>> {
        let Some(module_token) = self.get_keyword(TokenType::Module) else {
            return Ok(Maybe::nothing(self.here()));
        };
        let Some(name) = self.parse_lower_ident() else {
            return self.fail(errors::EXPECTED_MODULE_ID);
        };
        let mut module = Module::new(name);
        module.widen(&module_token);
        Ok(Maybe::just(module))
    }

    fn parse_imports(
        &mut self,
        mut carried: Option<Maybe<yew_ast::ast::Annotations>>,
    ) -> Parse<List<ImportStatement>> {
        self.drop_newlines();
        let mut imports: List<ImportStatement> = List::new();
        loop {
            let origin = self.cursor;
            let annotations = match carried.take() {
                Some(annotations) => annotations,
                None => self.parse_annotations()?,
            };
            let Some(mut statement) = self.maybe_parse_import()? else {
                self.cursor = origin;
                return Ok(imports);
            };
            statement.annotate(annotations);
            imports = imports.snoc(statement);
            self.drop_newlines();
        }
    }

    fn maybe_parse_import(&mut self) -> Parse<Option<ImportStatement>> {
        let Some(import_token) = self.get_keyword(TokenType::Import) else {
            return Ok(None);
        };
        let imports =
            self.parse_group(errors::EXPECTED_IMPORT_PATH, |p| p.maybe_parse_package_import())?;
        let mut statement = ImportStatement::new(imports);
        statement.widen(&import_token);
        Ok(Some(statement))
    }

    fn maybe_parse_package_import(&mut self) -> Parse<Option<PackageImport>> {
        let Some(path_token) = self.get_keyword(TokenType::ImportPath) else {
            return Ok(None);
        };
        let path = ImportPathIdent::new(path_token);
        let qualifier = self.parse_import_qualifier()?;
        Ok(Some(PackageImport::new(path, qualifier)))
    }

    fn parse_import_qualifier(&mut self) -> Parse<Maybe<ImportQualifier>> {
        if let Some(as_token) = self.get_keyword(TokenType::As) {
            let Some(alias) = self.parse_lower_ident() else {
                if self.current().ty == TokenType::Id {
                    return self.fail(errors::ILLEGAL_NAMESPACE_ALIAS);
                }
                return self.fail(errors::EXPECTED_NAMESPACE_ALIAS);
            };
            let mut qualifier = Maybe::just(Either::Inl(alias));
            qualifier.widen(&as_token);
            return Ok(qualifier);
        }
        if let Some(using_token) = self.get_keyword(TokenType::Using) {
            let selection = self.parse_symbol_selection()?;
            let mut qualifier = Maybe::just(Either::Inr(selection));
            qualifier.widen(&using_token);
            return Ok(qualifier);
        }
        Ok(Maybe::nothing(self.here()))
    }

    /// The selection of a `using` clause: `_` hides everything, otherwise a
    /// name or a parenthesised comma-separated group of names.
    fn parse_symbol_selection(&mut self) -> Parse<Maybe<NonEmpty<Name>>> {
        if let Some(underscore) = self.take_keyword(TokenType::Underscore, DROP_AFTER) {
            return Ok(Maybe::nothing(&underscore));
        }
        let lparen = self.get_keyword(TokenType::LeftParen);
        let mut names =
            self.sep_sequenced(errors::ILLEGAL_EMPTY_USING_CLAUSE, TokenType::Comma, |p| {
                Ok(p.maybe_parse_name())
            })?;
        match lparen {
            Some(lp) => {
                names.widen(&lp);
                let Some(rp) = self.get_keyword(TokenType::RightParen) else {
                    return self.fail(errors::EXPECTED_RIGHT_PAREN);
                };
                names.widen(&rp);
            }
            None if names.len() > 1 => {
                let pos = names.get_pos();
                return self.fail_over(errors::ILLEGAL_UNENCLOSED_USING_CLAUSE, pos);
            }
            None => {}
        }
        Ok(Maybe::just(names))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::source::testing::{first_error, parse_ok};
    use yew_ast::data::Either;

    #[test]
    fn module_and_single_import() {
        let src = parse_ok("module x\nimport \"a/b/c\"\n");
        let header = src.header().get().expect("header");
        let module = header.module().get().expect("module");
        assert_eq!(module.name().text(), "x");
        assert_eq!(header.imports().len(), 1);
        let statement = header.imports().head().expect("import");
        assert_eq!(statement.imports().head().path().text(), "a/b/c");
    }

    #[test]
    fn import_group_collects_multiple_packages() {
        let src = parse_ok("import (\"a/b\"\n\"c/d\")\n");
        let header = src.header().get().expect("header");
        let statement = header.imports().head().expect("import");
        assert_eq!(statement.imports().len(), 2);
    }

    #[test]
    fn import_with_namespace_alias() {
        let src = parse_ok("import \"data/list\" as list\n");
        let header = src.header().get().expect("header");
        let import = header.imports().head().expect("import").imports().head();
        let qualifier = import.qualifier().get().expect("qualifier");
        match qualifier.as_ref() {
            Either::Inl(alias) => assert_eq!(alias.text(), "list"),
            Either::Inr(_) => panic!("expected alias"),
        }
    }

    #[test]
    fn import_using_selection_and_hide_all() {
        let src = parse_ok("import \"data/list\" using (map, filter)\n");
        let header = src.header().get().expect("header");
        let import = header.imports().head().expect("import").imports().head();
        match import.qualifier().get().expect("qualifier").as_ref() {
            Either::Inr(selection) => {
                assert_eq!(selection.get().expect("names").len(), 2);
            }
            Either::Inl(_) => panic!("expected selection"),
        }

        let src = parse_ok("import \"data/list\" using _\n");
        let header = src.header().get().expect("header");
        let import = header.imports().head().expect("import").imports().head();
        match import.qualifier().get().expect("qualifier").as_ref() {
            Either::Inr(selection) => assert!(selection.is_nothing()),
            Either::Inl(_) => panic!("expected selection"),
        }
    }

    #[test]
    fn unenclosed_multi_name_selection_is_rejected() {
        let msg = first_error("import \"data/list\" using map, filter\n");
        assert_eq!(msg, super::super::errors::ILLEGAL_UNENCLOSED_USING_CLAUSE);
    }

    #[test]
    fn module_keyword_without_name_is_rejected() {
        let msg = first_error("module 9\n");
        assert_eq!(msg, super::super::errors::EXPECTED_MODULE_ID);
    }
}
