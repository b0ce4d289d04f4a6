//! The source header: the optional module declaration and the import
//! statements.

use crate::ast::annotation::{Annotate, Annotations};
use crate::ast::names::{ImportPathIdent, LowerIdent, Name};
use crate::data::{Either, List, Maybe, NonEmpty};
use crate::node::{extend_list, extend_maybe, extend_non_empty, Node};
use yew_tokens::{Position, Positioned};

/// How an import is qualified: an `as` alias, or a `using` symbol
/// selection where `Nothing` is the hide-all form `using _`.
pub type ImportQualifier = Either<LowerIdent, Maybe<NonEmpty<Name>>>;

/// `module name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    annotations: Maybe<Annotations>,
    name: LowerIdent,
    pos: Position,
}

impl Module {
    pub fn new(name: LowerIdent) -> Self {
        let pos = name.get_pos();
        Self {
            annotations: Maybe::nothing(Position::zero()),
            name,
            pos,
        }
    }

    pub fn name(&self) -> &LowerIdent {
        &self.name
    }

    pub fn annotations(&self) -> &Maybe<Annotations> {
        &self.annotations
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for Module {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for Module {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Module {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![];
        extend_maybe(&mut children, &self.annotations);
        children.push(&self.name);
        ("module".to_string(), children)
    }
}

/// One imported package: a path plus an optional qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageImport {
    path: ImportPathIdent,
    qualifier: Maybe<ImportQualifier>,
    pos: Position,
}

impl PackageImport {
    pub fn new(path: ImportPathIdent, qualifier: Maybe<ImportQualifier>) -> Self {
        let pos = path.get_pos().update(qualifier.get_pos());
        Self {
            path,
            qualifier,
            pos,
        }
    }

    pub fn path(&self) -> &ImportPathIdent {
        &self.path
    }

    pub fn qualifier(&self) -> &Maybe<ImportQualifier> {
        &self.qualifier
    }
}

impl Positioned for PackageImport {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for PackageImport {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.path];
        if let Some(q) = self.qualifier.get() {
            match q {
                Either::Inl(alias) => children.push(alias),
                Either::Inr(selection) => {
                    if let Some(names) = selection.get() {
                        extend_non_empty(&mut children, names);
                    }
                }
            }
        }
        ("package import".to_string(), children)
    }
}

/// `import …`, importing one package or a parenthesised group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    annotations: Maybe<Annotations>,
    imports: NonEmpty<PackageImport>,
    pos: Position,
}

impl ImportStatement {
    pub fn new(imports: NonEmpty<PackageImport>) -> Self {
        let pos = imports.get_pos();
        Self {
            annotations: Maybe::nothing(Position::zero()),
            imports,
            pos,
        }
    }

    pub fn imports(&self) -> &NonEmpty<PackageImport> {
        &self.imports
    }

    pub fn annotations(&self) -> &Maybe<Annotations> {
        &self.annotations
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for ImportStatement {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for ImportStatement {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for ImportStatement {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_non_empty(&mut children, &self.imports);
        ("import statement".to_string(), children)
    }
}

/// The header section: optional module, then any number of imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    module: Maybe<Module>,
    imports: List<ImportStatement>,
    pos: Position,
}

impl Header {
    pub fn new(module: Maybe<Module>, imports: List<ImportStatement>) -> Self {
        let pos = module.get_pos().update(imports.get_pos());
        Self {
            module,
            imports,
            pos,
        }
    }

    pub fn module(&self) -> &Maybe<Module> {
        &self.module
    }

    pub fn imports(&self) -> &List<ImportStatement> {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.module.is_nothing() && self.imports.is_empty()
    }
}

impl Positioned for Header {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Header {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.module);
        extend_list(&mut children, &self.imports);
        ("header section".to_string(), children)
    }
}
