//! Queries answered by the source front end.
//!
//! Parsing and type checking happen outside this workspace. The resolver
//! consumes the front end only through the narrow trait below and treats
//! every `None` answer as "legitimately unavailable", never as an error.

use docent_graph::SymbolId;

/// Identity of a source file within the front end's compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub u32);

/// Opaque handle to an expression the front end can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpressionRef(pub u32);

/// Opaque handle to a declaration site known to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclarationRef(pub u32);

/// A type as reported by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Display name for the type.
    pub name: String,
    /// Symbol backing the type, when the type has one.
    pub symbol: Option<SymbolId>,
}

impl TypeInfo {
    /// Creates a type with a backing symbol.
    pub fn with_symbol(name: impl Into<String>, symbol: SymbolId) -> Self {
        Self {
            name: name.into(),
            symbol: Some(symbol),
        }
    }

    /// Creates a type without a backing symbol.
    pub fn anonymous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: None,
        }
    }
}

/// Narrow view of the source front end consumed by export resolution.
pub trait Frontend {
    /// Type of an expression, if the front end can resolve one.
    fn type_of(&self, expression: ExpressionRef) -> Option<TypeInfo>;

    /// Symbol identity of a declaration site.
    fn symbol_of(&self, declaration: DeclarationRef) -> Option<SymbolId>;

    /// Declaration sites of a symbol.
    fn declarations_of(&self, symbol: SymbolId) -> Vec<DeclarationRef>;

    /// Absolute path a module specifier resolves to within `file`, from the
    /// front end's per-file resolved-module table.
    fn resolved_module_path(&self, file: FileId, specifier: &str) -> Option<String>;
}
