use serde::{Deserialize, Serialize};

/// Classification of a reflection node.
///
/// The set is closed: the front end maps every declaration it converts onto
/// one of these kinds before the graph ever sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionKind {
    /// The unique project root.
    Project,
    /// A source-file module.
    Module,
    /// A namespace declared inside a module.
    Namespace,
    Class,
    Interface,
    Enum,
    EnumMember,
    Function,
    Method,
    Property,
    Variable,
    TypeAlias,
}

impl ReflectionKind {
    /// Returns true for kinds that may record wildcard imports and serve as
    /// wildcard re-export targets.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Project | Self::Module | Self::Namespace)
    }

    /// Returns true for module-like kinds.
    ///
    /// Modules bound the navigation trail and are skipped when listing a
    /// container's entries (they get their own top-level navigation).
    pub fn is_module(&self) -> bool {
        matches!(self, Self::Module | Self::Namespace)
    }

    /// Human-readable plural title used for display grouping.
    pub fn group_title(&self) -> &'static str {
        match self {
            Self::Project => "Projects",
            Self::Module => "Modules",
            Self::Namespace => "Namespaces",
            Self::Class => "Classes",
            Self::Interface => "Interfaces",
            Self::Enum => "Enumerations",
            Self::EnumMember => "Enumeration members",
            Self::Function => "Functions",
            Self::Method => "Methods",
            Self::Property => "Properties",
            Self::Variable => "Variables",
            Self::TypeAlias => "Type aliases",
        }
    }
}
