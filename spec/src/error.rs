//! Error types for a generation run.

/// A failure raised while declaring terms or emitting triples.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The same short name was declared twice.
    #[error("duplicate declaration of '{name}' (already bound to <{existing}>)")]
    DuplicateDeclaration {
        /// The short name.
        name: String,
        /// The URI it was first bound to.
        existing: String,
    },

    /// A JSON-LD context term was added twice or collides with a prefix.
    #[error("duplicate context term '{0}'")]
    DuplicateTerm(String),

    /// An export constant name was produced twice.
    #[error("duplicate export constant '{0}'")]
    DuplicateExport(String),

    /// A symbolic reference does not name any declared term.
    #[error("unresolved reference '{0}'")]
    UnresolvedReference(String),

    /// A qualified name uses a prefix missing from the prefix table.
    #[error("unknown prefix in '{0}'")]
    UnknownPrefix(String),

    /// A declaration was made before any namespace was selected.
    #[error("no active namespace; call reset() before declaring terms")]
    NoActiveNamespace,
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
