//! Error types for schema-graph code generation.

use thiserror::Error;

/// Fatal code-generation failures.
///
/// Any of these aborts the whole `generate` call: either a complete,
/// consistent declaration set is produced or nothing is.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A node kind the resolver cannot expand inline, or a named node whose
    /// kind cannot anchor a standalone declaration. Carries the offending
    /// node's structural dump.
    #[error("unsupported type: {dump}")]
    UnsupportedType { dump: String },

    /// A node reached the declaration stage without a non-empty name.
    #[error("empty name of declared type: {dump}")]
    EmptyName { dump: String },

    /// Two named types in the same run share a name. Uniqueness is checked
    /// across the entire run, not per kind.
    #[error("duplicate type name: {name}")]
    DuplicateName { name: String },

    /// A type id was referenced but is absent from the table. This is an
    /// upstream precondition violation surfaced as a typed error.
    #[error("type id {type_id} is not present in the type table")]
    MissingType { type_id: u32 },
}
