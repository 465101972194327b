use thiserror::Error;

/// Fatal extraction failures. Either one aborts the run before anything is
/// written.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The input file has no top-level `DB` interface.
    #[error("could not find the DB interface in the input file")]
    SchemaNotFound,

    /// A `DB` member references a type that is not declared in the input.
    #[error("could not find the type for {name}")]
    TableTypeNotFound { name: String },
}
