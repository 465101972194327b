//! Codegen for the KyselyRizzolver schema builder.
//!
//! Reads the TypeScript file that kysely-codegen produces, collects every
//! table the `DB` interface points at together with its column names, and
//! emits a module that registers them all on a `KyselyRizzolver` instance.
//!
//! Pipeline: source text -> [`parser::parse`] -> [`extract::extract_tables`]
//! -> [`emit::generate`].

pub mod ast;
pub mod emit;
pub mod error;
pub mod extract;
pub mod parser;
pub mod paths;

pub use error::CodegenError;
pub use extract::TableSchema;
