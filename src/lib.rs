//! prisma_entities library - Prisma schema to relational entity metadata
//!
//! Reads a parsed Prisma declaration tree and produces one entity per model
//! or enum, with columns, indices, inferred relations and file imports, ready
//! for a code-generation backend.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dedup;
pub mod driver;
pub mod logging;
pub mod model;
pub mod output;
pub mod schema;
pub mod translate;

pub use driver::{DriverError, PrismaDriver};
pub use model::{Entity, TranslateOptions};
pub use schema::SchemaAst;
pub use translate::{translate, Translation};

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
