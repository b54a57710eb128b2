//! Schema driver.
//!
//! Wraps the translator behind the connect / translate / disconnect
//! lifecycle shared by database drivers. "Connecting" reads a declaration
//! tree from disk; there is no server behind it, so the database management
//! operations are reported as unsupported.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::model::TranslateOptions;
use crate::schema::SchemaAst;
use crate::translate::{translate, Translation};

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to read schema '{path}': {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Invalid declaration tree: {message}")]
    JsonParseFailed { message: String },

    #[error("No schema loaded, call connect first")]
    NotConnected,

    #[error("{operation} is not supported by the Prisma driver")]
    NotImplemented { operation: String },
}

/// Driver over a Prisma declaration tree stored as JSON.
#[derive(Debug, Default)]
pub struct PrismaDriver {
    source: Option<PathBuf>,
    ast: Option<SchemaAst>,
}

impl PrismaDriver {
    pub const ENGINE_NAME: &'static str = "Prisma";
    pub const STANDARD_PORT: u16 = 0;
    pub const STANDARD_SCHEMA: &'static str = "prisma";
    pub const STANDARD_USER: &'static str = "";

    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse the declaration tree at `path`.
    pub fn connect(&mut self, path: &Path) -> Result<(), DriverError> {
        let content = fs::read_to_string(path).map_err(|e| DriverError::FileReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.connect_str(&content)?;
        self.source = Some(path.to_path_buf());
        info!(path = %path.display(), "schema loaded");
        Ok(())
    }

    /// Parse a declaration tree that is already in memory.
    pub fn connect_str(&mut self, content: &str) -> Result<(), DriverError> {
        let ast: SchemaAst =
            serde_json::from_str(content).map_err(|e| DriverError::JsonParseFailed {
                message: e.to_string(),
            })?;
        debug!(declarations = ast.declarations.len(), "declaration tree parsed");
        self.ast = Some(ast);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.ast.is_some()
    }

    /// Path of the loaded schema, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn translate(&self, options: &TranslateOptions) -> Result<Translation, DriverError> {
        let ast = self.ast.as_ref().ok_or(DriverError::NotConnected)?;
        Ok(translate(ast, options))
    }

    pub fn disconnect(&mut self) {
        self.ast = None;
        self.source = None;
    }

    pub fn create_db(&self, _name: &str) -> Result<(), DriverError> {
        Err(not_implemented("create_db"))
    }

    pub fn drop_db(&self, _name: &str) -> Result<(), DriverError> {
        Err(not_implemented("drop_db"))
    }

    pub fn check_if_db_exists(&self, _name: &str) -> Result<bool, DriverError> {
        Err(not_implemented("check_if_db_exists"))
    }
}

fn not_implemented(operation: &str) -> DriverError {
    DriverError::NotImplemented {
        operation: operation.to_string(),
    }
}
