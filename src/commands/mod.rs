//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` producing a serializable result
//! - `output.rs` implementing [`Outputable`] for that result

mod relations;
mod translate;

pub use relations::{KindFilter, RelationEdge, RelationsCmd, RelationsResult};
pub use translate::{TranslateCmd, TranslateResult};

use clap::{Args, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing::warn;

use crate::config::ConfigFile;
use crate::driver::PrismaDriver;
use crate::model::TranslateOptions;
use crate::output::{OutputFormat, Outputable};
use crate::translate::Translation;

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>>;
}

/// Arguments shared by every command that reads a schema.
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Declaration tree JSON produced by the schema parser
    #[arg(short, long)]
    pub file: PathBuf,

    /// Only report this entity
    #[arg(short, long)]
    pub entity: Option<String>,
}

impl SchemaArgs {
    /// Load the schema and translate it, logging every diagnostic.
    pub fn load(&self, options: &TranslateOptions) -> Result<Translation, Box<dyn Error>> {
        let mut driver = PrismaDriver::new();
        driver.connect(&self.file)?;
        let translation = driver.translate(options)?;
        driver.disconnect();

        for diagnostic in translation.diagnostics.iter() {
            warn!(kind = ?diagnostic.kind, "{}", diagnostic);
        }
        Ok(translation)
    }

    /// Whether `name` passes the `--entity` filter.
    pub fn selects(&self, name: &str) -> bool {
        self.entity.as_deref().is_none_or(|wanted| wanted == name)
    }

    pub fn file_label(&self) -> String {
        self.file.display().to_string()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a schema into entity metadata
    Translate(TranslateCmd),

    /// List the relations inferred between entities
    Relations(RelationsCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: &ConfigFile, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Translate(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Relations(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}
