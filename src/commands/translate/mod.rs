mod execute;
mod output;
mod output_tests;

pub use execute::TranslateResult;

use clap::Args;

use crate::commands::SchemaArgs;

/// Translate a schema into entity metadata
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  prisma_entities translate -f schema.json                  # All entities
  prisma_entities translate -f schema.json -e User          # One entity
  prisma_entities translate -f schema.json --schema public  # Custom schema identifier
  prisma_entities --format json translate -f schema.json    # Machine-readable output")]
pub struct TranslateCmd {
    #[command(flatten)]
    pub source: SchemaArgs,

    /// Database identifier stamped onto entities (defaults to the input path)
    #[arg(long)]
    pub database: Option<String>,

    /// Schema identifier stamped onto entities
    #[arg(long)]
    pub schema: Option<String>,
}
