mod execute;
mod output;

pub use execute::{RelationEdge, RelationsResult};

use clap::Args;

use crate::commands::SchemaArgs;

/// List the relations inferred between entities
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  prisma_entities relations -f schema.json              # Every relation edge
  prisma_entities relations -f schema.json -e Post      # Edges owned by Post
  prisma_entities relations -f schema.json -k many-to-many")]
pub struct RelationsCmd {
    #[command(flatten)]
    pub source: SchemaArgs,

    /// Only report relations of this cardinality
    #[arg(short, long, value_enum)]
    pub kind: Option<KindFilter>,
}

/// Cardinality filter for the relations command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindFilter {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}
