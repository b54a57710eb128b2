use std::error::Error;

use serde::Serialize;

use super::{KindFilter, RelationsCmd};
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::model::{Relation, RelationKind, TranslateOptions};

/// One inferred relation, flattened out of its owning entity
#[derive(Debug, Clone, Serialize)]
pub struct RelationEdge {
    pub entity: String,
    pub field: String,
    pub kind: RelationKind,
    pub related_table: String,
    pub related_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<String>,
}

impl RelationEdge {
    fn from_relation(entity: &str, relation: &Relation) -> Self {
        Self {
            entity: entity.to_string(),
            field: relation.field_name.clone(),
            kind: relation.kind,
            related_table: relation.related_table.clone(),
            related_field: relation.related_field.clone(),
            relation_name: relation.relation_name.clone(),
            join: relation.join_summary(),
        }
    }
}

/// Result of the relations command execution
#[derive(Debug, Clone, Serialize)]
pub struct RelationsResult {
    pub file: String,
    pub edges: Vec<RelationEdge>,
}

impl KindFilter {
    pub fn matches(&self, kind: RelationKind) -> bool {
        let wanted = match self {
            KindFilter::OneToOne => RelationKind::OneToOne,
            KindFilter::OneToMany => RelationKind::OneToMany,
            KindFilter::ManyToOne => RelationKind::ManyToOne,
            KindFilter::ManyToMany => RelationKind::ManyToMany,
        };
        wanted == kind
    }
}

impl Execute for RelationsCmd {
    type Output = RelationsResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let options = TranslateOptions {
            database: config
                .database
                .clone()
                .unwrap_or_else(|| self.source.file_label()),
            schema: config.schema_or_default().to_string(),
        };
        let translation = self.source.load(&options)?;

        let edges = translation
            .entities
            .iter()
            .filter(|e| self.source.selects(&e.name))
            .flat_map(|e| {
                e.relations
                    .iter()
                    .map(move |r| RelationEdge::from_relation(&e.name, r))
            })
            .filter(|edge| self.kind.is_none_or(|k| k.matches(edge.kind)))
            .collect();

        Ok(RelationsResult {
            file: self.source.file_label(),
            edges,
        })
    }
}
