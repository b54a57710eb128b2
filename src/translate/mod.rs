//! Schema-to-entity translation.
//!
//! Translation runs in two phases over an immutable declaration tree:
//!
//! 1. **Classification** (`classify.rs`): one draft [`Entity`] per model or
//!    enum, plus a read-only name index.
//! 2. **Interpretation**: each model's members are walked in source order.
//!    Fields go through attribute interpretation (`attributes.rs`), type
//!    mapping (`types.rs`) and, when they reference another model, relation
//!    inference (`relations.rs`); the result is assembled into the entity.
//!    Block attributes become indices.
//!
//! Nothing here fails. Constructs that cannot be interpreted are recorded in
//! the returned [`Diagnostics`].

mod attributes;
mod classify;
mod diagnostics;
mod fields;
mod relations;
mod types;

pub use attributes::{resolve_default, FieldAttributes, RelationDescriptor};
pub use classify::DeclarationIndex;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Location};
pub use fields::{FieldOutput, FieldShape};
pub use relations::cardinality;
pub use types::{NativeType, ScalarType};

use serde::Serialize;
use tracing::debug;

use crate::model::{Entity, TranslateOptions};
use crate::schema::{ModelDeclaration, ModelMember, SchemaAst};

/// Result of a translation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translation {
    pub entities: Vec<Entity>,
    pub diagnostics: Diagnostics,
}

impl Translation {
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }
}

/// Translate a parsed schema into entities.
pub fn translate(ast: &SchemaAst, options: &TranslateOptions) -> Translation {
    let mut diagnostics = Diagnostics::default();
    let (mut entities, index) = classify::classify(ast, options, &mut diagnostics);

    for entity in entities.iter_mut().filter(|e| !e.is_enum) {
        if let Some(model) = index.model(&entity.name) {
            interpret_model(entity, model, &index, &mut diagnostics);
        }
    }

    debug!(
        entities = entities.len(),
        diagnostics = diagnostics.len(),
        "translation finished"
    );
    Translation {
        entities,
        diagnostics,
    }
}

fn interpret_model(
    entity: &mut Entity,
    model: &ModelDeclaration,
    index: &DeclarationIndex<'_>,
    diagnostics: &mut Diagnostics,
) {
    for member in &model.members {
        match member {
            ModelMember::Field(field) => {
                let output = fields::interpret_field(entity, field, index, diagnostics);
                assemble(entity, output);
            }
            ModelMember::BlockAttribute(attribute) => {
                attributes::interpret_block_attribute(entity, attribute, diagnostics);
            }
            ModelMember::Other => {
                debug!(entity = %entity.name, "skipping non-field member");
            }
        }
    }
}

fn assemble(entity: &mut Entity, output: FieldOutput) {
    match output {
        FieldOutput::Column(column) => entity.columns.push(column),
        FieldOutput::Relation(relation) => entity.relations.push(relation),
    }
}
