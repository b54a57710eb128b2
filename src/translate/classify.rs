//! Declaration classification: the first phase of translation.
//!
//! Produces one draft entity per model or enum declaration and an immutable
//! name index that later phases use to resolve field types.

use std::collections::HashMap;

use tracing::debug;

use super::diagnostics::{DiagnosticKind, Diagnostics, Location};
use crate::model::{Entity, TranslateOptions};
use crate::schema::{Declaration, EnumDeclaration, EnumMember, ModelDeclaration, SchemaAst};

/// Declaration name -> declaration. Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct DeclarationIndex<'a> {
    by_name: HashMap<&'a str, &'a Declaration>,
}

impl<'a> DeclarationIndex<'a> {
    pub fn get(&self, name: &str) -> Option<&'a Declaration> {
        self.by_name.get(name).copied()
    }

    pub fn model(&self, name: &str) -> Option<&'a ModelDeclaration> {
        self.get(name).and_then(Declaration::as_model)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Partition declarations into draft entities and build the name index.
pub fn classify<'a>(
    ast: &'a SchemaAst,
    options: &TranslateOptions,
    diagnostics: &mut Diagnostics,
) -> (Vec<Entity>, DeclarationIndex<'a>) {
    let mut entities = Vec::new();
    let mut index = DeclarationIndex::default();

    for (position, declaration) in ast.declarations.iter().enumerate() {
        match declaration {
            Declaration::Model(model) => {
                entities.push(Entity::model(&model.name, options));
                index.by_name.insert(model.name.as_str(), declaration);
            }
            Declaration::Enum(decl) => {
                entities.push(Entity::enumeration(&decl.name, enum_values(decl), options));
                index.by_name.insert(decl.name.as_str(), declaration);
            }
            Declaration::Unknown => {
                diagnostics.push(
                    DiagnosticKind::UnrecognizedDeclaration,
                    Location::Declaration { index: position },
                    "declaration is neither a model nor an enum; skipped",
                );
            }
        }
    }

    debug!(entities = entities.len(), "classified declarations");
    (entities, index)
}

fn enum_values(decl: &EnumDeclaration) -> Vec<String> {
    decl.members
        .iter()
        .filter_map(|member| match member {
            EnumMember::EnumValue { name } => Some(name.clone()),
            EnumMember::Other => None,
        })
        .collect()
}
