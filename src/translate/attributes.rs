//! Field and block attribute interpretation.
//!
//! Field attributes are classified by path segment and compose onto one
//! [`FieldAttributes`] accumulator; a field may carry `@id`, `@default` and
//! `@db.*` at the same time. Unique fields and index block attributes write
//! their index straight into the entity, first name wins.

use tracing::debug;

use super::diagnostics::{DiagnosticKind, Diagnostics, Location};
use super::types;
use crate::model::{Entity, Index, JoinColumn, ReferentialAction, RelationOptions};
use crate::schema::{Attribute, AttributeArg, Expr, FieldDeclaration, Literal};

/// Current-time marker accepted by `@default(now())`.
const NOW: &str = "now";
/// Database-native current timestamp.
const CURRENT_TIMESTAMP: &str = "CURRENT_TIMESTAMP(3)";

/// Everything the attributes of one field say about it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldAttributes {
    pub primary: bool,
    pub unique: bool,
    /// Storage type from a `@db.*` override
    pub db_type: Option<String>,
    pub length: Option<u32>,
    /// Resolved default expression
    pub default: Option<String>,
    pub relation: Option<RelationDescriptor>,
}

/// Explicit wiring from `@relation(...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationDescriptor {
    pub name: Option<String>,
    pub join_columns: Vec<JoinColumn>,
    pub options: Option<RelationOptions>,
}

/// Interpret a field's attributes in source order.
pub fn interpret_field_attributes(
    entity: &mut Entity,
    field: &FieldDeclaration,
    diagnostics: &mut Diagnostics,
) -> FieldAttributes {
    let scalar = field.field_type.base_name();
    let mut attrs = FieldAttributes::default();

    for attribute in &field.attributes {
        if attribute.has_segment("id") {
            attrs.primary = true;
        }
        if attribute.has_segment("unique") {
            attrs.unique = true;
            entity.add_index(Index::unique_key(&entity.name, &field.name));
        }
        if attribute.has_segment("db") {
            // @db.VarChar(255): the native type is the second segment
            if let Some(native) = attribute.path.get(1) {
                attrs.db_type = Some(types::native_storage_type(native));
            }
            if let Some(arg) = attribute.args.first() {
                match length_of(arg) {
                    Some(length) => attrs.length = Some(length),
                    None => diagnostics.push(
                        DiagnosticKind::InvalidLength,
                        Location::field(&entity.name, &field.name),
                        format!("@{} argument is not a length; ignored", attribute.display_path()),
                    ),
                }
            }
        }
        if attribute.has_segment("default") {
            if let Some(symbol) = attribute.args.first().and_then(default_symbol) {
                attrs.default = resolve_default(&symbol, scalar);
            }
        }
        if attribute.has_segment("relation") {
            let descriptor = attrs.relation.get_or_insert_with(RelationDescriptor::default);
            interpret_relation(descriptor, attribute, &entity.name, &field.name, diagnostics);
        }
    }

    attrs
}

/// Interpret a model-level attribute (`@@index`, `@@unique`, `@@fulltext`).
pub fn interpret_block_attribute(
    entity: &mut Entity,
    attribute: &Attribute,
    diagnostics: &mut Diagnostics,
) {
    let unique = attribute.has_segment("unique");
    let fulltext = attribute.has_segment("fulltext");
    if !(unique || fulltext || attribute.has_segment("index")) {
        diagnostics.push(
            DiagnosticKind::UnrecognizedBlockAttribute,
            Location::entity(&entity.name),
            format!("@@{} is not an index; ignored", attribute.display_path()),
        );
        return;
    }

    let columns = match attribute.args.first().and_then(index_columns) {
        Some(columns) if !columns.is_empty() => columns,
        _ => {
            diagnostics.push(
                DiagnosticKind::MalformedIndex,
                Location::entity(&entity.name),
                format!("@@{} has no usable column list; ignored", attribute.display_path()),
            );
            return;
        }
    };

    let index = Index::block(&entity.name, columns, unique, fulltext);
    let name = index.name.clone();
    if !entity.add_index(index) {
        debug!(entity = %entity.name, index = %name, "duplicate index ignored");
    }
}

/// Default for a field given the evaluated `@default` symbol and the field's scalar type.
///
/// `now` on a DateTime becomes the current timestamp; anything else passes through.
pub fn resolve_default(symbol: &str, scalar: &str) -> Option<String> {
    if scalar == "DateTime" && symbol == NOW {
        return Some(CURRENT_TIMESTAMP.to_string());
    }
    Some(symbol.to_string())
}

/// Evaluate a `@default` argument: literal value, bare path head or called function name.
fn default_symbol(arg: &AttributeArg) -> Option<String> {
    match arg {
        AttributeArg::Positional(expr) => expr_symbol(expr),
        AttributeArg::Named(_) => None,
    }
}

fn expr_symbol(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Literal { value } => Some(value.to_string()),
        Expr::Path { value } | Expr::FunctionCall { path: value, .. } => value.first().cloned(),
        Expr::Array { .. } => None,
    }
}

fn length_of(arg: &AttributeArg) -> Option<u32> {
    match arg {
        AttributeArg::Positional(Expr::Literal {
            value: Literal::Integer(n),
        }) => u32::try_from(*n).ok(),
        _ => None,
    }
}

/// Column list of an index attribute: `@@index([a, b])` or `@@index(fields: [a, b])`.
fn index_columns(arg: &AttributeArg) -> Option<Vec<String>> {
    match arg {
        AttributeArg::Positional(expr) => expr.path_list(),
        AttributeArg::Named(named) if named.name == "fields" => named.expression.path_list(),
        AttributeArg::Named(_) => None,
    }
}

fn interpret_relation(
    descriptor: &mut RelationDescriptor,
    attribute: &Attribute,
    entity: &str,
    field: &str,
    diagnostics: &mut Diagnostics,
) {
    let mut fields: Vec<String> = Vec::new();
    let mut references: Vec<String> = Vec::new();

    for arg in &attribute.args {
        match arg {
            AttributeArg::Positional(Expr::Literal { value }) => {
                descriptor.name = Some(value.to_string());
            }
            AttributeArg::Named(named) => match named.name.as_str() {
                "fields" | "references" => {
                    let Some(columns) = named.expression.path_list() else {
                        diagnostics.push(
                            DiagnosticKind::UnknownRelationArgument,
                            Location::field(entity, field),
                            format!("relation {} is not a list of column names; ignored", named.name),
                        );
                        continue;
                    };
                    if named.name == "fields" {
                        fields = columns;
                    } else {
                        references = columns;
                    }
                }
                "name" => descriptor.name = expr_symbol(&named.expression),
                "onDelete" => {
                    let action = referential_action(&named.expression);
                    descriptor.options.get_or_insert_with(RelationOptions::default).on_delete = Some(action);
                }
                "onUpdate" => {
                    let action = referential_action(&named.expression);
                    descriptor.options.get_or_insert_with(RelationOptions::default).on_update = Some(action);
                }
                other => diagnostics.push(
                    DiagnosticKind::UnknownRelationArgument,
                    Location::field(entity, field),
                    format!("unknown relation argument: {}", other),
                ),
            },
            AttributeArg::Positional(_) => diagnostics.push(
                DiagnosticKind::UnknownRelationArgument,
                Location::field(entity, field),
                "positional relation argument is not a name literal; ignored",
            ),
        }
    }

    if fields.len() != references.len() {
        diagnostics.push(
            DiagnosticKind::UnknownRelationArgument,
            Location::field(entity, field),
            format!(
                "relation has {} fields but {} references; unpaired columns ignored",
                fields.len(),
                references.len()
            ),
        );
    }

    descriptor.join_columns.extend(fields.into_iter().zip(references).map(|(name, referenced)| {
        JoinColumn {
            name,
            referenced_column_name: referenced,
        }
    }));
}

fn referential_action(expr: &Expr) -> ReferentialAction {
    expr_symbol(expr)
        .map(|value| ReferentialAction::from_schema(&value))
        .unwrap_or_default()
}
