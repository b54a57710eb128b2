//! Relation records.

use serde::Serialize;

/// Cardinality of a relation, seen from the owning field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::OneToOne => "OneToOne",
            RelationKind::OneToMany => "OneToMany",
            RelationKind::ManyToOne => "ManyToOne",
            RelationKind::ManyToMany => "ManyToMany",
        }
    }
}

/// Referential action for `onDelete` / `onUpdate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ReferentialAction {
    #[default]
    #[serde(rename = "NO ACTION")]
    NoAction,
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "CASCADE")]
    Cascade,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
}

impl ReferentialAction {
    /// Maps a schema value (`Cascade`, `SetNull`, ...). Unrecognized values fall back to `NoAction`.
    pub fn from_schema(value: &str) -> Self {
        match value {
            "Restrict" => ReferentialAction::Restrict,
            "Cascade" => ReferentialAction::Cascade,
            "SetNull" => ReferentialAction::SetNull,
            "SetDefault" => ReferentialAction::SetDefault,
            _ => ReferentialAction::NoAction,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<ReferentialAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_update: Option<ReferentialAction>,
}

/// `local` column referencing `referenced` on the related entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinColumn {
    pub name: String,
    pub referenced_column_name: String,
}

/// Join table synthesized for a many-to-many relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinTable {
    pub name: String,
    pub join_columns: Vec<JoinColumn>,
    pub inverse_join_columns: Vec<JoinColumn>,
}

impl JoinTable {
    /// `<Owner>_<Related>` with `<Owner>_id` / `<Related>_id`, both referencing `id`.
    pub fn between(owner: &str, related: &str) -> Self {
        Self {
            name: format!("{}_{}", owner, related),
            join_columns: vec![JoinColumn {
                name: format!("{}_id", owner),
                referenced_column_name: "id".to_string(),
            }],
            inverse_join_columns: vec![JoinColumn {
                name: format!("{}_id", related),
                referenced_column_name: "id".to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    pub kind: RelationKind,
    pub related_table: String,
    /// Inverse field on the related entity; empty when none was found
    pub related_field: String,
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub join_columns: Vec<JoinColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_table: Option<JoinTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RelationOptions>,
}

impl Relation {
    /// Join table name, or the `local->referenced` column pairs.
    pub fn join_summary(&self) -> Option<String> {
        if let Some(table) = &self.join_table {
            return Some(table.name.clone());
        }
        if self.join_columns.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .join_columns
            .iter()
            .map(|c| format!("{}->{}", c.name, c.referenced_column_name))
            .collect();
        Some(pairs.join(", "))
    }
}
