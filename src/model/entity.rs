//! Entity, column and index records.

use serde::Serialize;

use super::Relation;
use crate::dedup::push_unique_by;

/// Identifiers stamped onto every entity of one translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Owning database identifier
    pub database: String,
    /// Owning schema identifier
    pub schema: String,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            database: String::new(),
            schema: crate::driver::PrismaDriver::STANDARD_SCHEMA.to_string(),
        }
    }
}

/// One translated declaration: a table for a model, or an enum type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub sql_name: String,
    pub name: String,
    pub file_name: String,
    pub database: String,
    pub schema: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_enum: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    pub columns: Vec<Column>,
    pub indices: Vec<Index>,
    pub relations: Vec<Relation>,
    pub file_imports: Vec<FileImport>,
}

impl Entity {
    /// Draft entity for a model: no columns, indices or relations yet.
    pub fn model(name: &str, options: &TranslateOptions) -> Self {
        Self {
            sql_name: name.to_string(),
            name: name.to_string(),
            file_name: name.to_string(),
            database: options.database.clone(),
            schema: options.schema.clone(),
            is_enum: false,
            enum_values: Vec::new(),
            columns: Vec::new(),
            indices: Vec::new(),
            relations: Vec::new(),
            file_imports: Vec::new(),
        }
    }

    /// Entity for an enum declaration with its values in declaration order.
    pub fn enumeration(name: &str, values: Vec<String>, options: &TranslateOptions) -> Self {
        Self {
            is_enum: true,
            enum_values: values,
            ..Self::model(name, options)
        }
    }

    /// Adds an index unless one with the same name exists. Returns whether it was added.
    pub fn add_index(&mut self, index: Index) -> bool {
        push_unique_by(&mut self.indices, index, |i| i.name.clone())
    }

    /// Records a dependency on another entity's file, once per entity name.
    pub fn add_file_import(&mut self, entity_name: &str) -> bool {
        push_unique_by(
            &mut self.file_imports,
            FileImport {
                entity_name: entity_name.to_string(),
                file_name: entity_name.to_string(),
            },
            |i| i.entity_name.clone(),
        )
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn relation(&self, field_name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.field_name == field_name)
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indices.iter().find(|i| i.name == name)
    }
}

/// A plain (non-relation) column of a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    /// Storage type; absent for enum columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,
    /// Language-level value type name
    pub value_type: String,
    pub nullable: bool,
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub primary: bool,
    pub generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    pub fulltext: bool,
}

impl Index {
    /// Single-column unique index synthesized from a `@unique` field: `<Entity>_<field>_key`.
    pub fn unique_key(entity: &str, field: &str) -> Self {
        Self {
            name: format!("{}_{}_key", entity, field),
            columns: vec![field.to_string()],
            unique: true,
            fulltext: false,
        }
    }

    /// Index declared by a block attribute: `<Entity>_<c1>_..._idx`.
    pub fn block(entity: &str, columns: Vec<String>, unique: bool, fulltext: bool) -> Self {
        Self {
            name: format!("{}_{}_idx", entity, columns.join("_")),
            columns,
            unique,
            fulltext,
        }
    }
}

/// A type dependency on another entity (currently only enums).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileImport {
    pub entity_name: String,
    pub file_name: String,
}
