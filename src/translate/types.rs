//! Type mapping tables.
//!
//! Every table is total: a name it does not know passes through unchanged,
//! because Prisma uses the referenced model or enum name as the field type.
//!
//! | Scalar | Storage type | Value type |
//! |--------|--------------|------------|
//! | String | varchar | string |
//! | Int | int | number |
//! | Boolean | boolean | boolean |
//! | DateTime | datetime | Date |
//! | Json | json | object |

/// Prisma scalar types with a fixed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Int,
    Boolean,
    DateTime,
    Json,
}

impl ScalarType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ScalarType::String),
            "Int" => Some(ScalarType::Int),
            "Boolean" => Some(ScalarType::Boolean),
            "DateTime" => Some(ScalarType::DateTime),
            "Json" => Some(ScalarType::Json),
            _ => None,
        }
    }

    /// Storage column type name.
    pub fn storage_type(&self) -> &'static str {
        match self {
            ScalarType::String => "varchar",
            ScalarType::Int => "int",
            ScalarType::Boolean => "boolean",
            ScalarType::DateTime => "datetime",
            ScalarType::Json => "json",
        }
    }

    /// Language-level value type name.
    pub fn value_type(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "number",
            ScalarType::Boolean => "boolean",
            ScalarType::DateTime => "Date",
            ScalarType::Json => "object",
        }
    }
}

/// Native database types accepted by `@db.*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeType {
    VarChar,
    Text,
    Int,
}

impl NativeType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "VarChar" => Some(NativeType::VarChar),
            "Text" => Some(NativeType::Text),
            "Int" => Some(NativeType::Int),
            _ => None,
        }
    }

    pub fn storage_type(&self) -> &'static str {
        match self {
            NativeType::VarChar => "varchar",
            NativeType::Text => "text",
            NativeType::Int => "int",
        }
    }
}

pub fn storage_type(scalar: &str) -> String {
    ScalarType::from_name(scalar)
        .map(|s| s.storage_type().to_string())
        .unwrap_or_else(|| scalar.to_string())
}

pub fn value_type(scalar: &str) -> String {
    ScalarType::from_name(scalar)
        .map(|s| s.value_type().to_string())
        .unwrap_or_else(|| scalar.to_string())
}

pub fn native_storage_type(native: &str) -> String {
    NativeType::from_name(native)
        .map(|n| n.storage_type().to_string())
        .unwrap_or_else(|| native.to_string())
}

/// Default expression for an enum column: `<Enum>.<VALUE>`.
pub fn enum_default(enum_name: &str, value: &str) -> String {
    format!("{}.{}", enum_name, value.to_uppercase())
}
