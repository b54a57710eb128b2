//! Shared test utilities for translation and command tests.
//!
//! Small builders for declaration trees, so tests can describe a schema
//! inline instead of writing the parser's JSON by hand.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::model::TranslateOptions;
use crate::schema::{
    Attribute, AttributeArg, Declaration, EnumDeclaration, EnumMember, Expr, FieldDeclaration,
    Literal, ModelDeclaration, ModelMember, NamedArgument, SchemaAst, TypeExpr,
};
use crate::translate::{translate, Translation};

/// Create a temporary file containing the given content.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Parse a JSON declaration tree.
pub fn parse_ast(json: &str) -> SchemaAst {
    serde_json::from_str(json).expect("Fixture should be a valid declaration tree")
}

/// Parse and translate a JSON declaration tree with default options.
pub fn translate_json(json: &str) -> Translation {
    translate(&parse_ast(json), &TranslateOptions::default())
}

// =============================================================================
// Declaration builders
// =============================================================================

pub fn model(name: &str, members: Vec<ModelMember>) -> Declaration {
    Declaration::Model(ModelDeclaration {
        name: name.to_string(),
        members,
    })
}

pub fn enum_decl(name: &str, values: &[&str]) -> Declaration {
    Declaration::Enum(EnumDeclaration {
        name: name.to_string(),
        members: values
            .iter()
            .map(|v| EnumMember::EnumValue {
                name: v.to_string(),
            })
            .collect(),
    })
}

pub fn field(name: &str, field_type: TypeExpr, attributes: Vec<Attribute>) -> ModelMember {
    ModelMember::Field(FieldDeclaration {
        name: name.to_string(),
        field_type,
        attributes,
    })
}

pub fn block(path: &[&str], args: Vec<AttributeArg>) -> ModelMember {
    ModelMember::BlockAttribute(attr(path, args))
}

pub fn attr(path: &[&str], args: Vec<AttributeArg>) -> Attribute {
    Attribute {
        path: path.iter().map(|s| s.to_string()).collect(),
        args,
    }
}

// =============================================================================
// Type builders
// =============================================================================

pub fn scalar(name: &str) -> TypeExpr {
    TypeExpr::TypeId {
        name: name.to_string(),
    }
}

pub fn optional(name: &str) -> TypeExpr {
    TypeExpr::Optional {
        inner: Box::new(scalar(name)),
    }
}

pub fn list(name: &str) -> TypeExpr {
    TypeExpr::List {
        inner: Box::new(scalar(name)),
    }
}

// =============================================================================
// Argument builders (all positional, wrap with `named` for named arguments)
// =============================================================================

pub fn string(value: &str) -> AttributeArg {
    AttributeArg::Positional(Expr::Literal {
        value: Literal::String(value.to_string()),
    })
}

pub fn int(value: i64) -> AttributeArg {
    AttributeArg::Positional(Expr::Literal {
        value: Literal::Integer(value),
    })
}

pub fn path(segments: &[&str]) -> AttributeArg {
    AttributeArg::Positional(Expr::Path {
        value: segments.iter().map(|s| s.to_string()).collect(),
    })
}

pub fn call(function: &str) -> AttributeArg {
    AttributeArg::Positional(Expr::FunctionCall {
        path: vec![function.to_string()],
        args: vec![],
    })
}

pub fn array(items: &[&str]) -> AttributeArg {
    AttributeArg::Positional(Expr::Array {
        items: items
            .iter()
            .map(|s| Expr::Path {
                value: vec![s.to_string()],
            })
            .collect(),
    })
}

pub fn named(name: &str, arg: AttributeArg) -> AttributeArg {
    let AttributeArg::Positional(expression) = arg else {
        panic!("named() expects a positional argument");
    };
    AttributeArg::Named(NamedArgument {
        name: name.to_string(),
        expression,
    })
}
