//! JSON structures for a parsed Prisma schema.
//!
//! These types are used to deserialize the declaration tree emitted by an
//! external Prisma schema parser. Every node is internally tagged by `kind`,
//! so each dispatch point in the translator matches a closed set of variants.

use std::fmt;

use serde::Deserialize;

/// The root of a parsed schema: top-level declarations in source order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaAst {
    pub declarations: Vec<Declaration>,
}

/// A top-level declaration.
///
/// Generator and datasource blocks (and anything else the parser emits)
/// land in `Unknown` and are skipped by the classifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Declaration {
    Model(ModelDeclaration),
    Enum(EnumDeclaration),
    #[serde(other)]
    Unknown,
}

impl Declaration {
    /// Name of the declaration, if it is a model or an enum.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Model(model) => Some(&model.name),
            Declaration::Enum(decl) => Some(&decl.name),
            Declaration::Unknown => None,
        }
    }

    pub fn as_model(&self) -> Option<&ModelDeclaration> {
        match self {
            Declaration::Model(model) => Some(model),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelDeclaration {
    pub name: String,
    #[serde(default)]
    pub members: Vec<ModelMember>,
}

impl ModelDeclaration {
    /// Field members in source order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.members.iter().filter_map(|member| match member {
            ModelMember::Field(field) => Some(field),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumDeclaration {
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ModelMember {
    Field(FieldDeclaration),
    BlockAttribute(Attribute),
    /// Comments and any other member kinds.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EnumMember {
    EnumValue {
        name: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: TypeExpr,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Shape of a field's type: `Post`, `Post?` or `Post[]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeExpr {
    TypeId {
        name: String,
    },
    Optional {
        #[serde(rename = "type")]
        inner: Box<TypeExpr>,
    },
    List {
        #[serde(rename = "type")]
        inner: Box<TypeExpr>,
    },
}

impl TypeExpr {
    /// The identifier named by the innermost `typeId`.
    pub fn base_name(&self) -> &str {
        match self {
            TypeExpr::TypeId { name } => name,
            TypeExpr::Optional { inner } | TypeExpr::List { inner } => inner.base_name(),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeExpr::Optional { .. })
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeExpr::List { .. })
    }
}

/// A field attribute (`@id`, `@db.VarChar(255)`) or block attribute (`@@index([a, b])`).
///
/// `path` holds the dotted name split into segments, without the `@` prefix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
    pub path: Vec<String>,
    #[serde(default)]
    pub args: Vec<AttributeArg>,
}

impl Attribute {
    /// Whether any path segment equals `segment`.
    pub fn has_segment(&self, segment: &str) -> bool {
        self.path.iter().any(|s| s == segment)
    }

    /// Dotted form of the path, for messages.
    pub fn display_path(&self) -> String {
        self.path.join(".")
    }
}

/// An attribute argument: `fields: [authorId]` or a bare expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeArg {
    Named(NamedArgument),
    Positional(Expr),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedArgument {
    pub name: String,
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expr {
    Literal {
        value: Literal,
    },
    Path {
        value: Vec<String>,
    },
    FunctionCall {
        path: Vec<String>,
        #[serde(default)]
        args: Vec<AttributeArg>,
    },
    Array {
        items: Vec<Expr>,
    },
}

impl Expr {
    /// First segment of a path, or of a called name as in `title(sort: Desc)`.
    pub fn path_head(&self) -> Option<&str> {
        match self {
            Expr::Path { value } | Expr::FunctionCall { path: value, .. } => {
                value.first().map(String::as_str)
            }
            _ => None,
        }
    }

    /// Path heads of every item of an array expression, e.g. `[authorId, slug]`.
    ///
    /// `None` unless this is an array and every item has a path head.
    pub fn path_list(&self) -> Option<Vec<String>> {
        match self {
            Expr::Array { items } => items
                .iter()
                .map(|item| item.path_head().map(str::to_string))
                .collect(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Boolean(value) => write!(f, "{}", value),
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{}", value),
            Literal::String(value) => f.write_str(value),
        }
    }
}
