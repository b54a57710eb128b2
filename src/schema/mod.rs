//! Parsed Prisma schema input.
//!
//! The schema source text is parsed by an external tool; this module only
//! describes the declaration tree it hands over. The tree is read-only input
//! for the translator.
//!
//! # Node kinds
//!
//! | Node | Variants |
//! |------|----------|
//! | `Declaration` | `model`, `enum`, anything else |
//! | `ModelMember` | `field`, `blockAttribute`, anything else |
//! | `TypeExpr` | `typeId`, `optional`, `list` |
//! | `Expr` | `literal`, `path`, `functionCall`, `array` |

mod ast;

pub use ast::{
    Attribute, AttributeArg, Declaration, EnumDeclaration, EnumMember, Expr, FieldDeclaration,
    Literal, ModelDeclaration, ModelMember, NamedArgument, SchemaAst, TypeExpr,
};
