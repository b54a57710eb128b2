//! Relational entity metadata produced by the translator.
//!
//! This is the contract handed to a code-generation backend: one [`Entity`]
//! per declaration, each carrying its columns, indices, relations and the
//! other entities it depends on.
//!
//! # Field / output mapping
//!
//! A model field becomes exactly one of:
//!
//! | Field type refers to | Output |
//! |----------------------|--------|
//! | scalar (`String`, `Int`, ...) | [`Column`] with a storage type |
//! | enum | [`Column`] without storage type, `enum_type` set |
//! | model | [`Relation`] |

mod entity;
mod relation;

pub use entity::{Column, Entity, FileImport, Index, TranslateOptions};
pub use relation::{
    JoinColumn, JoinTable, ReferentialAction, Relation, RelationKind, RelationOptions,
};
