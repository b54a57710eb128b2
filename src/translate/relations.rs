//! Relation inference.
//!
//! Prisma schemas never say which side of a relation owns it or what its
//! cardinality is. Both are inferred from the shape of the processed field
//! and of the first field on the related model that points back at the
//! owning entity.

use super::attributes::RelationDescriptor;
use super::diagnostics::{DiagnosticKind, Diagnostics, Location};
use super::fields::FieldShape;
use crate::model::{JoinTable, Relation, RelationKind};
use crate::schema::ModelDeclaration;

/// Cardinality from the owning and matched field shapes.
///
/// | self-ref | owning list | matched list | kind |
/// |----------|-------------|--------------|------|
/// | yes | yes | - | OneToMany |
/// | yes | no | - | ManyToOne |
/// | no | yes | no | OneToMany |
/// | no | yes | yes | ManyToMany |
/// | no | no | yes | ManyToOne |
/// | no | no | no | OneToOne |
pub fn cardinality(is_self_reference: bool, owning_list: bool, matched_list: bool) -> RelationKind {
    match (is_self_reference, owning_list, matched_list) {
        (true, true, _) => RelationKind::OneToMany,
        (true, false, _) => RelationKind::ManyToOne,
        (false, true, false) => RelationKind::OneToMany,
        (false, true, true) => RelationKind::ManyToMany,
        (false, false, true) => RelationKind::ManyToOne,
        (false, false, false) => RelationKind::OneToOne,
    }
}

/// Build the relation for `field` of `owner`, whose type is the model `related`.
pub fn infer_relation(
    owner: &str,
    field: &FieldShape,
    related: &ModelDeclaration,
    descriptor: Option<RelationDescriptor>,
    diagnostics: &mut Diagnostics,
) -> Relation {
    let is_self_reference = related.name == owner;

    let mut back_references = related
        .fields()
        .filter(|candidate| candidate.field_type.base_name() == owner);
    let inverse = back_references.next();

    if back_references.next().is_some() {
        if let Some(first) = inverse {
            diagnostics.push(
                DiagnosticKind::AmbiguousInverse,
                Location::field(owner, &field.name),
                format!(
                    "{} has several fields of type {}; using {} as the inverse",
                    related.name, owner, first.name
                ),
            );
        }
    }

    let related_field = match inverse {
        Some(inverse) => inverse.name.clone(),
        None => {
            diagnostics.push(
                DiagnosticKind::MissingInverse,
                Location::field(owner, &field.name),
                format!("{} has no field of type {}; inverse left empty", related.name, owner),
            );
            String::new()
        }
    };

    let matched_list = inverse.is_some_and(|f| f.field_type.is_list());
    let kind = cardinality(is_self_reference, field.is_list, matched_list);

    let join_table = match kind {
        RelationKind::ManyToMany => Some(JoinTable::between(owner, &related.name)),
        _ => None,
    };

    let descriptor = descriptor.unwrap_or_default();
    Relation {
        kind,
        related_table: related.name.clone(),
        related_field,
        field_name: field.name.clone(),
        relation_name: descriptor.name,
        join_columns: descriptor.join_columns,
        join_table,
        options: descriptor.options,
    }
}
