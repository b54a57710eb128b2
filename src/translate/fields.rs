//! Field interpretation.
//!
//! Turns one model field into either a column or a relation, depending on
//! what its type name resolves to in the declaration index.

use super::attributes::{self, FieldAttributes};
use super::classify::DeclarationIndex;
use super::diagnostics::Diagnostics;
use super::relations;
use super::types;
use crate::model::{Column, Entity, Relation};
use crate::schema::{Declaration, FieldDeclaration};

/// Generator symbol of `@default(uuid())`.
const UUID: &str = "uuid";

/// Raw type shape of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
    pub name: String,
    /// Identifier named by the field's type
    pub base_type: String,
    pub is_optional: bool,
    pub is_list: bool,
}

impl FieldShape {
    pub fn of(field: &FieldDeclaration) -> Self {
        Self {
            name: field.name.clone(),
            base_type: field.field_type.base_name().to_string(),
            is_optional: field.field_type.is_optional(),
            is_list: field.field_type.is_list(),
        }
    }
}

/// What a field contributes to its entity.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutput {
    Column(Column),
    Relation(Relation),
}

pub fn interpret_field(
    entity: &mut Entity,
    field: &FieldDeclaration,
    index: &DeclarationIndex<'_>,
    diagnostics: &mut Diagnostics,
) -> FieldOutput {
    let shape = FieldShape::of(field);
    let mut attrs = attributes::interpret_field_attributes(entity, field, diagnostics);

    let value_type = types::value_type(&shape.base_type);
    let mut db_type = Some(match attrs.db_type.take() {
        Some(explicit) => explicit,
        None => types::storage_type(&shape.base_type),
    });
    let mut enum_type = None;

    match index.get(&value_type) {
        Some(Declaration::Model(related)) => {
            let relation =
                relations::infer_relation(&entity.name, &shape, related, attrs.relation, diagnostics);
            return FieldOutput::Relation(relation);
        }
        Some(Declaration::Enum(decl)) => {
            db_type = None;
            attrs.default = attrs
                .default
                .map(|value| types::enum_default(&decl.name, &value));
            entity.add_file_import(&decl.name);
            enum_type = Some(decl.name.clone());
        }
        Some(Declaration::Unknown) | None => {}
    }

    let generated = apply_generation(&mut attrs, &mut db_type);

    FieldOutput::Column(Column {
        name: shape.name,
        db_type,
        value_type,
        nullable: shape.is_optional,
        unique: attrs.unique,
        length: attrs.length,
        default: attrs.default,
        primary: attrs.primary,
        generated,
        enum_type,
    })
}

/// A primary key with a default is generated by the database: the default
/// and length are dropped and the storage type becomes `uuid` or `int`.
fn apply_generation(attrs: &mut FieldAttributes, db_type: &mut Option<String>) -> bool {
    let Some(default) = attrs.default.as_deref() else {
        return false;
    };
    if !attrs.primary || default.is_empty() {
        return false;
    }

    let storage = if default == UUID { "uuid" } else { "int" };
    *db_type = Some(storage.to_string());
    attrs.default = None;
    attrs.length = None;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RelationKind, TranslateOptions};
    use crate::schema::{ModelMember, SchemaAst};
    use crate::test_utils::{attr, call, enum_decl, field, int, list, model, optional, path, scalar};
    use crate::translate::classify::classify;
    use rstest::rstest;

    /// Interpret `member` as a field of the first declaration of `ast`.
    fn interpret(ast: &SchemaAst, member: &ModelMember) -> (Entity, FieldOutput, Diagnostics) {
        let mut diagnostics = Diagnostics::default();
        let (mut entities, index) = classify(ast, &TranslateOptions::default(), &mut diagnostics);
        let mut entity = entities.remove(0);
        let ModelMember::Field(field) = member else {
            panic!("Expected field member");
        };
        let output = interpret_field(&mut entity, field, &index, &mut diagnostics);
        (entity, output, diagnostics)
    }

    fn column(output: FieldOutput) -> Column {
        match output {
            FieldOutput::Column(column) => column,
            FieldOutput::Relation(relation) => panic!("Expected column, got {:?}", relation),
        }
    }

    #[rstest]
    fn test_field_shape() {
        let ModelMember::Field(decl) = field("tags", list("Tag"), vec![]) else {
            panic!("Expected field member");
        };
        let shape = FieldShape::of(&decl);
        assert_eq!(shape.base_type, "Tag");
        assert!(shape.is_list);
        assert!(!shape.is_optional);
    }

    #[rstest]
    fn test_scalar_column() {
        let ast = SchemaAst {
            declarations: vec![model("User", vec![])],
        };
        let (_, output, _) = interpret(&ast, &field("nickname", optional("String"), vec![]));
        let column = column(output);
        assert_eq!(column.name, "nickname");
        assert_eq!(column.db_type.as_deref(), Some("varchar"));
        assert_eq!(column.value_type, "string");
        assert!(column.nullable);
        assert!(!column.primary);
        assert!(!column.generated);
    }

    #[rstest]
    fn test_db_override_wins() {
        let ast = SchemaAst {
            declarations: vec![model("User", vec![])],
        };
        let member = field("bio", scalar("String"), vec![attr(&["db", "Text"], vec![])]);
        let (_, output, _) = interpret(&ast, &member);
        assert_eq!(column(output).db_type.as_deref(), Some("text"));
    }

    #[rstest]
    #[case(call("autoincrement"), "Int", "int")]
    #[case(call("uuid"), "String", "uuid")]
    #[case(call("cuid"), "String", "int")]
    fn test_primary_key_with_default_is_generated(
        #[case] generator: crate::schema::AttributeArg,
        #[case] scalar_name: &str,
        #[case] expected_type: &str,
    ) {
        let ast = SchemaAst {
            declarations: vec![model("User", vec![])],
        };
        let member = field(
            "id",
            scalar(scalar_name),
            vec![
                attr(&["id"], vec![]),
                attr(&["default"], vec![generator]),
                attr(&["db", "VarChar"], vec![int(36)]),
            ],
        );
        let (_, output, _) = interpret(&ast, &member);
        let column = column(output);
        assert!(column.primary);
        assert!(column.generated);
        assert_eq!(column.default, None);
        assert_eq!(column.length, None);
        assert_eq!(column.db_type.as_deref(), Some(expected_type));
    }

    #[rstest]
    fn test_unique_primary_key_keeps_key_index() {
        let ast = SchemaAst {
            declarations: vec![model("User", vec![])],
        };
        let member = field(
            "id",
            scalar("Int"),
            vec![
                attr(&["id"], vec![]),
                attr(&["unique"], vec![]),
                attr(&["default"], vec![call("autoincrement")]),
            ],
        );
        let (entity, output, _) = interpret(&ast, &member);
        let column = column(output);
        assert!(column.primary);
        assert!(column.unique);
        assert!(column.generated);
        assert_eq!(column.db_type.as_deref(), Some("int"));

        let index = entity.index("User_id_key").unwrap();
        assert_eq!(index.columns, vec!["id"]);
        assert!(index.unique);
    }

    #[rstest]
    fn test_primary_key_without_default_is_not_generated() {
        let ast = SchemaAst {
            declarations: vec![model("Country", vec![])],
        };
        let member = field("code", scalar("String"), vec![attr(&["id"], vec![])]);
        let (_, output, _) = interpret(&ast, &member);
        let column = column(output);
        assert!(column.primary);
        assert!(!column.generated);
        assert_eq!(column.db_type.as_deref(), Some("varchar"));
    }

    #[rstest]
    fn test_enum_column() {
        let ast = SchemaAst {
            declarations: vec![model("User", vec![]), enum_decl("Role", &["USER", "ADMIN"])],
        };
        let member = field("role", scalar("Role"), vec![attr(&["default"], vec![path(&["user"])])]);
        let (entity, output, _) = interpret(&ast, &member);
        let column = column(output);
        assert_eq!(column.db_type, None);
        assert_eq!(column.enum_type.as_deref(), Some("Role"));
        assert_eq!(column.value_type, "Role");
        assert_eq!(column.default.as_deref(), Some("Role.USER"));
        assert_eq!(entity.file_imports.len(), 1);
        assert_eq!(entity.file_imports[0].entity_name, "Role");
    }

    #[rstest]
    fn test_model_reference_becomes_relation() {
        let ast = SchemaAst {
            declarations: vec![
                model("User", vec![]),
                model("Post", vec![field("author", scalar("User"), vec![])]),
            ],
        };
        let (_, output, diagnostics) = interpret(&ast, &field("posts", list("Post"), vec![]));
        match output {
            FieldOutput::Relation(relation) => {
                assert_eq!(relation.kind, RelationKind::OneToMany);
                assert_eq!(relation.related_field, "author");
            }
            FieldOutput::Column(column) => panic!("Expected relation, got {:?}", column),
        }
        assert!(diagnostics.is_empty());
    }

    #[rstest]
    fn test_unresolved_type_passes_through() {
        let ast = SchemaAst {
            declarations: vec![model("User", vec![])],
        };
        let (_, output, _) = interpret(&ast, &field("location", scalar("Point"), vec![]));
        let column = column(output);
        assert_eq!(column.db_type.as_deref(), Some("Point"));
        assert_eq!(column.value_type, "Point");
        assert_eq!(column.enum_type, None);
    }
}
