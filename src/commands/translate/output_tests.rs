//! Output formatting tests for translate command.

#[cfg(test)]
mod tests {
    use super::super::execute::TranslateResult;
    use crate::model::{
        Column, Entity, Index, Relation, RelationKind, TranslateOptions,
    };
    use crate::output::{OutputFormat, Outputable};
    use crate::translate::{DiagnosticKind, Diagnostics, Location};
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const EMPTY_TABLE: &str = "\
Schema: schema.json (database: schema.json, schema: prisma)

No entities found.";

    const USER_TABLE: &str = "\
Schema: schema.json (database: schema.json, schema: prisma)

Entities (2):

enum Role: USER, ADMIN

User
  columns:
    id: int [primary, generated]
    email: varchar(255) [unique]
    role: enum Role [default Role.USER]
  indices:
    User_email_key (email) unique
  relations:
    posts -> Post.author OneToMany
  imports: Role

Diagnostics (1):
  User: unrecognized block attribute @@map";

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn options() -> TranslateOptions {
        TranslateOptions {
            database: "schema.json".to_string(),
            schema: "prisma".to_string(),
        }
    }

    fn column(name: &str, db_type: Option<&str>, value_type: &str) -> Column {
        Column {
            name: name.to_string(),
            db_type: db_type.map(str::to_string),
            value_type: value_type.to_string(),
            nullable: false,
            unique: false,
            length: None,
            default: None,
            primary: false,
            generated: false,
            enum_type: None,
        }
    }

    #[fixture]
    fn empty_result() -> TranslateResult {
        TranslateResult {
            file: "schema.json".to_string(),
            database: "schema.json".to_string(),
            schema: "prisma".to_string(),
            entities: vec![],
            diagnostics: Diagnostics::default(),
        }
    }

    #[fixture]
    fn user_result() -> TranslateResult {
        let options = options();
        let role = Entity::enumeration(
            "Role",
            vec!["USER".to_string(), "ADMIN".to_string()],
            &options,
        );

        let mut user = Entity::model("User", &options);
        user.columns.push(Column {
            primary: true,
            generated: true,
            ..column("id", Some("int"), "number")
        });
        user.columns.push(Column {
            unique: true,
            length: Some(255),
            ..column("email", Some("varchar"), "string")
        });
        user.columns.push(Column {
            default: Some("Role.USER".to_string()),
            enum_type: Some("Role".to_string()),
            ..column("role", None, "Role")
        });
        user.add_index(Index::unique_key("User", "email"));
        user.relations.push(Relation {
            kind: RelationKind::OneToMany,
            related_table: "Post".to_string(),
            related_field: "author".to_string(),
            field_name: "posts".to_string(),
            relation_name: None,
            join_columns: vec![],
            join_table: None,
            options: None,
        });
        user.add_file_import("Role");

        let mut diagnostics = Diagnostics::default();
        diagnostics.push(
            DiagnosticKind::UnrecognizedBlockAttribute,
            Location::entity("User"),
            "unrecognized block attribute @@map",
        );

        TranslateResult {
            file: "schema.json".to_string(),
            database: "schema.json".to_string(),
            schema: "prisma".to_string(),
            entities: vec![role, user],
            diagnostics,
        }
    }

    // =========================================================================
    // Tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: TranslateResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_user,
        fixture: user_result,
        fixture_type: TranslateResult,
        expected: USER_TABLE,
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: user_result,
        fixture_type: TranslateResult,
        contains: ["schema: prisma", "entities[2]"],
    }

    #[rstest]
    fn test_format_json(user_result: TranslateResult) {
        let output = user_result.format(OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&output).expect("Valid JSON");

        let role = &json["entities"][0];
        assert_eq!(role["is_enum"], true);
        assert_eq!(role["enum_values"][1], "ADMIN");

        let user = &json["entities"][1];
        assert!(user.get("is_enum").is_none());
        assert_eq!(user["columns"][1]["length"], 255);
        assert!(user["columns"][2].get("db_type").is_none());
        assert_eq!(user["relations"][0]["kind"], "OneToMany");
        assert!(user["relations"][0].get("join_columns").is_none());
        assert_eq!(json["diagnostics"][0]["kind"], "UnrecognizedBlockAttribute");
    }

    #[rstest]
    fn test_to_table_missing_inverse_and_join(mut user_result: TranslateResult) {
        let user = &mut user_result.entities[1];
        user.relations[0].related_field = String::new();
        user.relations[0].join_columns.push(crate::model::JoinColumn {
            name: "postId".to_string(),
            referenced_column_name: "id".to_string(),
        });
        let output = user_result.to_table();
        assert!(output.contains("    posts -> Post.? OneToMany via postId->id"));
    }
}
