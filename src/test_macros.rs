//! Declarative macros for generating tests.
//!
//! This module provides macros to reduce boilerplate in CLI parsing,
//! translation and output tests. Instead of writing repetitive test
//! functions, you can declare the test cases and let the macro generate
//! the actual test code.

// =============================================================================
// CLI Test Macros
// =============================================================================

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "prisma_entities",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                #[allow(unreachable_patterns)]
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "translate",
///     test_name: test_requires_file,
///     required_arg: "--file",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["prisma_entities", $cmd]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "prisma_entities",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Translation Test Macros
// =============================================================================

/// Generate a test that translates a JSON fixture and runs assertions on the result.
///
/// # Example
///
/// ```ignore
/// translate_test! {
///     test_name: test_blog_entities,
///     fixture: fixtures::BLOG,
///     assertions: |translation| {
///         assert_eq!(translation.entities.len(), 6);
///     },
/// }
/// ```
#[macro_export]
macro_rules! translate_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:expr,
        assertions: |$translation:ident| $body:block $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let $translation = $crate::test_utils::translate_json($fixture);
            $body
        }
    };
}

/// Generate a test that checks the relation inferred for one field.
///
/// # Example
///
/// ```ignore
/// relation_test! {
///     test_name: test_user_posts,
///     fixture: fixtures::USER_POST,
///     entity: "User",
///     field: "posts",
///     kind: OneToMany,
///     related: "Post",
///     inverse: "author",
/// }
/// ```
#[macro_export]
macro_rules! relation_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:expr,
        entity: $entity:literal,
        field: $field:literal,
        kind: $kind:ident,
        related: $related:literal,
        inverse: $inverse:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let translation = $crate::test_utils::translate_json($fixture);
            let entity = translation
                .entity($entity)
                .expect(concat!("Missing entity ", $entity));
            let relation = entity
                .relation($field)
                .expect(concat!("Missing relation ", $entity, ".", $field));
            assert_eq!(relation.kind, $crate::model::RelationKind::$kind);
            assert_eq!(relation.related_table, $related);
            assert_eq!(relation.related_field, $inverse);
            assert!(
                entity.column($field).is_none(),
                concat!($entity, ".", $field, " should not also be a column")
            );
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies table output contains expected strings.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let output = $fixture.to_table();
            $(
                assert!(output.contains($needle), concat!("Table output should contain: ", $needle));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
