//! Test fixtures for translation tests.
//!
//! Declaration trees in the parser's JSON format, loaded at compile time
//! using `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`BLOG`] - Every field shape, attribute kind and relation cardinality
//! - [`USER_POST`] - The minimal one-to-many pair
//!
//! ## Usage
//!
//! ```ignore
//! use crate::fixtures;
//!
//! let translation = crate::test_utils::translate_json(fixtures::BLOG);
//! ```

/// Blog schema fixture.
///
/// Contains:
/// - a datasource block (unrecognized, skipped)
/// - enum `Role` (USER, ADMIN) with a comment member
/// - `User`: generated id, unique + `@db.VarChar(255)` email, enum column with
///   default, `now()` timestamp, `@@index([name])` and an unrecognized `@@map`
/// - `Profile`: one-to-one with `User`, `onDelete: Cascade`
/// - `Post`: uuid id, named relation to `User` with both cascade rules,
///   many-to-many with `Tag`, `@@unique` and `@@fulltext`
/// - `Tag`: the other side of the many-to-many
/// - `Category`: self-referential tree
pub const BLOG: &str = include_str!("blog.json");

/// User has many posts; each post has one author via `authorId`.
pub const USER_POST: &str = include_str!("user_post.json");
