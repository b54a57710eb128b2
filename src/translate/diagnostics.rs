//! Warnings collected while translating.
//!
//! Nothing in the translator is fatal. Constructs it cannot interpret are
//! recorded here with their location and skipped, and the collector is
//! returned alongside the entities.

use std::fmt;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// Top-level declaration that is neither a model nor an enum
    UnrecognizedDeclaration,
    /// Block attribute other than `@@index` / `@@unique` / `@@fulltext`
    UnrecognizedBlockAttribute,
    /// Index block attribute without a column list
    MalformedIndex,
    /// `@relation` argument other than name / fields / references / onDelete / onUpdate
    UnknownRelationArgument,
    /// `@db.*` argument that is not a non-negative integer
    InvalidLength,
    /// Related model has several fields pointing back; the first one was used
    AmbiguousInverse,
    /// Related model has no field pointing back; the inverse is empty
    MissingInverse,
}

/// Where a diagnostic was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Location {
    Declaration { index: usize },
    Entity { entity: String },
    Field { entity: String, field: String },
}

impl Location {
    pub fn entity(entity: &str) -> Self {
        Location::Entity {
            entity: entity.to_string(),
        }
    }

    pub fn field(entity: &str, field: &str) -> Self {
        Location::Field {
            entity: entity.to_string(),
            field: field.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Declaration { index } => write!(f, "declaration #{}", index),
            Location::Entity { entity } => f.write_str(entity),
            Location::Field { entity, field } => write!(f, "{}.{}", entity, field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: Location,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push(&mut self, kind: DiagnosticKind, location: Location, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            kind,
            location,
            message: message.into(),
        };
        debug!(kind = ?diagnostic.kind, "{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.kind == kind)
    }
}
