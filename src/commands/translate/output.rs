//! Output formatting for translate command results.

use super::execute::TranslateResult;
use crate::model::{Column, Entity, Index, Relation};
use crate::output::{or_dash, Outputable};

impl Outputable for TranslateResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Schema: {} (database: {}, schema: {})",
            self.file, self.database, self.schema
        ));
        lines.push(String::new());

        if self.entities.is_empty() {
            lines.push("No entities found.".to_string());
        } else {
            lines.push(format!("Entities ({}):", self.entities.len()));
            for entity in &self.entities {
                lines.push(String::new());
                entity_lines(entity, &mut lines);
            }
        }

        if !self.diagnostics.is_empty() {
            lines.push(String::new());
            lines.push(format!("Diagnostics ({}):", self.diagnostics.len()));
            for diagnostic in self.diagnostics.iter() {
                lines.push(format!("  {}", diagnostic));
            }
        }

        lines.join("\n")
    }
}

fn entity_lines(entity: &Entity, lines: &mut Vec<String>) {
    if entity.is_enum {
        lines.push(format!("enum {}: {}", entity.name, entity.enum_values.join(", ")));
        return;
    }

    lines.push(entity.name.clone());
    if !entity.columns.is_empty() {
        lines.push("  columns:".to_string());
        lines.extend(entity.columns.iter().map(column_line));
    }
    if !entity.indices.is_empty() {
        lines.push("  indices:".to_string());
        lines.extend(entity.indices.iter().map(index_line));
    }
    if !entity.relations.is_empty() {
        lines.push("  relations:".to_string());
        lines.extend(entity.relations.iter().map(relation_line));
    }
    if !entity.file_imports.is_empty() {
        let imports: Vec<&str> = entity
            .file_imports
            .iter()
            .map(|i| i.entity_name.as_str())
            .collect();
        lines.push(format!("  imports: {}", imports.join(", ")));
    }
}

fn column_line(column: &Column) -> String {
    let column_type = match (&column.db_type, column.length) {
        (Some(db_type), Some(length)) => format!("{}({})", db_type, length),
        (Some(db_type), None) => db_type.clone(),
        (None, _) => format!("enum {}", or_dash(column.enum_type.as_deref())),
    };

    let mut flags = Vec::new();
    if column.primary {
        flags.push("primary".to_string());
    }
    if column.generated {
        flags.push("generated".to_string());
    }
    if column.unique {
        flags.push("unique".to_string());
    }
    if column.nullable {
        flags.push("nullable".to_string());
    }
    if let Some(default) = &column.default {
        flags.push(format!("default {}", default));
    }

    if flags.is_empty() {
        format!("    {}: {}", column.name, column_type)
    } else {
        format!("    {}: {} [{}]", column.name, column_type, flags.join(", "))
    }
}

fn index_line(index: &Index) -> String {
    let kind = if index.fulltext {
        " fulltext"
    } else if index.unique {
        " unique"
    } else {
        ""
    };
    format!("    {} ({}){}", index.name, index.columns.join(", "), kind)
}

/// `field -> Related.inverse Kind`, plus how the relation is joined.
fn relation_line(relation: &Relation) -> String {
    let inverse = if relation.related_field.is_empty() {
        "?"
    } else {
        relation.related_field.as_str()
    };
    let mut line = format!(
        "    {} -> {}.{} {}",
        relation.field_name,
        relation.related_table,
        inverse,
        relation.kind.as_str()
    );
    if let Some(join) = relation.join_summary() {
        line.push_str(&format!(" via {}", join));
    }
    line
}
