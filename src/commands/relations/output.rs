//! Output formatting for relations command results.

use super::execute::RelationsResult;
use crate::output::Outputable;

impl Outputable for RelationsResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Relations: {}", self.file));
        lines.push(String::new());

        if self.edges.is_empty() {
            lines.push("No relations found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Edges ({}):", self.edges.len()));
        for edge in &self.edges {
            let inverse = if edge.related_field.is_empty() {
                "?"
            } else {
                edge.related_field.as_str()
            };
            let mut line = format!(
                "  {}.{} -> {}.{} {}",
                edge.entity,
                edge.field,
                edge.related_table,
                inverse,
                edge.kind.as_str()
            );
            if let Some(name) = &edge.relation_name {
                line.push_str(&format!(" \"{}\"", name));
            }
            if let Some(join) = &edge.join {
                line.push_str(&format!(" via {}", join));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}
