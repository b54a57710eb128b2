use std::error::Error;

use serde::Serialize;
use tracing::info;

use super::TranslateCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::model::{Entity, TranslateOptions};
use crate::translate::Diagnostics;

/// Result of the translate command execution
#[derive(Debug, Clone, Serialize)]
pub struct TranslateResult {
    pub file: String,
    pub database: String,
    pub schema: String,
    pub entities: Vec<Entity>,
    pub diagnostics: Diagnostics,
}

impl TranslateCmd {
    /// CLI flags first, then the config file, then the defaults.
    pub fn options(&self, config: &ConfigFile) -> TranslateOptions {
        let database = self
            .database
            .clone()
            .or_else(|| config.database.clone())
            .unwrap_or_else(|| self.source.file_label());
        let schema = self
            .schema
            .clone()
            .unwrap_or_else(|| config.schema_or_default().to_string());
        TranslateOptions { database, schema }
    }
}

impl Execute for TranslateCmd {
    type Output = TranslateResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let options = self.options(config);
        let translation = self.source.load(&options)?;

        let entities: Vec<Entity> = translation
            .entities
            .into_iter()
            .filter(|e| self.source.selects(&e.name))
            .collect();
        info!(entities = entities.len(), "translate finished");

        Ok(TranslateResult {
            file: self.source.file_label(),
            database: options.database,
            schema: options.schema,
            entities,
            diagnostics: translation.diagnostics,
        })
    }
}
