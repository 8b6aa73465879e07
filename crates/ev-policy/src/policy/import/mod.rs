mod parser;

use super::scenario::ScenarioParameters;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum ScenarioImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ScenarioImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioImportError::Io(err) => write!(f, "failed to read scenario file: {}", err),
            ScenarioImportError::Csv(err) => write!(f, "invalid scenario CSV data: {}", err),
        }
    }
}

impl std::error::Error for ScenarioImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioImportError::Io(err) => Some(err),
            ScenarioImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScenarioImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ScenarioImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// A named, already-clamped scenario read from a CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedScenario {
    pub name: String,
    pub scenario: ScenarioParameters,
}

/// Batch loader for scenario sheets. Rows without a name are numbered from 1.
pub struct ScenarioImporter;

impl ScenarioImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedScenario>, ScenarioImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedScenario>, ScenarioImportError> {
        let scenarios: Vec<ImportedScenario> = parser::parse_records(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, record)| ImportedScenario {
                name: record
                    .name
                    .unwrap_or_else(|| format!("Scenario {}", index + 1)),
                scenario: record.scenario,
            })
            .collect();

        debug!(rows = scenarios.len(), "scenario sheet imported");
        Ok(scenarios)
    }
}
