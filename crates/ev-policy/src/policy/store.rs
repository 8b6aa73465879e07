use super::assessment::AssessmentResult;
use super::recommendations::RecommendationSet;
use super::scenario::ScenarioParameters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Saved bundle as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScenario {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub data: ScenarioParameters,
    pub assessment: AssessmentResult,
    pub recommendations: RecommendationSet,
}

/// Persistence backend for the saved-scenario list.
pub trait ScenarioSink: Send + Sync {
    /// Receives the complete list every time; implementations overwrite.
    fn persist(&self, entries: &[SavedScenario]) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode saved scenarios: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scenario storage unavailable: {0}")]
    Unavailable(String),
}

/// Result of a best-effort save. The entry is kept in memory either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved,
    SaveFailed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Writes the whole list as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScenarioSink for JsonFileSink {
    fn persist(&self, entries: &[SavedScenario]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, body).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Append-only in-memory list of saved scenarios backed by a sink.
#[derive(Debug)]
pub struct ScenarioStore<S> {
    sink: S,
    entries: Vec<SavedScenario>,
}

impl<S: ScenarioSink> ScenarioStore<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            entries: Vec::new(),
        }
    }

    pub fn save(
        &mut self,
        name: impl Into<String>,
        scenario: ScenarioParameters,
        assessment: AssessmentResult,
        recommendations: RecommendationSet,
    ) -> SaveOutcome {
        self.save_at(name, scenario, assessment, recommendations, Utc::now())
    }

    pub fn save_at(
        &mut self,
        name: impl Into<String>,
        scenario: ScenarioParameters,
        assessment: AssessmentResult,
        recommendations: RecommendationSet,
        timestamp: DateTime<Utc>,
    ) -> SaveOutcome {
        let entry = SavedScenario {
            name: name.into(),
            timestamp,
            data: scenario,
            assessment,
            recommendations,
        };
        let name = entry.name.clone();
        self.entries.push(entry);

        match self.sink.persist(&self.entries) {
            Ok(()) => {
                info!(scenario = %name, saved = self.entries.len(), "scenario saved");
                SaveOutcome::Saved
            }
            Err(err) => {
                warn!(scenario = %name, error = %err, "scenario kept in memory only");
                SaveOutcome::SaveFailed(err.to_string())
            }
        }
    }

    pub fn entries(&self) -> &[SavedScenario] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
