use super::model::Model;
use crate::util::epoch;
use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Root aggregate of one status document.
///
/// The document's own clock (if any) is a bare time-of-day, so the full
/// "as-of" instant is reconstructed from every `since` value seen while the
/// rest of the graph is built.
#[derive(Debug, Clone, Serialize)]
pub struct Controller {
    pub name: String,
    timestamp: DateTime<Utc>,
    timestamp_provided: bool,
    models: BTreeMap<String, Model>,
}

impl Controller {
    /// Create a controller. `time_of_day` is the document's top-level
    /// timestamp when it had one.
    pub fn new(name: impl Into<String>, time_of_day: Option<NaiveTime>) -> Self {
        let start = epoch();
        let (timestamp, timestamp_provided) = match time_of_day {
            Some(time) => (start.date_naive().and_time(time).and_utc(), true),
            None => (start, false),
        };

        Self {
            name: name.into(),
            timestamp,
            timestamp_provided,
            models: BTreeMap::new(),
        }
    }

    /// Best-guess wall-clock instant of the report
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether the document carried its own time-of-day
    pub fn timestamp_provided(&self) -> bool {
        self.timestamp_provided
    }

    /// Feed one parsed `since` instant into the reconstruction.
    ///
    /// Without a document time-of-day this is a running maximum. With one,
    /// only the candidate's date is used: the stored time-of-day is moved
    /// onto the latest date seen so far.
    pub fn update_timestamp(&mut self, candidate: DateTime<Utc>) {
        let trial = if self.timestamp_provided {
            candidate
                .date_naive()
                .and_time(self.timestamp.time())
                .and_utc()
        } else {
            candidate
        };

        if trial > self.timestamp {
            self.timestamp = trial;
        }
    }

    /// Register a model; a later model with the same name replaces the earlier one
    pub fn add_model(&mut self, model: Model) {
        self.models.insert(model.name.clone(), model);
    }

    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn models_mut(&mut self) -> &mut BTreeMap<String, Model> {
        &mut self.models
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
