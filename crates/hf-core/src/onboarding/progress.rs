//! Resumable wizard progress.

use chrono::{DateTime, TimeZone, Utc};

use super::step::StepKey;
use super::store::StepDataStore;

/// Snapshot of an unfinished wizard, as persisted between sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardProgress {
    pub step_index: usize,
    pub step_data: StepDataStore,
    pub last_updated: DateTime<Utc>,
}

impl WizardProgress {
    pub fn new(step_index: usize, step_data: StepDataStore, last_updated: DateTime<Utc>) -> Self {
        Self {
            step_index,
            step_data,
            last_updated,
        }
    }

    /// Builds progress stamped with a millisecond clock reading.
    pub fn at_millis(step_index: usize, step_data: StepDataStore, now_ms: i64) -> Self {
        let last_updated = Utc
            .timestamp_millis_opt(now_ms)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH);
        Self::new(step_index, step_data, last_updated)
    }

    /// Same progress with the step index pulled into the wizard's range.
    pub fn clamped(mut self) -> Self {
        self.step_index = self.step_index.min(StepKey::COUNT - 1);
        self
    }

    pub fn current_step(&self) -> StepKey {
        StepKey::at(self.step_index)
    }
}
