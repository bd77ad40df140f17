//! In-memory step data store.

use std::collections::BTreeMap;

use super::payload::StepPayload;
use super::step::StepKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepDataError {
    #[error("payload for `{actual}` cannot be stored under `{expected}`")]
    Mismatch { expected: StepKey, actual: StepKey },
}

/// Answers collected so far, keyed by step.
///
/// Payloads are normalized on write, so what is stored is exactly what a
/// completed profile will carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepDataStore {
    entries: BTreeMap<StepKey, StepPayload>,
}

impl StepDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StepKey) -> Option<&StepPayload> {
        self.entries.get(&key)
    }

    /// Replaces the payload of `key`.
    pub fn set(&mut self, key: StepKey, payload: StepPayload) -> Result<(), StepDataError> {
        if payload.key() != key {
            return Err(StepDataError::Mismatch {
                expected: key,
                actual: payload.key(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(step = %key, "step data updated");
        self.entries.insert(key, payload.normalized());
        Ok(())
    }

    pub fn contains(&self, key: StepKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Entries in wizard order.
    pub fn iter(&self) -> impl Iterator<Item = (StepKey, &StepPayload)> {
        self.entries.iter().map(|(key, payload)| (*key, payload))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<StepPayload> for StepDataStore {
    fn from_iter<I: IntoIterator<Item = StepPayload>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|payload| (payload.key(), payload.normalized()))
            .collect();
        Self { entries }
    }
}
