//! In-memory round repository.
//!
//! [`RoundStore`] is the exclusive owner of the canonical records. Every
//! operation takes the lock exactly once, so existence-check-then-mutate
//! sequences never interleave with other writers. Callers only ever see
//! clones of stored rounds.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::rounds::{validate, Round, RoundId, RoundPayload};
use crate::errors::DomainError;

#[derive(Debug, Clone, Default)]
pub struct RoundStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    // Insertion order doubles as list order.
    rounds: Vec<Round>,
    last_id: RoundId,
}

impl StoreInner {
    fn position(&self, id: RoundId) -> Result<usize, DomainError> {
        self.rounds
            .iter()
            .position(|r| r.id == id)
            .ok_or(DomainError::NotFound(id))
    }

    // Ids only move forward; deleting a round never frees its id for reuse.
    fn next_id(&mut self) -> RoundId {
        self.last_id += 1;
        self.last_id
    }
}

impl RoundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the full payload and store it under a fresh id.
    /// Nothing is stored on validation failure.
    pub fn create(&self, payload: &RoundPayload) -> Result<Round, DomainError> {
        let draft = validate(payload)?;
        let mut inner = self.inner.lock();
        let id = inner.next_id();
        let round = draft.into_round(id);
        inner.rounds.push(round.clone());
        Ok(round)
    }

    /// All stored rounds in insertion order.
    pub fn list(&self) -> Vec<Round> {
        self.inner.lock().rounds.clone()
    }

    pub fn get(&self, id: RoundId) -> Result<Round, DomainError> {
        let inner = self.inner.lock();
        let idx = inner.position(id)?;
        Ok(inner.rounds[idx].clone())
    }

    /// Overwrite every field except `id` with a freshly validated payload.
    /// A missing id wins over an invalid payload; on validation failure
    /// the stored record is untouched.
    pub fn replace(&self, id: RoundId, payload: &RoundPayload) -> Result<Round, DomainError> {
        let mut inner = self.inner.lock();
        let idx = inner.position(id)?;
        let draft = validate(payload)?;
        inner.rounds[idx] = draft.into_round(id);
        Ok(inner.rounds[idx].clone())
    }

    /// Merge the payload's present keys onto the stored record, validate
    /// the candidate as a complete record, and commit it. Validation is
    /// whole-record: patching only `scores` to a bad length still fails,
    /// and the stored record is untouched unless the candidate passes.
    pub fn patch(&self, id: RoundId, payload: &RoundPayload) -> Result<Round, DomainError> {
        let mut inner = self.inner.lock();
        let idx = inner.position(id)?;
        let candidate = payload.merged_onto(&inner.rounds[idx]);
        let draft = validate(&candidate)?;
        inner.rounds[idx] = draft.into_round(id);
        Ok(inner.rounds[idx].clone())
    }

    /// Remove the round and hand back the record as it was immediately
    /// before removal.
    pub fn delete(&self, id: RoundId) -> Result<Round, DomainError> {
        let mut inner = self.inner.lock();
        let idx = inner.position(id)?;
        Ok(inner.rounds.remove(idx))
    }
}
