//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::models::ChallengeSet;
use crate::scoring::{CompetitionClock, SubmissionLedger};
use crate::store::MemoryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Users, teams, and score histories
    store: MemoryStore,

    /// Accepted-submission records for duplicate prevention
    ledger: SubmissionLedger,

    /// Competition lifecycle clock
    clock: CompetitionClock,

    /// Read-only challenge set loaded at startup
    challenges: ChallengeSet,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state with empty runtime stores
    pub fn new(challenges: ChallengeSet, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: MemoryStore::new(),
                ledger: SubmissionLedger::new(),
                clock: CompetitionClock::new(),
                challenges,
                config,
            }),
        }
    }

    /// Get a reference to the store
    pub fn store(&self) -> &MemoryStore {
        &self.inner.store
    }

    /// Get a reference to the submission ledger
    pub fn ledger(&self) -> &SubmissionLedger {
        &self.inner.ledger
    }

    /// Get a reference to the competition clock
    pub fn clock(&self) -> &CompetitionClock {
        &self.inner.clock
    }

    /// Get a reference to the challenge set
    pub fn challenges(&self) -> &ChallengeSet {
        &self.inner.challenges
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
