use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::draft::{DerivedPreferences, DraftSession, SessionId};
use super::domain::Profile;
use super::evaluation::{
    evaluate_completeness, evaluate_strength, CompletenessReport, StrengthReport,
};

/// Audit entry written for every commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    pub revision: u64,
    pub session_id: SessionId,
    pub committed_at: DateTime<Utc>,
    pub changed_paths: Vec<String>,
}

/// Result of promoting a draft to the canonical profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOutcome {
    pub profile: Arc<Profile>,
    pub derived_preferences: DerivedPreferences,
    pub record: CommitRecord,
}

/// Commit records kept in memory; older entries are dropped first.
pub const HISTORY_LIMIT: usize = 64;

/// Owner of the canonical profile. Commit is its only write path.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    canonical: Arc<Profile>,
    revision: u64,
    history: Vec<CommitRecord>,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            canonical: Arc::new(profile),
            revision: 0,
            history: Vec::new(),
        }
    }

    pub fn profile(&self) -> &Arc<Profile> {
        &self.canonical
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The most recent commits, oldest first, at most [`HISTORY_LIMIT`].
    pub fn history(&self) -> &[CommitRecord] {
        &self.history
    }

    /// Opens a draft cloned from the current canonical profile.
    pub fn begin_edit(&self) -> DraftSession {
        DraftSession::from_revision(Arc::clone(&self.canonical), self.revision)
    }

    /// Replaces the canonical profile with the draft in one step.
    pub fn commit(&mut self, session: DraftSession) -> CommitOutcome {
        let snapshot = session.into_snapshot();
        if snapshot.base_revision != self.revision {
            warn!(
                session = %snapshot.id,
                base_revision = snapshot.base_revision,
                current_revision = self.revision,
                "committing a draft opened against an older revision"
            );
        }

        let derived_preferences = DerivedPreferences::from_profile(&snapshot.profile);
        self.canonical = Arc::new(snapshot.profile);
        self.revision += 1;

        let record = CommitRecord {
            revision: self.revision,
            session_id: snapshot.id,
            committed_at: Utc::now(),
            changed_paths: snapshot.changed_paths,
        };
        self.history.push(record.clone());
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }

        info!(
            session = %record.session_id,
            revision = record.revision,
            changed = record.changed_paths.len(),
            "profile committed"
        );

        CommitOutcome {
            profile: Arc::clone(&self.canonical),
            derived_preferences,
            record,
        }
    }

    pub fn completeness(&self) -> CompletenessReport {
        evaluate_completeness(&self.canonical)
    }

    pub fn strength(&self) -> StrengthReport {
        evaluate_strength(&self.canonical)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
