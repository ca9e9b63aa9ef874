use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{ExperienceEntry, ExperienceField, Profile};
use super::path::{self, FieldError, FieldKind, FieldPath, FieldValue};

/// Identifier for one edit session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("draft-{id:06}"))
}

/// Working copy of a profile plus the edit operations a form can issue.
///
/// A session is consumed by [`ProfileStore::commit`](super::store::ProfileStore::commit)
/// or [`DraftSession::discard`]; further editing needs a fresh session.
#[derive(Debug, Clone)]
pub struct DraftSession {
    id: SessionId,
    base: Arc<Profile>,
    base_revision: u64,
    draft: Profile,
    started_at: DateTime<Utc>,
}

impl DraftSession {
    /// Starts a session over `base` without a backing store.
    pub fn new(base: Arc<Profile>) -> Self {
        Self::from_revision(base, 0)
    }

    pub(crate) fn from_revision(base: Arc<Profile>, base_revision: u64) -> Self {
        let session = Self {
            id: next_session_id(),
            draft: (*base).clone(),
            base,
            base_revision,
            started_at: Utc::now(),
        };
        info!(session = %session.id, base_revision, "draft session started");
        session
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn base_revision(&self) -> u64 {
        self.base_revision
    }

    /// Profile the session was cloned from.
    pub fn base(&self) -> &Profile {
        &self.base
    }

    /// Current state of the working copy.
    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    pub fn get(&self, path: &FieldPath) -> FieldValue {
        path::get(&self.draft, path)
    }

    /// Replaces a leaf. Fails only when `value` does not fit the leaf, in
    /// which case the draft is left as it was.
    pub fn set_field(&mut self, path: &FieldPath, value: FieldValue) -> Result<(), FieldError> {
        self.draft = path::set(&self.draft, path, value)?;
        debug!(session = %self.id, field = %path, "draft field updated");
        Ok(())
    }

    /// Flips a boolean leaf such as `preferences.notifications.jobs`.
    pub fn set_toggle(&mut self, path: &FieldPath, enabled: bool) -> Result<(), FieldError> {
        if path.kind() != FieldKind::Toggle {
            return Err(FieldError::InvalidFieldType {
                path: path.clone(),
                expected: path.kind(),
                found: "boolean",
            });
        }
        self.set_field(path, FieldValue::Toggle(enabled))
    }

    /// Appends a trimmed skill; blank or already listed skills are ignored.
    pub fn add_skill(&mut self, text: &str) -> bool {
        let skill = text.trim();
        if skill.is_empty() || self.draft.skills.contains(skill) {
            debug!(session = %self.id, skill, "skill ignored");
            return false;
        }
        Arc::make_mut(&mut self.draft.skills).insert(skill);
        debug!(session = %self.id, skill, "skill added");
        true
    }

    pub fn remove_skill(&mut self, text: &str) -> bool {
        if !self.draft.skills.contains(text) {
            return false;
        }
        Arc::make_mut(&mut self.draft.skills).remove(text);
        debug!(session = %self.id, skill = text, "skill removed");
        true
    }

    /// Includes or excludes a job type without reordering the others.
    pub fn set_job_type(&mut self, job_type: &str, included: bool) -> bool {
        let present = self.draft.preferences.job_types.contains(job_type);
        let changed = match (included, present) {
            (true, false) => Arc::make_mut(&mut self.draft.preferences)
                .job_types
                .insert(job_type),
            (false, true) => Arc::make_mut(&mut self.draft.preferences)
                .job_types
                .remove(job_type),
            _ => false,
        };
        if changed {
            debug!(session = %self.id, job_type, included, "job type updated");
        }
        changed
    }

    /// Appends a blank experience entry and returns its index.
    pub fn add_experience_entry(&mut self) -> usize {
        let entries = Arc::make_mut(&mut self.draft.experience);
        entries.push(ExperienceEntry::default());
        let index = entries.len() - 1;
        debug!(session = %self.id, index, "experience entry added");
        index
    }

    /// Replaces one column of the entry at `index`. Out-of-range indices are
    /// ignored.
    pub fn update_experience_field(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        if index >= self.draft.experience.len() {
            debug!(session = %self.id, index, "experience index out of range");
            return false;
        }
        let entries = Arc::make_mut(&mut self.draft.experience);
        *entries[index].field_mut(field) = value.into();
        debug!(session = %self.id, index, field = field.label(), "experience entry updated");
        true
    }

    /// Removes the entry at `index`, shifting later entries down.
    pub fn remove_experience_entry(&mut self, index: usize) -> Option<ExperienceEntry> {
        if index >= self.draft.experience.len() {
            debug!(session = %self.id, index, "experience index out of range");
            return None;
        }
        let removed = Arc::make_mut(&mut self.draft.experience).remove(index);
        debug!(session = %self.id, index, "experience entry removed");
        Some(removed)
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != *self.base
    }

    /// Paths (and list sections) whose value differs from the base snapshot.
    pub fn changes(&self) -> Vec<String> {
        let mut changed: Vec<String> = FieldPath::text_leaves()
            .iter()
            .chain([FieldPath::ProfileImage, FieldPath::Skills, FieldPath::JobTypes].iter())
            .filter(|leaf| path::get(&self.base, leaf) != path::get(&self.draft, leaf))
            .map(ToString::to_string)
            .collect();

        if self.draft.experience != self.base.experience {
            changed.push("experience".to_string());
        }

        let base_toggles = &self.base.preferences.notifications;
        let draft_toggles = &self.draft.preferences.notifications;
        let mut toggles: Vec<&String> = base_toggles.keys().chain(draft_toggles.keys()).collect();
        toggles.sort();
        toggles.dedup();
        changed.extend(
            toggles
                .into_iter()
                .filter(|name| base_toggles.get(*name) != draft_toggles.get(*name))
                .map(|name| FieldPath::notification(name.as_str()).to_string()),
        );

        changed
    }

    /// Drops the working copy; the canonical profile is untouched.
    pub fn discard(self) {
        info!(session = %self.id, dirty = self.is_dirty(), "draft session discarded");
    }

    pub(crate) fn into_snapshot(self) -> DraftSnapshot {
        let changed_paths = self.changes();
        DraftSnapshot {
            id: self.id,
            base_revision: self.base_revision,
            profile: self.draft,
            changed_paths,
        }
    }
}

/// Final state of a session handed to the store on commit.
pub(crate) struct DraftSnapshot {
    pub id: SessionId,
    pub base_revision: u64,
    pub profile: Profile,
    pub changed_paths: Vec<String>,
}

/// Summary the collaborator forwards to the job-preference store after a
/// commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPreferences {
    pub location: String,
    pub role: String,
    pub top_skill: String,
}

impl DerivedPreferences {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            location: profile.preferences.location.clone(),
            role: profile.position.clone(),
            top_skill: profile.top_skill().unwrap_or_default().to_string(),
        }
    }
}
