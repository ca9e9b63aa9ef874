//! Job-seeker profile model, draft editing, and profile scoring.
//!
//! Edits flow through a [`DraftSession`] opened from a [`ProfileStore`];
//! committing swaps the canonical profile in one step and hands back the
//! derived job preferences. The evaluators only ever read a profile.

pub mod domain;
mod draft;
pub mod evaluation;
mod overview;
pub mod path;
mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Badge, CareerFitScore, CareerHighlight, DocumentRecord, Endorsement, ExperienceEntry,
    ExperienceField, Preferences, Profile, ProfileInsights, Recommendation, RecommendationKind,
    RoleMatch, SalaryRange, TagSet,
};
pub use draft::{DerivedPreferences, DraftSession, SessionId};
pub use evaluation::{
    badge_progress, evaluate_completeness, evaluate_strength, BadgeProgress, CompletenessField,
    CompletenessReport, MissingCategory, StrengthCategory, StrengthLabel, StrengthReport,
};
pub use overview::ProfileOverview;
pub use path::{FieldError, FieldKind, FieldPath, FieldValue};
pub use store::{CommitOutcome, CommitRecord, ProfileStore, HISTORY_LIMIT};
