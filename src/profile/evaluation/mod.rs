mod completeness;
mod strength;

pub use completeness::{CompletenessField, CompletenessReport};
pub use strength::{
    CategoryRequirement, MissingCategory, MissingPreview, ScoredField, StrengthCategory,
    StrengthLabel, StrengthReport,
};

use super::domain::Profile;
use serde::{Deserialize, Serialize};

/// Scores the six completeness checks.
pub fn evaluate_completeness(profile: &Profile) -> CompletenessReport {
    let (completed, pending): (Vec<_>, Vec<_>) = CompletenessField::ordered()
        .into_iter()
        .partition(|field| field.is_satisfied(profile));

    CompletenessReport {
        percentage: rounded_percentage(completed.len(), CompletenessField::COUNT),
        completed,
        pending,
    }
}

/// Scores the eight weighted strength categories.
pub fn evaluate_strength(profile: &Profile) -> StrengthReport {
    let categories = StrengthCategory::ordered();
    let missing_categories: Vec<MissingCategory> = categories
        .iter()
        .filter(|category| !category.is_complete(profile))
        .map(|category| MissingCategory::from(*category))
        .collect();

    let complete = categories.len() - missing_categories.len();
    let percentage = rounded_percentage(complete, categories.len());

    StrengthReport {
        percentage,
        missing_categories,
        label: StrengthLabel::from_percentage(percentage),
    }
}

/// Earned badges over all badges attached to the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeProgress {
    pub earned: usize,
    pub total: usize,
}

pub fn badge_progress(profile: &Profile) -> BadgeProgress {
    BadgeProgress {
        earned: profile.badges.iter().filter(|badge| badge.earned).count(),
        total: profile.badges.len(),
    }
}

/// `round(100 * part / whole)` with halves rounded up, in integer math.
pub(crate) fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((200 * part + whole) / (2 * whole)) as u8
}
