use serde::{Deserialize, Serialize};

use super::super::domain::Profile;

/// Minimum `about` length (exclusive) before the section counts as written.
const ABOUT_MIN_CHARS: usize = 20;
const MIN_SKILLS: usize = 3;

/// The named checks behind the completeness percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletenessField {
    #[serde(rename = "Basic Info")]
    BasicInfo,
    #[serde(rename = "About Me")]
    AboutMe,
    #[serde(rename = "Skills")]
    Skills,
    #[serde(rename = "Experience")]
    Experience,
    #[serde(rename = "Resume")]
    Resume,
    #[serde(rename = "Job Preferences")]
    JobPreferences,
}

impl CompletenessField {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [CompletenessField; 6] {
        [
            CompletenessField::BasicInfo,
            CompletenessField::AboutMe,
            CompletenessField::Skills,
            CompletenessField::Experience,
            CompletenessField::Resume,
            CompletenessField::JobPreferences,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            CompletenessField::BasicInfo => "Basic Info",
            CompletenessField::AboutMe => "About Me",
            CompletenessField::Skills => "Skills",
            CompletenessField::Experience => "Experience",
            CompletenessField::Resume => "Resume",
            CompletenessField::JobPreferences => "Job Preferences",
        }
    }

    pub fn is_satisfied(self, profile: &Profile) -> bool {
        match self {
            CompletenessField::BasicInfo => {
                !profile.name.is_empty()
                    && !profile.position.is_empty()
                    && !profile.location.is_empty()
            }
            CompletenessField::AboutMe => profile.about.chars().count() > ABOUT_MIN_CHARS,
            CompletenessField::Skills => profile.skills.len() >= MIN_SKILLS,
            CompletenessField::Experience => !profile.experience.is_empty(),
            CompletenessField::Resume => !profile.documents.is_empty(),
            CompletenessField::JobPreferences => !profile.preferences.location.is_empty(),
        }
    }
}

/// Completeness percentage with the satisfied and outstanding checks, both
/// in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub percentage: u8,
    pub completed: Vec<CompletenessField>,
    pub pending: Vec<CompletenessField>,
}

impl CompletenessReport {
    pub fn completed_labels(&self) -> Vec<&'static str> {
        self.completed.iter().map(|field| field.label()).collect()
    }

    pub fn pending_labels(&self) -> Vec<&'static str> {
        self.pending.iter().map(|field| field.label()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}
