use serde::{Deserialize, Serialize};

use super::super::domain::Profile;

/// Profile attribute inspected by a strength category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoredField {
    Name,
    Position,
    Location,
    About,
    Skills,
    Experience,
    Education,
    Documents,
    ProfileImage,
    CareerHighlights,
}

enum Measure {
    Text(bool),
    Count(usize),
}

impl ScoredField {
    fn measure(self, profile: &Profile) -> Measure {
        match self {
            ScoredField::Name => Measure::Text(!profile.name.is_empty()),
            ScoredField::Position => Measure::Text(!profile.position.is_empty()),
            ScoredField::Location => Measure::Text(!profile.location.is_empty()),
            ScoredField::About => Measure::Text(!profile.about.is_empty()),
            ScoredField::ProfileImage => Measure::Text(
                profile
                    .profile_image
                    .as_deref()
                    .is_some_and(|reference| !reference.is_empty()),
            ),
            ScoredField::Skills => Measure::Count(profile.skills.len()),
            ScoredField::Experience => Measure::Count(profile.experience.len()),
            ScoredField::Education => Measure::Count(profile.education.len()),
            ScoredField::Documents => Measure::Count(profile.documents.len()),
            ScoredField::CareerHighlights => Measure::Count(profile.career_highlights.len()),
        }
    }
}

/// One field a category needs, with an optional minimum for list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRequirement {
    pub field: ScoredField,
    pub min_count: Option<usize>,
}

impl CategoryRequirement {
    const fn present(field: ScoredField) -> Self {
        Self {
            field,
            min_count: None,
        }
    }

    const fn at_least(field: ScoredField, min_count: usize) -> Self {
        Self {
            field,
            min_count: Some(min_count),
        }
    }

    pub fn is_met(&self, profile: &Profile) -> bool {
        match (self.field.measure(profile), self.min_count) {
            (Measure::Text(present), _) => present,
            (Measure::Count(count), Some(min)) => count >= min,
            (Measure::Count(count), None) => count > 0,
        }
    }
}

const BASIC_INFORMATION: &[CategoryRequirement] = &[
    CategoryRequirement::present(ScoredField::Name),
    CategoryRequirement::present(ScoredField::Position),
    CategoryRequirement::present(ScoredField::Location),
];
const PROFESSIONAL_SUMMARY: &[CategoryRequirement] =
    &[CategoryRequirement::present(ScoredField::About)];
const SKILLS: &[CategoryRequirement] = &[CategoryRequirement::at_least(ScoredField::Skills, 3)];
const EXPERIENCE: &[CategoryRequirement] =
    &[CategoryRequirement::at_least(ScoredField::Experience, 1)];
const EDUCATION: &[CategoryRequirement] = &[CategoryRequirement::present(ScoredField::Education)];
const DOCUMENTS: &[CategoryRequirement] =
    &[CategoryRequirement::at_least(ScoredField::Documents, 1)];
const PROFILE_IMAGE: &[CategoryRequirement] =
    &[CategoryRequirement::present(ScoredField::ProfileImage)];
const CAREER_HIGHLIGHTS: &[CategoryRequirement] =
    &[CategoryRequirement::at_least(ScoredField::CareerHighlights, 1)];

/// Weighted sections of the profile strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthCategory {
    BasicInformation,
    ProfessionalSummary,
    Skills,
    Experience,
    Education,
    Documents,
    ProfileImage,
    CareerHighlights,
}

impl StrengthCategory {
    pub const fn ordered() -> [StrengthCategory; 8] {
        [
            StrengthCategory::BasicInformation,
            StrengthCategory::ProfessionalSummary,
            StrengthCategory::Skills,
            StrengthCategory::Experience,
            StrengthCategory::Education,
            StrengthCategory::Documents,
            StrengthCategory::ProfileImage,
            StrengthCategory::CareerHighlights,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            StrengthCategory::BasicInformation => "Basic Information",
            StrengthCategory::ProfessionalSummary => "Professional Summary",
            StrengthCategory::Skills => "Skills",
            StrengthCategory::Experience => "Experience",
            StrengthCategory::Education => "Education",
            StrengthCategory::Documents => "Documents",
            StrengthCategory::ProfileImage => "Profile Image",
            StrengthCategory::CareerHighlights => "Career Highlights",
        }
    }

    /// Icon token passed through to the collaborator.
    pub const fn icon(self) -> &'static str {
        match self {
            StrengthCategory::BasicInformation => "ri-user-line",
            StrengthCategory::ProfessionalSummary => "ri-file-text-line",
            StrengthCategory::Skills => "ri-tools-line",
            StrengthCategory::Experience => "ri-briefcase-line",
            StrengthCategory::Education => "ri-book-open-line",
            StrengthCategory::Documents => "ri-folder-line",
            StrengthCategory::ProfileImage => "ri-image-line",
            StrengthCategory::CareerHighlights => "ri-medal-line",
        }
    }

    pub const fn requirements(self) -> &'static [CategoryRequirement] {
        match self {
            StrengthCategory::BasicInformation => BASIC_INFORMATION,
            StrengthCategory::ProfessionalSummary => PROFESSIONAL_SUMMARY,
            StrengthCategory::Skills => SKILLS,
            StrengthCategory::Experience => EXPERIENCE,
            StrengthCategory::Education => EDUCATION,
            StrengthCategory::Documents => DOCUMENTS,
            StrengthCategory::ProfileImage => PROFILE_IMAGE,
            StrengthCategory::CareerHighlights => CAREER_HIGHLIGHTS,
        }
    }

    /// Complete only when every requirement holds.
    pub fn is_complete(self, profile: &Profile) -> bool {
        self.requirements()
            .iter()
            .all(|requirement| requirement.is_met(profile))
    }
}

/// Qualitative band for the strength percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Just starting")]
    JustStarting,
    #[serde(rename = "Getting there")]
    GettingThere,
    #[serde(rename = "Almost complete")]
    AlmostComplete,
    #[serde(rename = "Very strong")]
    VeryStrong,
    #[serde(rename = "All star profile!")]
    AllStar,
}

impl StrengthLabel {
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=24 => StrengthLabel::JustStarting,
            25..=49 => StrengthLabel::GettingThere,
            50..=74 => StrengthLabel::AlmostComplete,
            75..=99 => StrengthLabel::VeryStrong,
            _ => StrengthLabel::AllStar,
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            StrengthLabel::JustStarting => "Just starting",
            StrengthLabel::GettingThere => "Getting there",
            StrengthLabel::AlmostComplete => "Almost complete",
            StrengthLabel::VeryStrong => "Very strong",
            StrengthLabel::AllStar => "All star profile!",
        }
    }
}

/// Incomplete category as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCategory {
    pub category: StrengthCategory,
    pub name: String,
    pub icon: String,
}

impl From<StrengthCategory> for MissingCategory {
    fn from(category: StrengthCategory) -> Self {
        Self {
            category,
            name: category.label().to_string(),
            icon: category.icon().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub percentage: u8,
    pub missing_categories: Vec<MissingCategory>,
    pub label: StrengthLabel,
}

/// Leading slice of the missing categories plus how many were left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPreview<'a> {
    pub shown: &'a [MissingCategory],
    pub remaining: usize,
}

impl StrengthReport {
    pub fn preview(&self, limit: usize) -> MissingPreview<'_> {
        let shown = &self.missing_categories[..limit.min(self.missing_categories.len())];
        MissingPreview {
            shown,
            remaining: self.missing_categories.len() - shown.len(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_categories.is_empty()
    }
}
