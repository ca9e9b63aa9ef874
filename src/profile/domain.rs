use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Canonical job-seeker profile.
///
/// Nested branches sit behind `Arc` so a cloned profile shares every branch
/// with its source until one of them is written through `Arc::make_mut`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub position: String,
    pub location: String,
    pub about: String,
    /// Opaque reference supplied by the image upload collaborator.
    pub profile_image: Option<String>,
    pub skills: Arc<TagSet>,
    pub experience: Arc<Vec<ExperienceEntry>>,
    /// Education records are attached externally and only counted.
    pub education: Arc<Vec<serde_json::Value>>,
    pub documents: Arc<Vec<DocumentRecord>>,
    pub badges: Arc<Vec<Badge>>,
    pub career_highlights: Arc<Vec<CareerHighlight>>,
    pub profile_insights: Option<Arc<ProfileInsights>>,
    pub preferences: Arc<Preferences>,
}

impl Profile {
    pub fn top_skill(&self) -> Option<&str> {
        self.skills.first()
    }
}

/// Insertion-ordered set of non-blank strings with exact-match uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    entries: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed `value` unless it is blank or already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        let entry = if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_string()
        };
        self.entries.push(entry);
        true
    }

    /// Removes the exact match, keeping the relative order of the rest.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.entries.iter().position(|entry| entry == value) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.entries
    }
}

/// One position in the work history; the list order is user-significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn field(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Position => &self.position,
            ExperienceField::Period => &self.period,
            ExperienceField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::Period => &mut self.period,
            ExperienceField::Description => &mut self.description,
        }
    }
}

/// Editable columns of an [`ExperienceEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    Period,
    Description,
}

impl ExperienceField {
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Position => "position",
            ExperienceField::Period => "period",
            ExperienceField::Description => "description",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "company" => Some(Self::Company),
            "position" => Some(Self::Position),
            "period" => Some(Self::Period),
            "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// Uploaded document metadata (resume, cover letter, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentRecord {
    pub name: String,
    pub icon: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub earned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerHighlight {
    pub id: String,
    pub title: String,
    pub year: String,
    pub description: String,
}

/// Externally generated insights; carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInsights {
    pub career_fit_score: CareerFitScore,
    pub recommendations: Vec<Recommendation>,
    pub endorsements: Vec<Endorsement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerFitScore {
    pub score: u8,
    pub industry: String,
    pub top_matches: Vec<RoleMatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleMatch {
    pub role: String,
    pub score: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Skill,
    Certification,
    Connection,
    #[default]
    #[serde(other)]
    Other,
}

impl RecommendationKind {
    /// Call-to-action shown next to the recommendation.
    pub const fn action_label(self) -> &'static str {
        match self {
            RecommendationKind::Skill => "Add to skills",
            RecommendationKind::Certification => "Explore certification",
            RecommendationKind::Connection => "Find connections",
            RecommendationKind::Other => "Learn more",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endorsement {
    pub skill: String,
    pub count: u32,
}

/// Job search preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub location: String,
    pub job_types: TagSet,
    pub salary_range: SalaryRange,
    pub notifications: BTreeMap<String, bool>,
}

/// Salary bounds stay free-form so half-typed values survive editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    pub min: String,
    pub max: String,
}
