use serde::Serialize;

use super::domain::Profile;

const NOT_SET: &str = "Not set";
const SKILL_PREVIEW: usize = 3;

/// Display strings for the read-only profile view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOverview {
    pub preferred_location: String,
    pub job_types: String,
    pub salary_range: String,
    pub skill_preview: Vec<String>,
    pub hidden_skills: usize,
}

impl ProfileOverview {
    pub fn from_profile(profile: &Profile) -> Self {
        let preferences = &profile.preferences;

        let preferred_location = if preferences.location.is_empty() {
            NOT_SET.to_string()
        } else {
            preferences.location.clone()
        };

        let job_types = if preferences.job_types.is_empty() {
            NOT_SET.to_string()
        } else {
            preferences.job_types.as_slice().join(", ")
        };

        let salary = &preferences.salary_range;
        let salary_range = if salary.min.is_empty() || salary.max.is_empty() {
            NOT_SET.to_string()
        } else {
            format!("{} - {}", salary.min, salary.max)
        };

        let skill_preview: Vec<String> = profile
            .skills
            .iter()
            .take(SKILL_PREVIEW)
            .map(str::to_string)
            .collect();

        Self {
            preferred_location,
            job_types,
            salary_range,
            hidden_skills: profile.skills.len() - skill_preview.len(),
            skill_preview,
        }
    }
}
