use std::sync::Arc;

use crate::profile::domain::{
    Badge, CareerHighlight, DocumentRecord, ExperienceEntry, Preferences, Profile, SalaryRange,
    TagSet,
};
use crate::profile::DraftSession;

pub(super) fn skills(values: &[&str]) -> Arc<TagSet> {
    Arc::new(values.iter().copied().collect())
}

/// Profile from the "Ana" walkthrough: basic info only.
pub(super) fn starter_profile() -> Profile {
    Profile {
        name: "Ana".to_string(),
        position: "Dev".to_string(),
        location: "NYC".to_string(),
        about: "Short.".to_string(),
        skills: skills(&["a", "b"]),
        ..Profile::default()
    }
}

pub(super) fn experience(company: &str) -> ExperienceEntry {
    ExperienceEntry {
        company: company.to_string(),
        position: "Engineer".to_string(),
        period: "2020 - 2023".to_string(),
        description: "Built things".to_string(),
    }
}

/// Profile that satisfies every completeness and strength rule.
pub(super) fn complete_profile() -> Profile {
    Profile {
        name: "Jordan Lee".to_string(),
        position: "Backend Engineer".to_string(),
        location: "Austin, TX".to_string(),
        about: "Backend engineer focused on data pipelines and APIs.".to_string(),
        profile_image: Some("asset://avatars/jordan.png".to_string()),
        skills: skills(&["Rust", "Go", "PostgreSQL"]),
        experience: Arc::new(vec![experience("Acme"), experience("Globex")]),
        education: Arc::new(vec![serde_json::json!({ "school": "UT Austin" })]),
        documents: Arc::new(vec![DocumentRecord {
            name: "Resume.pdf".to_string(),
            icon: "ri-file-pdf-line".to_string(),
            last_updated: "2 days ago".to_string(),
        }]),
        badges: Arc::new(vec![
            Badge {
                id: "b1".to_string(),
                name: "Early Bird".to_string(),
                icon: "ri-sun-line".to_string(),
                earned: true,
            },
            Badge {
                id: "b2".to_string(),
                name: "Networker".to_string(),
                icon: "ri-team-line".to_string(),
                earned: false,
            },
        ]),
        career_highlights: Arc::new(vec![CareerHighlight {
            id: "h1".to_string(),
            title: "Shipped billing v2".to_string(),
            year: "2023".to_string(),
            description: "Cut invoice latency by 40%".to_string(),
        }]),
        profile_insights: None,
        preferences: Arc::new(Preferences {
            location: "Remote".to_string(),
            job_types: ["Full-time"].into_iter().collect(),
            salary_range: SalaryRange {
                min: "$120k".to_string(),
                max: "$150k".to_string(),
            },
            notifications: [("jobs".to_string(), true), ("messages".to_string(), false)]
                .into_iter()
                .collect(),
        }),
    }
}

pub(super) fn session(profile: Profile) -> DraftSession {
    DraftSession::new(Arc::new(profile))
}
