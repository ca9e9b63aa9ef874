//! Seed profile used by the CLI when no profile document is supplied.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::profile::{
    Badge, CareerFitScore, CareerHighlight, DocumentRecord, Endorsement, ExperienceEntry,
    Preferences, Profile, ProfileInsights, Recommendation, RecommendationKind, RoleMatch,
    SalaryRange,
};

/// A mid-career profile with most sections filled in. Education and the
/// profile image are left empty so the strength meter has something to ask
/// for.
pub fn sample_profile() -> Profile {
    Profile {
        name: "Alex Morgan".to_string(),
        position: "Product Designer".to_string(),
        location: "Seattle, WA".to_string(),
        about: "Product designer with six years of experience shaping onboarding and \
                checkout flows for consumer fintech apps."
            .to_string(),
        profile_image: None,
        skills: Arc::new(
            [
                "Figma",
                "User Research",
                "Prototyping",
                "Design Systems",
                "Accessibility",
            ]
            .into_iter()
            .collect(),
        ),
        experience: Arc::new(vec![
            ExperienceEntry {
                company: "Northwind Pay".to_string(),
                position: "Senior Product Designer".to_string(),
                period: "2021 - Present".to_string(),
                description: "Lead designer for the mobile onboarding squad.".to_string(),
            },
            ExperienceEntry {
                company: "Brightline Studio".to_string(),
                position: "UX Designer".to_string(),
                period: "2018 - 2021".to_string(),
                description: "Delivered research-driven redesigns for retail clients."
                    .to_string(),
            },
        ]),
        education: Arc::new(Vec::new()),
        documents: Arc::new(vec![DocumentRecord {
            name: "Alex_Morgan_Resume.pdf".to_string(),
            icon: "ri-file-pdf-line".to_string(),
            last_updated: "2 weeks ago".to_string(),
        }]),
        badges: Arc::new(vec![
            badge("profile-pro", "Profile Pro", "ri-user-star-line", true),
            badge("quick-applier", "Quick Applier", "ri-flashlight-line", true),
            badge("networker", "Networker", "ri-team-line", false),
            badge("interview-ace", "Interview Ace", "ri-mic-line", false),
        ]),
        career_highlights: Arc::new(vec![CareerHighlight {
            id: "redesign-2023".to_string(),
            title: "Onboarding redesign".to_string(),
            year: "2023".to_string(),
            description: "Raised activation by 18% across iOS and Android.".to_string(),
        }]),
        profile_insights: Some(Arc::new(ProfileInsights {
            career_fit_score: CareerFitScore {
                score: 86,
                industry: "Financial Technology".to_string(),
                top_matches: vec![
                    RoleMatch {
                        role: "Senior Product Designer".to_string(),
                        score: 92,
                    },
                    RoleMatch {
                        role: "UX Lead".to_string(),
                        score: 84,
                    },
                ],
            },
            recommendations: vec![
                Recommendation {
                    id: "rec-motion".to_string(),
                    kind: RecommendationKind::Skill,
                    title: "Motion Design".to_string(),
                    reason: "Listed in 40% of matching postings.".to_string(),
                },
                Recommendation {
                    id: "rec-cpacc".to_string(),
                    kind: RecommendationKind::Certification,
                    title: "CPACC".to_string(),
                    reason: "Backs up your accessibility work.".to_string(),
                },
            ],
            endorsements: vec![
                Endorsement {
                    skill: "Figma".to_string(),
                    count: 14,
                },
                Endorsement {
                    skill: "User Research".to_string(),
                    count: 9,
                },
            ],
        })),
        preferences: Arc::new(Preferences {
            location: "Seattle or Remote".to_string(),
            job_types: ["Full-time", "Contract"].into_iter().collect(),
            salary_range: SalaryRange {
                min: "$130,000".to_string(),
                max: "$160,000".to_string(),
            },
            notifications: BTreeMap::from([
                ("jobs".to_string(), true),
                ("messages".to_string(), true),
                ("applications".to_string(), false),
            ]),
        }),
    }
}

fn badge(id: &str, name: &str, icon: &str, earned: bool) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        earned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{badge_progress, evaluate_completeness, evaluate_strength, StrengthLabel};

    #[test]
    fn sample_profile_is_fully_complete_but_not_all_star() {
        let profile = sample_profile();
        assert_eq!(evaluate_completeness(&profile).percentage, 100);

        let strength = evaluate_strength(&profile);
        assert_eq!(strength.percentage, 75);
        assert_eq!(strength.label, StrengthLabel::VeryStrong);
        assert_eq!(badge_progress(&profile).earned, 2);
    }
}
