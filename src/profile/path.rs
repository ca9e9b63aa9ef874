//! Typed access to the editable leaves of a [`Profile`].
//!
//! Paths are a closed set of selectors rather than free-form strings, so a
//! match over [`FieldPath`] covers every leaf a draft can touch. The dotted
//! spelling used by form collaborators (`preferences.salaryRange.min`) is
//! only parsed at the boundary through [`FromStr`].
//!
//! [`set`] never mutates its input: it clones the root (sharing every `Arc`
//! branch) and copies only the branch that leads to the replaced leaf.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{Profile, TagSet};

/// Selector for one editable leaf of the profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    Name,
    Position,
    Location,
    About,
    ProfileImage,
    Skills,
    PreferredLocation,
    JobTypes,
    SalaryMin,
    SalaryMax,
    /// Named toggle under `preferences.notifications`.
    Notification(String),
}

impl FieldPath {
    /// Scalar text leaves, in the order forms usually present them.
    pub fn text_leaves() -> [FieldPath; 7] {
        [
            FieldPath::Name,
            FieldPath::Position,
            FieldPath::Location,
            FieldPath::About,
            FieldPath::PreferredLocation,
            FieldPath::SalaryMin,
            FieldPath::SalaryMax,
        ]
    }

    pub fn notification(name: impl Into<String>) -> Self {
        FieldPath::Notification(name.into())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldPath::Name
            | FieldPath::Position
            | FieldPath::Location
            | FieldPath::About
            | FieldPath::PreferredLocation
            | FieldPath::SalaryMin
            | FieldPath::SalaryMax => FieldKind::Text,
            FieldPath::ProfileImage => FieldKind::OptionalText,
            FieldPath::Skills | FieldPath::JobTypes => FieldKind::List,
            FieldPath::Notification(_) => FieldKind::Toggle,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => f.write_str("name"),
            FieldPath::Position => f.write_str("position"),
            FieldPath::Location => f.write_str("location"),
            FieldPath::About => f.write_str("about"),
            FieldPath::ProfileImage => f.write_str("profileImage"),
            FieldPath::Skills => f.write_str("skills"),
            FieldPath::PreferredLocation => f.write_str("preferences.location"),
            FieldPath::JobTypes => f.write_str("preferences.jobTypes"),
            FieldPath::SalaryMin => f.write_str("preferences.salaryRange.min"),
            FieldPath::SalaryMax => f.write_str("preferences.salaryRange.max"),
            FieldPath::Notification(name) => write!(f, "preferences.notifications.{name}"),
        }
    }
}

impl FromStr for FieldPath {
    type Err = FieldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = raw.trim().split('.').collect();
        let path = match segments.as_slice() {
            ["name"] => FieldPath::Name,
            ["position"] => FieldPath::Position,
            ["location"] => FieldPath::Location,
            ["about"] => FieldPath::About,
            ["profileImage"] => FieldPath::ProfileImage,
            ["skills"] => FieldPath::Skills,
            ["preferences", "location"] => FieldPath::PreferredLocation,
            ["preferences", "jobTypes"] => FieldPath::JobTypes,
            ["preferences", "salaryRange", "min"] => FieldPath::SalaryMin,
            ["preferences", "salaryRange", "max"] => FieldPath::SalaryMax,
            ["preferences", "notifications", name] if !name.is_empty() => {
                FieldPath::Notification((*name).to_string())
            }
            _ => return Err(FieldError::UnknownField(raw.to_string())),
        };
        Ok(path)
    }
}

/// Value shape accepted by a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// Text that may also be cleared.
    OptionalText,
    Toggle,
    List,
}

impl FieldKind {
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::OptionalText => "text or null",
            FieldKind::Toggle => "boolean",
            FieldKind::List => "list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Leaf value read from or written to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Toggle(bool),
    Text(String),
    List(Vec<String>),
    /// Nothing stored at the path.
    Absent,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub const fn describe(&self) -> &'static str {
        match self {
            FieldValue::Toggle(_) => "boolean",
            FieldValue::Text(_) => "text",
            FieldValue::List(_) => "list",
            FieldValue::Absent => "null",
        }
    }
}

/// Error raised when a path cannot be resolved or a value does not fit it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown profile field '{0}'")]
    UnknownField(String),
    #[error("invalid value for '{path}': expected {expected}, found {found}")]
    InvalidFieldType {
        path: FieldPath,
        expected: FieldKind,
        found: &'static str,
    },
}

/// Reads the leaf at `path`, returning [`FieldValue::Absent`] when nothing
/// is stored there.
pub fn get(root: &Profile, path: &FieldPath) -> FieldValue {
    match path {
        FieldPath::Name => FieldValue::Text(root.name.clone()),
        FieldPath::Position => FieldValue::Text(root.position.clone()),
        FieldPath::Location => FieldValue::Text(root.location.clone()),
        FieldPath::About => FieldValue::Text(root.about.clone()),
        FieldPath::ProfileImage => root
            .profile_image
            .clone()
            .map_or(FieldValue::Absent, FieldValue::Text),
        FieldPath::Skills => FieldValue::List(root.skills.to_vec()),
        FieldPath::PreferredLocation => FieldValue::Text(root.preferences.location.clone()),
        FieldPath::JobTypes => FieldValue::List(root.preferences.job_types.to_vec()),
        FieldPath::SalaryMin => FieldValue::Text(root.preferences.salary_range.min.clone()),
        FieldPath::SalaryMax => FieldValue::Text(root.preferences.salary_range.max.clone()),
        FieldPath::Notification(name) => root
            .preferences
            .notifications
            .get(name)
            .copied()
            .map_or(FieldValue::Absent, FieldValue::Toggle),
    }
}

/// Returns a new root with the leaf at `path` replaced by `value`.
///
/// Branches off the path stay shared with `root`. A missing notification
/// toggle is created. Lists written to `skills` or `jobTypes` go through
/// [`TagSet`] so blanks and duplicates are dropped.
pub fn set(root: &Profile, path: &FieldPath, value: FieldValue) -> Result<Profile, FieldError> {
    let mut next = root.clone();
    match (path, value) {
        (FieldPath::Name, FieldValue::Text(text)) => next.name = text,
        (FieldPath::Position, FieldValue::Text(text)) => next.position = text,
        (FieldPath::Location, FieldValue::Text(text)) => next.location = text,
        (FieldPath::About, FieldValue::Text(text)) => next.about = text,
        (FieldPath::ProfileImage, FieldValue::Text(reference)) => {
            next.profile_image = Some(reference)
        }
        (FieldPath::ProfileImage, FieldValue::Absent) => next.profile_image = None,
        (FieldPath::Skills, FieldValue::List(items)) => {
            next.skills = Arc::new(items.into_iter().collect::<TagSet>())
        }
        (FieldPath::PreferredLocation, FieldValue::Text(text)) => {
            Arc::make_mut(&mut next.preferences).location = text
        }
        (FieldPath::JobTypes, FieldValue::List(items)) => {
            Arc::make_mut(&mut next.preferences).job_types = items.into_iter().collect()
        }
        (FieldPath::SalaryMin, FieldValue::Text(text)) => {
            Arc::make_mut(&mut next.preferences).salary_range.min = text
        }
        (FieldPath::SalaryMax, FieldValue::Text(text)) => {
            Arc::make_mut(&mut next.preferences).salary_range.max = text
        }
        (FieldPath::Notification(name), FieldValue::Toggle(flag)) => {
            Arc::make_mut(&mut next.preferences)
                .notifications
                .insert(name.clone(), flag);
        }
        (path, value) => {
            return Err(FieldError::InvalidFieldType {
                path: path.clone(),
                expected: path.kind(),
                found: value.describe(),
            })
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Profile {
        let mut profile = Profile {
            name: "Ana".to_string(),
            position: "Dev".to_string(),
            ..Profile::default()
        };
        let preferences = Arc::make_mut(&mut profile.preferences);
        preferences.location = "NYC".to_string();
        preferences.notifications.insert("jobs".to_string(), true);
        profile
    }

    #[test]
    fn parses_dotted_spellings() {
        assert_eq!(
            "preferences.salaryRange.min".parse::<FieldPath>(),
            Ok(FieldPath::SalaryMin)
        );
        assert_eq!(
            "preferences.notifications.jobs".parse::<FieldPath>(),
            Ok(FieldPath::notification("jobs"))
        );
        assert_eq!("name".parse::<FieldPath>(), Ok(FieldPath::Name));
    }

    #[test]
    fn rejects_unknown_paths() {
        for raw in [
            "nickname",
            "preferences",
            "preferences.notifications.",
            "preferences.salaryRange.mid",
            "experience.0.company",
        ] {
            match raw.parse::<FieldPath>() {
                Err(FieldError::UnknownField(field)) => assert_eq!(field, raw),
                other => panic!("expected unknown field for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_matches_parse() {
        let paths = [
            FieldPath::ProfileImage,
            FieldPath::Skills,
            FieldPath::JobTypes,
            FieldPath::SalaryMax,
            FieldPath::notification("messages"),
        ];
        for path in paths {
            assert_eq!(path.to_string().parse::<FieldPath>(), Ok(path));
        }
    }

    #[test]
    fn get_reports_absent_leaves() {
        let profile = seeded();
        assert_eq!(get(&profile, &FieldPath::ProfileImage), FieldValue::Absent);
        assert_eq!(
            get(&profile, &FieldPath::notification("status")),
            FieldValue::Absent
        );
        assert_eq!(
            get(&profile, &FieldPath::notification("jobs")),
            FieldValue::Toggle(true)
        );
        assert_eq!(
            get(&profile, &FieldPath::PreferredLocation),
            FieldValue::text("NYC")
        );
    }

    #[test]
    fn set_leaves_the_original_root_untouched() {
        let original = seeded();
        let updated = set(&original, &FieldPath::SalaryMin, FieldValue::text("90k"))
            .expect("text leaf accepts text");

        assert_eq!(original.preferences.salary_range.min, "");
        assert_eq!(updated.preferences.salary_range.min, "90k");
        assert!(!Arc::ptr_eq(&original.preferences, &updated.preferences));
        assert!(Arc::ptr_eq(&original.experience, &updated.experience));
        assert!(Arc::ptr_eq(&original.skills, &updated.skills));
    }

    #[test]
    fn top_level_set_shares_every_branch() {
        let original = seeded();
        let updated =
            set(&original, &FieldPath::Position, FieldValue::text("Engineer")).expect("sets");
        assert_eq!(updated.position, "Engineer");
        assert_eq!(original.position, "Dev");
        assert!(Arc::ptr_eq(&original.preferences, &updated.preferences));
    }

    #[test]
    fn set_creates_missing_toggles() {
        let original = seeded();
        let updated = set(
            &original,
            &FieldPath::notification("status"),
            FieldValue::Toggle(false),
        )
        .expect("toggle leaf accepts booleans");
        assert_eq!(
            updated.preferences.notifications.get("status"),
            Some(&false)
        );
        assert!(!original.preferences.notifications.contains_key("status"));
    }

    #[test]
    fn mismatched_values_are_rejected() {
        let original = seeded();
        let err = set(
            &original,
            &FieldPath::notification("jobs"),
            FieldValue::text("yes"),
        )
        .expect_err("toggle rejects text");
        assert_eq!(
            err,
            FieldError::InvalidFieldType {
                path: FieldPath::notification("jobs"),
                expected: FieldKind::Toggle,
                found: "text",
            }
        );

        let err = set(&original, &FieldPath::Name, FieldValue::Absent)
            .expect_err("name is required text");
        assert!(matches!(err, FieldError::InvalidFieldType { found: "null", .. }));
    }

    #[test]
    fn image_reference_can_be_cleared() {
        let with_image = set(
            &seeded(),
            &FieldPath::ProfileImage,
            FieldValue::text("data:image/png;base64,AAAA"),
        )
        .expect("image accepts text");
        assert!(with_image.profile_image.is_some());

        let cleared =
            set(&with_image, &FieldPath::ProfileImage, FieldValue::Absent).expect("image clears");
        assert_eq!(cleared.profile_image, None);
    }

    #[test]
    fn list_writes_respect_tag_set_rules() {
        let updated = set(
            &seeded(),
            &FieldPath::Skills,
            FieldValue::List(vec!["Go".into(), "Go".into(), " ".into(), "SQL".into()]),
        )
        .expect("skills accept lists");
        assert_eq!(updated.skills.as_slice(), ["Go", "SQL"]);
    }

    #[test]
    fn list_writes_trim_like_single_skill_edits() {
        let updated = set(
            &seeded(),
            &FieldPath::Skills,
            FieldValue::List(vec![" Go".into(), "Go".into(), "SQL ".into()]),
        )
        .expect("skills accept lists");
        assert_eq!(updated.skills.as_slice(), ["Go", "SQL"]);
    }
}
