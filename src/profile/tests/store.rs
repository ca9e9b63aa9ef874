use std::sync::Arc;

use super::common::*;
use crate::profile::{FieldPath, FieldValue, Profile, ProfileStore};

#[test]
fn commit_returns_derived_preferences() {
    let mut store = ProfileStore::new(Profile {
        skills: skills(&["Go"]),
        ..Profile::default()
    });
    let mut draft = store.begin_edit();
    draft
        .set_field(
            &"preferences.location".parse::<FieldPath>().expect("path"),
            FieldValue::text("Remote"),
        )
        .expect("text leaf");
    draft
        .set_field(&FieldPath::Position, FieldValue::text("Engineer"))
        .expect("text leaf");

    let outcome = store.commit(draft);

    assert_eq!(outcome.derived_preferences.location, "Remote");
    assert_eq!(outcome.derived_preferences.role, "Engineer");
    assert_eq!(outcome.derived_preferences.top_skill, "Go");
    assert!(Arc::ptr_eq(&outcome.profile, store.profile()));
}

#[test]
fn commit_replaces_canonical_and_records_history() {
    let mut store = ProfileStore::new(starter_profile());
    let before = Arc::clone(store.profile());

    let mut draft = store.begin_edit();
    draft.add_skill("c");
    let session_id = draft.id().clone();
    let outcome = store.commit(draft);

    assert_eq!(store.revision(), 1);
    assert_eq!(store.profile().skills.as_slice(), ["a", "b", "c"]);
    assert_eq!(before.skills.as_slice(), ["a", "b"]);
    assert_eq!(outcome.record.revision, 1);
    assert_eq!(outcome.record.session_id, session_id);
    assert_eq!(outcome.record.changed_paths, ["skills"]);
    assert_eq!(store.history().len(), 1);
}

#[test]
fn discard_keeps_canonical_profile() {
    let store = ProfileStore::new(starter_profile());
    let mut draft = store.begin_edit();
    draft
        .set_field(&FieldPath::Name, FieldValue::text("Someone else"))
        .expect("text leaf");
    draft.discard();

    assert_eq!(store.profile().name, "Ana");
    assert_eq!(store.revision(), 0);
    assert!(store.history().is_empty());
}

#[test]
fn new_sessions_start_from_the_latest_commit() {
    let mut store = ProfileStore::new(starter_profile());
    let mut first = store.begin_edit();
    first.add_skill("c");
    store.commit(first);

    let second = store.begin_edit();
    assert_eq!(second.base_revision(), 1);
    assert_eq!(second.draft().skills.as_slice(), ["a", "b", "c"]);
    assert!(!second.is_dirty());
}

#[test]
fn scores_follow_the_committed_profile() {
    let mut store = ProfileStore::new(starter_profile());
    assert_eq!(store.completeness().percentage, 17);

    let mut draft = store.begin_edit();
    draft.add_skill("c");
    assert_eq!(store.completeness().percentage, 17);

    store.commit(draft);
    assert_eq!(store.completeness().percentage, 33);
    assert_eq!(store.strength().percentage, 38);
}

#[test]
fn unchanged_branches_are_shared_after_commit() {
    let mut store = ProfileStore::new(complete_profile());
    let before = Arc::clone(store.profile());

    let mut draft = store.begin_edit();
    draft.add_skill("Kafka");
    store.commit(draft);

    let after = store.profile();
    assert!(Arc::ptr_eq(&before.experience, &after.experience));
    assert!(Arc::ptr_eq(&before.preferences, &after.preferences));
    assert!(!Arc::ptr_eq(&before.skills, &after.skills));
}

#[test]
fn stale_drafts_still_commit_last_writer_wins() {
    let mut store = ProfileStore::new(starter_profile());
    let mut early = store.begin_edit();
    let mut late = store.begin_edit();

    late.add_skill("late");
    store.commit(late);

    early
        .set_field(&FieldPath::About, FieldValue::text("Written in the first tab."))
        .expect("text leaf");
    let outcome = store.commit(early);

    assert_eq!(store.revision(), 2);
    assert_eq!(outcome.record.changed_paths, ["about"]);
    assert_eq!(store.profile().skills.as_slice(), ["a", "b"]);
    assert_eq!(store.profile().about, "Written in the first tab.");
}

#[test]
fn history_keeps_only_the_latest_commits() {
    let mut store = ProfileStore::new(starter_profile());
    let total = crate::profile::HISTORY_LIMIT + 6;
    for round in 0..total {
        let mut draft = store.begin_edit();
        draft
            .set_field(&FieldPath::About, FieldValue::text(format!("Revision {round}")))
            .expect("text leaf");
        store.commit(draft);
    }

    let history = store.history();
    assert_eq!(store.revision(), total as u64);
    assert_eq!(history.len(), crate::profile::HISTORY_LIMIT);
    assert_eq!(history[0].revision, 7);
    assert_eq!(history[history.len() - 1].revision, total as u64);
}
