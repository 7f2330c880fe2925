use super::*;
use crate::net::types::{ActivityRecord, RosterSnapshot};

fn record(max: u32, participants: &[&str]) -> ActivityRecord {
    ActivityRecord {
        description: format!("{max} seats"),
        schedule: Some("Fridays".to_owned()),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn snapshot(entries: &[(&str, ActivityRecord)]) -> RosterSnapshot {
    entries
        .iter()
        .map(|(name, rec)| ((*name).to_owned(), rec.clone()))
        .collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_view_is_loading_with_no_options() {
    let view = RosterViewState::default();
    assert_eq!(view.body(), &RosterBody::Loading);
    assert_eq!(view.body().placeholder(), Some(LOADING_TEXT));
    assert!(view.options().is_empty());
    assert_eq!(view.activity_count(), 0);
    assert_eq!(view.render_count(), 0);
}

// =============================================================
// render
// =============================================================

#[test]
fn render_count_matches_snapshot_size() {
    for n in 0..6 {
        let names: Vec<String> = (0..n).map(|i| format!("Activity {i}")).collect();
        let snap: RosterSnapshot = names.iter().map(|name| (name.clone(), record(3, &[]))).collect();
        let mut view = RosterViewState::default();
        view.render(&snap);
        assert_eq!(view.activity_count(), snap.len());
        assert_eq!(view.options().len(), snap.len());
    }
}

#[test]
fn empty_snapshot_shows_no_activities_placeholder() {
    let mut view = RosterViewState::default();
    view.render(&RosterSnapshot::default());
    assert_eq!(view.body(), &RosterBody::Empty);
    assert_eq!(view.body().placeholder(), Some(EMPTY_ROSTER_TEXT));
    assert!(view.cards().is_empty());
}

#[test]
fn card_without_participants_shows_only_placeholder() {
    let mut view = RosterViewState::default();
    view.render(&snapshot(&[("Chess Club", record(12, &[]))]));
    let card = view.card("Chess Club").expect("card");
    assert_eq!(card.participants_placeholder(), Some(NO_PARTICIPANTS_TEXT));
    assert_eq!(card.participant_count(), 0);
}

#[test]
fn card_with_participants_has_no_placeholder() {
    let mut view = RosterViewState::default();
    view.render(&snapshot(&[("Chess Club", record(12, &["a@b.com"]))]));
    let card = view.card("Chess Club").expect("card");
    assert_eq!(card.participants_placeholder(), None);
    assert_eq!(card.participants, vec!["a@b.com".to_owned()]);
}

#[test]
fn spots_left_and_option_labels_are_not_clamped() {
    let mut view = RosterViewState::default();
    view.render(&snapshot(&[
        ("Roomy", record(10, &["a", "b", "c"])),
        ("Packed", record(2, &["a", "b", "c"])),
    ]));

    assert_eq!(view.card("Roomy").map(|c| c.spots_left), Some(7));
    assert_eq!(view.card("Packed").map(|c| c.spots_left), Some(-1));
    assert!(view.card("Packed").is_some_and(ActivityCardView::is_oversubscribed));
    assert_eq!(
        view.options(),
        &[
            ActivityOption { value: "Roomy".to_owned(), label: "Roomy (7 spots left)".to_owned() },
            ActivityOption { value: "Packed".to_owned(), label: "Packed (-1 spots left)".to_owned() },
        ]
    );
}

#[test]
fn render_replaces_previous_snapshot_wholesale() {
    let mut view = RosterViewState::default();
    view.render(&snapshot(&[("A", record(1, &[])), ("B", record(1, &[]))]));
    view.render(&snapshot(&[("C", record(1, &["x"]))]));
    assert_eq!(view.activity_count(), 1);
    assert!(view.card("A").is_none());
    assert_eq!(view.card("C").map(|c| c.spots_left), Some(0));
    assert_eq!(view.options().len(), 1);
    assert_eq!(view.render_count(), 2);
}

#[test]
fn render_keeps_server_order_and_card_fields() {
    let mut view = RosterViewState::default();
    view.render(&snapshot(&[("Zeta", record(4, &[])), ("Alpha", record(5, &["p"]))]));
    let names: Vec<&str> = view.cards().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
    let alpha = view.card("Alpha").expect("card");
    assert_eq!(alpha.description, "5 seats");
    assert_eq!(alpha.schedule.as_deref(), Some("Fridays"));
    assert_eq!(alpha.max_participants, 5);
}

// =============================================================
// render_load_error
// =============================================================

#[test]
fn load_error_replaces_cards_but_keeps_options() {
    let mut view = RosterViewState::default();
    view.render(&snapshot(&[("Chess Club", record(12, &[]))]));
    view.render_load_error();
    assert_eq!(view.body(), &RosterBody::LoadFailed);
    assert_eq!(view.body().placeholder(), Some(LOAD_FAILED_TEXT));
    assert_eq!(view.activity_count(), 0);
    assert_eq!(view.options().len(), 1);
}

#[test]
fn render_after_load_error_recovers() {
    let mut view = RosterViewState::default();
    view.render_load_error();
    view.render(&snapshot(&[("Chess Club", record(12, &[]))]));
    assert_eq!(view.activity_count(), 1);
}
