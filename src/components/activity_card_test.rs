use super::*;

fn card(spots_left: i64) -> ActivityCardView {
    ActivityCardView {
        name: "Chess Club".to_owned(),
        description: String::new(),
        schedule: None,
        max_participants: 2,
        participants: Vec::new(),
        spots_left,
    }
}

#[test]
fn spots_class_flags_oversubscription() {
    assert_eq!(spots_class(&card(3)), "activity-card__spots");
    assert_eq!(spots_class(&card(0)), "activity-card__spots");
    assert_eq!(spots_class(&card(-1)), "activity-card__spots activity-card__spots--over");
}

#[test]
fn spots_label_shows_signed_count() {
    assert_eq!(spots_label(&card(7)), "7 spots left");
    assert_eq!(spots_label(&card(-1)), "-1 spots left");
}
