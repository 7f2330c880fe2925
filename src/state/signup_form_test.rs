use super::*;

#[test]
fn default_form_is_empty() {
    let form = SignupFormState::default();
    assert!(form.email.is_empty());
    assert!(form.activity.is_empty());
    assert!(!form.submitting);
}

#[test]
fn select_activity_sets_selection_value() {
    let mut form = SignupFormState::default();
    form.select_activity("Chess Club");
    assert_eq!(form.activity, "Chess Club");
    form.select_activity("Art Club");
    assert_eq!(form.activity, "Art Club");
}

#[test]
fn clear_resets_fields() {
    let mut form = SignupFormState { email: "a@b.com".to_owned(), activity: "Chess Club".to_owned(), submitting: false };
    form.clear();
    assert_eq!(form, SignupFormState::default());
}
