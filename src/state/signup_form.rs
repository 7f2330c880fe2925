//! Signup form values: the email field and the activity selection control.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub email: String,
    /// Value of the selection control; empty means "select an activity".
    pub activity: String,
    /// A submission is in flight.
    pub submitting: bool,
}

impl SignupFormState {
    pub fn select_activity(&mut self, name: &str) {
        name.clone_into(&mut self.activity);
    }

    /// Reset both fields after a successful signup.
    pub fn clear(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}
