//! Contact form state and its submission state machine.
//!
//! ```text
//! Idle --begin_submit--> Submitting --complete_submit(Ok)--> Idle (reset, success text)
//!                                   \-complete_submit(Err)-> Idle (kept, failure text)
//! ```
//!
//! While submitting the form is disabled: edits are rejected but the values
//! stay readable so the view can keep showing them.

use crate::error::SendError;
use crate::forms::suggestion::{select_suggestion, SelectedAddress};
use crate::forms::validation::{self, FieldError};
use crate::model::address::AddressCandidate;
use crate::model::contact::{ContactFormValues, EmailTemplateParams};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    values: ContactFormValues,
    state: SubmissionState,
    submit_message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// The form is disabled exactly while a send is in flight.
    pub fn is_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn submit_message(&self) -> &str {
        &self.submit_message
    }

    pub fn errors(&self) -> Vec<FieldError> {
        validation::validate(&self.values)
    }

    pub fn is_valid(&self) -> bool {
        validation::is_valid(&self.values)
    }

    pub fn set_full_name(&mut self, value: String) -> bool {
        self.edit(|values| values.full_name = Some(value))
    }

    pub fn set_email(&mut self, value: String) -> bool {
        self.edit(|values| values.email = Some(value))
    }

    pub fn set_city(&mut self, value: String) -> bool {
        self.edit(|values| values.city = Some(value))
    }

    pub fn set_postal_code(&mut self, value: String) -> bool {
        self.edit(|values| values.postal_code = Some(value))
    }

    pub fn set_address(&mut self, value: String) -> bool {
        self.edit(|values| values.address = Some(value))
    }

    pub fn set_message(&mut self, value: String) -> bool {
        self.edit(|values| values.message = Some(value))
    }

    pub fn set_terms(&mut self, accepted: bool) -> bool {
        self.edit(|values| values.terms = accepted)
    }

    /// Overwrites address, city and postal code from a picked suggestion.
    /// The other fields are left alone.
    pub fn apply_selection(&mut self, candidate: &AddressCandidate) -> bool {
        let SelectedAddress {
            address,
            city,
            postal_code,
        } = select_suggestion(candidate, self.values.address.as_deref());
        self.edit(|values| {
            values.address = Some(address);
            values.city = Some(city);
            values.postal_code = Some(postal_code);
        })
    }

    /// Starts a send if the form is valid and none is in flight.
    ///
    /// Returns the payload to deliver, or `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<EmailTemplateParams> {
        if !self.is_valid() || self.is_submitting() {
            return None;
        }
        self.state = SubmissionState::Submitting;
        self.submit_message.clear();
        Some(EmailTemplateParams::from(&self.values))
    }

    /// Settles the in-flight send. Ignored when nothing is in flight.
    pub fn complete_submit(&mut self, outcome: Result<(), SendError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.submit_message = SUCCESS_MESSAGE.to_string();
                self.values = ContactFormValues::default();
            }
            Err(_) => {
                self.submit_message = FAILURE_MESSAGE.to_string();
            }
        }
        self.state = SubmissionState::Idle;
    }

    fn edit(&mut self, change: impl FnOnce(&mut ContactFormValues)) -> bool {
        if self.is_disabled() {
            return false;
        }
        change(&mut self.values);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::address::AddressDetails;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_full_name("Giannis".into());
        form.set_email("giannis@gmail.com".into());
        form.set_city("Thessaloniki".into());
        form.set_postal_code("54623".into());
        form.set_address("Aristotelous 16".into());
        form.set_message("Test message".into());
        form.set_terms(true);
        form
    }

    #[test]
    fn invalid_form_does_not_submit() {
        let mut form = filled_form();
        form.set_email("test".into());
        assert_eq!(form.begin_submit(), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn unaccepted_terms_never_submit() {
        let mut form = filled_form();
        form.set_terms(false);
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn payload_carries_the_six_values() {
        let mut form = filled_form();
        let params = form.begin_submit().unwrap();
        assert_eq!(
            params,
            EmailTemplateParams {
                full_name: Some("Giannis".into()),
                email: Some("giannis@gmail.com".into()),
                city: Some("Thessaloniki".into()),
                postal_code: Some("54623".into()),
                address: Some("Aristotelous 16".into()),
                message: Some("Test message".into()),
            }
        );
    }

    #[test]
    fn submitting_disables_edits_but_keeps_values() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        assert!(form.is_disabled());
        assert!(!form.set_full_name("Someone else".into()));
        assert_eq!(form.values().full_name.as_deref(), Some("Giannis"));
    }

    #[test]
    fn double_submit_yields_one_payload() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn new_submission_clears_previous_message() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit(Err(SendError::Network("offline".into())));
        assert_eq!(form.submit_message(), FAILURE_MESSAGE);

        form.begin_submit().unwrap();
        assert_eq!(form.submit_message(), "");
    }

    #[test]
    fn success_resets_and_enables() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit(Ok(()));

        assert_eq!(form.submit_message(), SUCCESS_MESSAGE);
        assert_eq!(form.values(), &ContactFormValues::default());
        assert!(!form.is_disabled());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn failure_keeps_values_and_enables() {
        let mut form = filled_form();
        let before = form.values().clone();
        form.begin_submit().unwrap();
        form.complete_submit(Err(SendError::Rejected {
            status: 400,
            body: "The Public Key is invalid".into(),
        }));

        assert_eq!(form.submit_message(), FAILURE_MESSAGE);
        assert_eq!(form.values(), &before);
        assert!(!form.is_disabled());
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut form = filled_form();
        form.complete_submit(Ok(()));
        assert_eq!(form.submit_message(), "");
        assert_eq!(form.values().full_name.as_deref(), Some("Giannis"));
    }

    #[test]
    fn selection_patches_only_address_fields() {
        let mut form = filled_form();
        form.set_address("Xanthippou 11, Agioi Anargyroi".into());
        let candidate = AddressCandidate {
            place_id: 1,
            display_name: "Xanthippou, Municipality of Agioi Anargyroi".into(),
            name: None,
            address: Some(AddressDetails {
                road: Some("Xanthippou".into()),
                municipality: Some("Municipality of Agioi Anargyroi".into()),
                ..Default::default()
            }),
        };

        assert!(form.apply_selection(&candidate));
        let values = form.values();
        assert_eq!(values.address.as_deref(), Some("Xanthippou 11"));
        assert_eq!(values.city.as_deref(), Some("Agioi Anargyroi"));
        assert_eq!(values.postal_code.as_deref(), Some(""));
        assert_eq!(values.full_name.as_deref(), Some("Giannis"));
        assert_eq!(values.message.as_deref(), Some("Test message"));
    }
}
