use thiserror::Error;

use crate::config;
use crate::lead::record::LeadRecord;
use crate::lead::validate::{PhoneField, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("webhook answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
}

/// Why a submit click did not start a request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("lead already sent")]
    AlreadySent,
}

impl SubmitRejected {
    /// Only a blocked phone number sends the user back to the field.
    pub fn focuses_phone(&self) -> bool {
        matches!(self, SubmitRejected::Invalid(_))
    }
}

/// A deferred revert of the error label for one failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertAfter {
    pub attempt: u32,
    pub delay_ms: u32,
}

/// How the submit button should look right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub class: &'static str,
    pub disabled: bool,
}

pub const IDLE_LABEL: &str = "Get my free assessment";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const SUCCEEDED_LABEL: &str = "Received! We'll be in touch";
pub const FAILED_LABEL: &str = "Could not send. Try again";

/// Drives the submit button through a single lead submission.
///
/// The coordinator never does IO itself: `submit` hands back the record to
/// send, `resolve` takes the outcome, and a failed attempt hands back a
/// `RevertAfter` whose attempt number a later `revert` must present.
#[derive(Debug)]
pub struct SubmissionCoordinator {
    state: FormSubmissionState,
    attempt: u32,
    showing_error: bool,
}

impl Default for SubmissionCoordinator {
    fn default() -> Self {
        Self {
            state: FormSubmissionState::Idle,
            attempt: 0,
            showing_error: false,
        }
    }
}

impl SubmissionCoordinator {
    pub fn state(&self) -> FormSubmissionState {
        self.state
    }

    pub fn submit(&mut self, name: &str, phone: &mut PhoneField) -> Result<LeadRecord, SubmitRejected> {
        match self.state {
            FormSubmissionState::Submitting => return Err(SubmitRejected::InFlight),
            FormSubmissionState::Succeeded => return Err(SubmitRejected::AlreadySent),
            FormSubmissionState::Idle | FormSubmissionState::Failed => {}
        }
        let digits = phone.require_complete()?;

        self.attempt += 1;
        self.state = FormSubmissionState::Submitting;
        self.showing_error = false;
        Ok(LeadRecord::new(name, digits))
    }

    /// Applies the webhook outcome. On failure returns when and for which
    /// attempt the error label should be reverted.
    pub fn resolve(&mut self, outcome: Result<(), SubmissionError>) -> Option<RevertAfter> {
        if self.state != FormSubmissionState::Submitting {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.state = FormSubmissionState::Succeeded;
                None
            }
            Err(_) => {
                self.state = FormSubmissionState::Failed;
                self.showing_error = true;
                Some(RevertAfter {
                    attempt: self.attempt,
                    delay_ms: config::SUBMIT_ERROR_REVERT_MS,
                })
            }
        }
    }

    /// Restores the idle look after a failure. Stale attempts are ignored.
    pub fn revert(&mut self, attempt: u32) {
        if self.state == FormSubmissionState::Failed && attempt == self.attempt {
            self.showing_error = false;
        }
    }

    pub fn button(&self) -> ButtonView {
        match self.state {
            FormSubmissionState::Idle => ButtonView { label: IDLE_LABEL, class: "btn-submit", disabled: false },
            FormSubmissionState::Submitting => ButtonView {
                label: SUBMITTING_LABEL,
                class: "btn-submit is-loading",
                disabled: true,
            },
            FormSubmissionState::Succeeded => ButtonView {
                label: SUCCEEDED_LABEL,
                class: "btn-submit is-success",
                disabled: true,
            },
            FormSubmissionState::Failed if self.showing_error => ButtonView {
                label: FAILED_LABEL,
                class: "btn-submit is-error",
                disabled: false,
            },
            FormSubmissionState::Failed => ButtonView { label: IDLE_LABEL, class: "btn-submit", disabled: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn phone(raw: &str) -> PhoneField {
        let mut field = PhoneField::default();
        field.input(raw);
        field
    }

    fn submitting() -> SubmissionCoordinator {
        let mut coordinator = SubmissionCoordinator::default();
        coordinator.submit("Ana", &mut phone("11999998888")).unwrap();
        coordinator
    }

    #[test]
    fn starts_idle_and_clickable() {
        let coordinator = SubmissionCoordinator::default();
        assert_eq!(coordinator.state(), FormSubmissionState::Idle);
        assert!(!coordinator.button().disabled);
        assert_eq!(coordinator.button().label, IDLE_LABEL);
    }

    #[test]
    fn valid_submit_builds_lead_and_starts_submitting() {
        let mut coordinator = SubmissionCoordinator::default();
        let lead = coordinator.submit("Ana", &mut phone("11999998888")).unwrap();

        assert_eq!(
            lead,
            LeadRecord {
                name: "Ana".to_string(),
                phone_raw_digits: "11999998888".to_string(),
                phone_formatted: "(11) 99999-8888".to_string(),
            }
        );
        assert_eq!(coordinator.state(), FormSubmissionState::Submitting);
        assert_eq!(
            coordinator.button(),
            ButtonView { label: SUBMITTING_LABEL, class: "btn-submit is-loading", disabled: true }
        );
    }

    #[test]
    fn incomplete_phone_blocks_submit() {
        let mut coordinator = SubmissionCoordinator::default();
        let mut field = phone("119999");

        let err = coordinator.submit("Ana", &mut field).unwrap_err();

        assert_eq!(err, SubmitRejected::Invalid(ValidationError::Incomplete { digits: 6 }));
        assert!(err.focuses_phone());
        assert_eq!(coordinator.state(), FormSubmissionState::Idle);
        assert!(field.error().unwrap().to_string().to_lowercase().contains("incomplete number"));
    }

    #[test]
    fn empty_phone_blocks_submit() {
        let mut coordinator = SubmissionCoordinator::default();
        let err = coordinator.submit("Ana", &mut PhoneField::default()).unwrap_err();
        assert_eq!(err, SubmitRejected::Invalid(ValidationError::Empty));
        assert!(err.focuses_phone());
        assert_eq!(coordinator.state(), FormSubmissionState::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut coordinator = submitting();
        let err = coordinator.submit("Ana", &mut phone("11999998888")).unwrap_err();
        assert_eq!(err, SubmitRejected::InFlight);
        assert!(!err.focuses_phone());
        assert_eq!(coordinator.state(), FormSubmissionState::Submitting);
    }

    #[test]
    fn ok_response_locks_form_for_good() {
        let mut coordinator = submitting();
        assert_eq!(coordinator.resolve(Ok(())), None);

        assert_eq!(coordinator.state(), FormSubmissionState::Succeeded);
        assert!(coordinator.button().disabled);
        assert_eq!(coordinator.button().label, SUCCEEDED_LABEL);

        let err = coordinator.submit("Ana", &mut phone("11999998888")).unwrap_err();
        assert_eq!(err, SubmitRejected::AlreadySent);
        assert!(!err.focuses_phone());
        coordinator.revert(1);
        assert_eq!(coordinator.state(), FormSubmissionState::Succeeded);
        assert!(coordinator.button().disabled);
    }

    #[test]
    fn failure_shows_error_then_reverts() {
        let mut coordinator = submitting();
        let revert = coordinator.resolve(Err(SubmissionError::Status(500))).unwrap();

        assert_eq!(revert, RevertAfter { attempt: 1, delay_ms: 3_000 });
        assert_eq!(coordinator.state(), FormSubmissionState::Failed);
        assert_eq!(
            coordinator.button(),
            ButtonView { label: FAILED_LABEL, class: "btn-submit is-error", disabled: false }
        );

        coordinator.revert(revert.attempt);
        assert_eq!(
            coordinator.button(),
            ButtonView { label: IDLE_LABEL, class: "btn-submit", disabled: false }
        );

        coordinator.submit("Ana", &mut phone("11999998888")).unwrap();
        assert_eq!(coordinator.state(), FormSubmissionState::Submitting);
    }

    #[test]
    fn retry_is_allowed_before_revert() {
        let mut coordinator = submitting();
        coordinator.resolve(Err(SubmissionError::Network("offline".to_string())));
        assert!(coordinator.submit("Ana", &mut phone("11999998888")).is_ok());
    }

    #[test]
    fn stale_revert_does_not_clear_newer_error() {
        let mut coordinator = submitting();
        let first = coordinator.resolve(Err(SubmissionError::Status(502))).unwrap().attempt;
        coordinator.submit("Ana", &mut phone("11999998888")).unwrap();
        let second = coordinator.resolve(Err(SubmissionError::Status(502))).unwrap().attempt;
        assert_ne!(first, second);

        coordinator.revert(first);
        assert_eq!(coordinator.button().label, FAILED_LABEL);

        coordinator.revert(second);
        assert_eq!(coordinator.button().label, IDLE_LABEL);
    }

    #[test]
    fn outcome_without_request_is_ignored() {
        let mut coordinator = SubmissionCoordinator::default();
        assert_eq!(coordinator.resolve(Err(SubmissionError::Status(500))), None);
        assert_eq!(coordinator.state(), FormSubmissionState::Idle);
    }
}
