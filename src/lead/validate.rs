use thiserror::Error;

use crate::lead::mask::{mask_phone, raw_digits, MAX_PHONE_DIGITS};

pub const NEUTRAL_BORDER: &str = "rgba(255, 255, 255, 0.15)";
pub const ALERT_BORDER: &str = "#ff5a5f";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhoneStatus {
    Empty,
    Incomplete,
    Complete,
}

impl PhoneStatus {
    pub fn classify(digit_count: usize) -> Self {
        match digit_count {
            0 => PhoneStatus::Empty,
            n if n < MAX_PHONE_DIGITS => PhoneStatus::Incomplete,
            _ => PhoneStatus::Complete,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your WhatsApp number")]
    Empty,
    #[error("Incomplete number: include the area code and all 9 digits")]
    Incomplete { digits: usize },
}

/// The phone input as the form sees it.
///
/// `display` is only ever written through [`mask_phone`], so the digits can
/// always be recovered from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhoneField {
    display: String,
    error: Option<ValidationError>,
}

impl PhoneField {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn digits(&self) -> String {
        raw_digits(&self.display)
    }

    pub fn status(&self) -> PhoneStatus {
        PhoneStatus::classify(self.digits().len())
    }

    pub fn border_color(&self) -> &'static str {
        if self.error.is_some() {
            ALERT_BORDER
        } else {
            NEUTRAL_BORDER
        }
    }

    /// Keystroke: re-mask and clear whatever error was showing.
    pub fn input(&mut self, raw: &str) {
        self.display = mask_phone(raw);
        self.error = None;
    }

    /// Blur only flags partial numbers; an empty field stays quiet.
    pub fn blur(&mut self) {
        self.error = match self.status() {
            PhoneStatus::Incomplete => Some(ValidationError::Incomplete { digits: self.digits().len() }),
            PhoneStatus::Empty | PhoneStatus::Complete => None,
        };
    }

    /// Blocking check used on submit. Anything short of `Complete` is an error
    /// and stays visible on the field.
    pub fn require_complete(&mut self) -> Result<String, ValidationError> {
        let digits = self.digits();
        let result = match PhoneStatus::classify(digits.len()) {
            PhoneStatus::Complete => Ok(digits),
            PhoneStatus::Empty => Err(ValidationError::Empty),
            PhoneStatus::Incomplete => Err(ValidationError::Incomplete { digits: digits.len() }),
        };
        self.error = result.as_ref().err().cloned();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, PhoneStatus::Empty)]
    #[case(1, PhoneStatus::Incomplete)]
    #[case(6, PhoneStatus::Incomplete)]
    #[case(10, PhoneStatus::Incomplete)]
    #[case(11, PhoneStatus::Complete)]
    fn classifies_by_digit_count(#[case] count: usize, #[case] expected: PhoneStatus) {
        assert_eq!(PhoneStatus::classify(count), expected);
    }

    #[test]
    fn blur_flags_partial_number() {
        let mut field = PhoneField::default();
        field.input("119999");
        field.blur();
        assert_eq!(field.error(), Some(&ValidationError::Incomplete { digits: 6 }));
        assert_eq!(field.border_color(), ALERT_BORDER);
    }

    #[test]
    fn blur_on_empty_field_shows_nothing() {
        let mut field = PhoneField::default();
        field.blur();
        assert_eq!(field.error(), None);
        assert_eq!(field.border_color(), NEUTRAL_BORDER);
    }

    #[test]
    fn typing_clears_previous_error() {
        let mut field = PhoneField::default();
        field.input("119");
        field.blur();
        assert!(field.error().is_some());

        field.input("(11) 9");
        assert_eq!(field.error(), None);
        assert_eq!(field.border_color(), NEUTRAL_BORDER);
    }

    #[test]
    fn incomplete_message_says_so() {
        let msg = ValidationError::Incomplete { digits: 6 }.to_string();
        assert!(msg.to_lowercase().contains("incomplete number"));
    }

    #[test]
    fn require_complete_returns_digits() {
        let mut field = PhoneField::default();
        field.input("11999998888");
        assert_eq!(field.display(), "(11) 99999-8888");
        assert_eq!(field.require_complete(), Ok("11999998888".to_string()));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn require_complete_rejects_empty() {
        let mut field = PhoneField::default();
        assert_eq!(field.require_complete(), Err(ValidationError::Empty));
        assert_eq!(field.error(), Some(&ValidationError::Empty));
    }
}
