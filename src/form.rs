//! Contact form state.
//!
//! The form is fully client-side: three controlled text fields, updated per
//! keystroke, and a submit that acknowledges the sender by name and clears
//! the fields. Nothing is sent anywhere.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The three controlled fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Error)]
#[error("unknown contact form field: {0}")]
pub struct UnknownField(String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// In-memory contact form state. Fields are always plain strings and default
/// to empty; state lives for the page session only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Updates the field matching the input element's `name` attribute.
    /// Unrecognized names are ignored; the form structure is fixed, so this
    /// only happens if the markup and the state drift apart.
    pub fn apply(&mut self, field_name: &str, value: String) {
        if let Ok(field) = field_name.parse() {
            self.set_field(field, value);
        }
    }

    /// Consumes the current draft: returns the acknowledgement message for
    /// the sender and resets every field to empty.
    pub fn submit(&mut self) -> String {
        let ack = format!(
            "Thank you for your message, {}! I'll get back to you soon.",
            self.name
        );
        *self = ContactForm::default();
        ack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_default_to_empty_strings() {
        let form = ContactForm::default();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_update_then_submit_round_trip() {
        let mut form = ContactForm::default();
        form.apply("name", "Alice".to_string());
        form.apply("email", "a@x.com".to_string());
        form.apply("message", "hi".to_string());

        let ack = form.submit();
        assert!(ack.contains("Alice"));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = ContactForm::default();
        form.apply("subject", "oops".to_string());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_fields_update_independently() {
        let mut form = ContactForm::default();
        form.apply("email", "a@x.com".to_string());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "a@x.com");
        assert_eq!(form.message, "");

        form.apply("email", "b@y.com".to_string());
        assert_eq!(form.email, "b@y.com");
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("name".parse::<FormField>().unwrap(), FormField::Name);
        assert_eq!("email".parse::<FormField>().unwrap(), FormField::Email);
        assert_eq!("message".parse::<FormField>().unwrap(), FormField::Message);
        let err = "Name".parse::<FormField>().unwrap_err();
        assert!(err.to_string().contains("Name"));
    }
}
