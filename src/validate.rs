//! Form field validation
//!
//! Every check runs on every submit so that all invalid fields can be
//! annotated at once.

use serde::{Deserialize, Serialize};

/// A form field that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackField {
    Name,
    Email,
    Message,
}

impl FeedbackField {
    /// All fields, in form order
    pub const ALL: [FeedbackField; 3] = [
        FeedbackField::Name,
        FeedbackField::Email,
        FeedbackField::Message,
    ];

    /// DOM id of the input element
    pub fn element_id(&self) -> &'static str {
        match self {
            FeedbackField::Name => "name",
            FeedbackField::Email => "email",
            FeedbackField::Message => "message",
        }
    }

    /// DOM id of the inline error slot (`<fieldId>Error`)
    pub fn error_slot_id(&self) -> &'static str {
        match self {
            FeedbackField::Name => "nameError",
            FeedbackField::Email => "emailError",
            FeedbackField::Message => "messageError",
        }
    }
}

/// How strictly the email field is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EmailRule {
    /// Must contain `@`
    AtOnly,
    /// Must contain both `@` and `.`
    #[default]
    AtAndDot,
}

impl EmailRule {
    pub fn accepts(&self, email: &str) -> bool {
        match self {
            EmailRule::AtOnly => email.contains('@'),
            EmailRule::AtAndDot => email.contains('@') && email.contains('.'),
        }
    }
}

/// A single field-scoped validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FeedbackField,
    pub message: String,
}

impl FieldError {
    fn new(field: FeedbackField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate already-trimmed form values.
///
/// Returns one error per failing field, in form order. An empty vector means
/// the input is valid.
pub fn validate(name: &str, email: &str, message: &str, rule: EmailRule) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(FieldError::new(FeedbackField::Name, "Name is required"));
    }

    if email.is_empty() {
        errors.push(FieldError::new(FeedbackField::Email, "Email is required"));
    } else if !rule.accepts(email) {
        errors.push(FieldError::new(
            FeedbackField::Email,
            "Please enter a valid email address",
        ));
    }

    if message.is_empty() {
        errors.push(FieldError::new(FeedbackField::Message, "Message is required"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<FeedbackField> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate("Ada", "ada@example.com", "Great!", EmailRule::AtAndDot).is_empty());
    }

    #[test]
    fn test_missing_name_only() {
        let errors = validate("", "a@b.com", "hi", EmailRule::default());
        assert_eq!(fields(&errors), vec![FeedbackField::Name]);
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn test_email_without_at_sign() {
        let errors = validate("A", "noatsign", "hi", EmailRule::default());
        assert_eq!(fields(&errors), vec![FeedbackField::Email]);
        assert_eq!(errors[0].message, "Please enter a valid email address");
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let errors = validate("", "", "", EmailRule::default());
        assert_eq!(
            fields(&errors),
            vec![FeedbackField::Name, FeedbackField::Email, FeedbackField::Message]
        );
        assert_eq!(errors[1].message, "Email is required");
        assert_eq!(errors[2].message, "Message is required");
    }

    #[test]
    fn test_email_rules_differ_on_missing_dot() {
        assert!(validate("A", "a@localhost", "hi", EmailRule::AtOnly).is_empty());
        let errors = validate("A", "a@localhost", "hi", EmailRule::AtAndDot);
        assert_eq!(fields(&errors), vec![FeedbackField::Email]);
    }

    #[test]
    fn test_error_slot_ids() {
        for field in FeedbackField::ALL {
            assert_eq!(
                field.error_slot_id(),
                format!("{}Error", field.element_id())
            );
        }
    }
}
