// Contact form validation rules
use regex::Regex;
use serde::Serialize;
use shared::models::{ContactField, ContactFields};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

pub const DEFAULT_MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort { min: usize },
}

impl FieldError {
    pub fn message(&self, field: ContactField) -> String {
        match self {
            FieldError::Required => format!("{} is required", field.label()),
            FieldError::InvalidFormat => format!("Please enter a valid {}", field.label().to_lowercase()),
            FieldError::TooShort { min } => format!("{} must be at least {} characters", field.label(), min),
        }
    }
}

/// Per-field errors. Empty means the form can be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<ContactField, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// User-facing message for `field`, if it failed.
    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(|err| err.message(field))
    }

    pub fn clear(&mut self, field: ContactField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    fn insert(&mut self, field: ContactField, error: FieldError) {
        self.0.insert(field, error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(|(field, err)| err.message(field)).collect();
        f.write_str(&messages.join("; "))
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactValidator {
    min_message_len: usize,
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_MESSAGE_LEN)
    }
}

impl ContactValidator {
    pub fn new(min_message_len: usize) -> Self {
        Self { min_message_len }
    }

    /// Checks every field and collects all failures.
    pub fn validate(&self, fields: &ContactFields) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if is_blank(&fields.name) {
            errors.insert(ContactField::Name, FieldError::Required);
        }

        if is_blank(&fields.email) {
            errors.insert(ContactField::Email, FieldError::Required);
        } else if !is_valid_email(&fields.email) {
            errors.insert(ContactField::Email, FieldError::InvalidFormat);
        }

        if is_blank(&fields.subject) {
            errors.insert(ContactField::Subject, FieldError::Required);
        }

        let message = fields.message.trim();
        if message.is_empty() {
            errors.insert(ContactField::Message, FieldError::Required);
        } else if message.chars().count() < self.min_message_len {
            errors.insert(ContactField::Message, FieldError::TooShort { min: self.min_message_len });
        }

        errors
    }
}

/// Validates with the default message length.
pub fn validate(fields: &ContactFields) -> ValidationErrors {
    ContactValidator::default().validate(fields)
}
