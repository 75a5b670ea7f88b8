// Contact form state machine: Idle -> Submitting -> Submitted -> Idle
use serde::Serialize;
use shared::models::{ContactField, ContactFields, SubmissionStatus};
use thiserror::Error;

use super::validation::{ContactValidator, ValidationErrors};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Form has invalid fields: {0}")]
    Invalid(ValidationErrors),

    #[error("Form is read-only while a submission is in progress")]
    FormLocked,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Submission was cancelled before it was sent")]
    Cancelled,

    #[error("Cannot move the form from {from:?} to {to:?}")]
    InvalidTransition { from: SubmissionStatus, to: SubmissionStatus },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactSnapshot {
    pub fields: ContactFields,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    validator: ContactValidator,
    state: ContactSnapshot,
}

impl ContactForm {
    pub fn new(validator: ContactValidator) -> Self {
        Self {
            validator,
            state: ContactSnapshot::default(),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.state.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status
    }

    pub fn snapshot(&self) -> &ContactSnapshot {
        &self.state
    }

    /// Updates one field and drops that field's error. Other errors stay.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) -> Result<(), ContactError> {
        if self.state.status.is_locked() {
            return Err(ContactError::FormLocked);
        }
        self.state.fields.set(field, value);
        self.state.errors.clear(field);
        Ok(())
    }

    /// Validates and, when everything passes, moves to `Submitting`.
    /// On failure the errors are kept on the form and the status does not change.
    pub fn begin_submit(&mut self) -> Result<ContactFields, ContactError> {
        if self.state.status.is_locked() {
            return Err(ContactError::AlreadySubmitting);
        }
        let errors = self.validator.validate(&self.state.fields);
        self.state.errors = errors.clone();
        if !errors.is_empty() {
            return Err(ContactError::Invalid(errors));
        }
        self.state.status = SubmissionStatus::Submitting;
        Ok(self.state.fields.clone())
    }

    pub fn mark_submitted(&mut self) -> Result<(), ContactError> {
        self.transition(SubmissionStatus::Submitting, SubmissionStatus::Submitted)
    }

    /// Clears every field and reopens the form.
    pub fn reset(&mut self) -> Result<(), ContactError> {
        self.transition(SubmissionStatus::Submitted, SubmissionStatus::Idle)?;
        self.state.fields = ContactFields::default();
        self.state.errors = ValidationErrors::default();
        Ok(())
    }

    fn transition(&mut self, expected: SubmissionStatus, to: SubmissionStatus) -> Result<(), ContactError> {
        if self.state.status != expected {
            return Err(ContactError::InvalidTransition {
                from: self.state.status,
                to,
            });
        }
        self.state.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::FieldError;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(ContactField::Name, "Ada").unwrap();
        form.edit(ContactField::Email, "ada@example.com").unwrap();
        form.edit(ContactField::Subject, "Hello").unwrap();
        form.edit(ContactField::Message, "A message long enough").unwrap();
        form
    }

    #[test]
    fn test_invalid_submit_keeps_idle() {
        let mut form = ContactForm::default();
        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, ContactError::Invalid(ref errors) if errors.len() == 4));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = ContactForm::default();
        let _ = form.begin_submit();
        form.edit(ContactField::Email, "x").unwrap();
        assert_eq!(form.errors().get(ContactField::Email), None);
        assert_eq!(form.errors().get(ContactField::Name), Some(FieldError::Required));
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut form = filled_form();
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent.name, "Ada");
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        form.mark_submitted().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitted);

        form.reset().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.fields().is_empty());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_locked_while_in_flight() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.edit(ContactField::Name, "Bob"), Err(ContactError::FormLocked));
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));

        form.mark_submitted().unwrap();
        assert_eq!(form.edit(ContactField::Name, "Bob"), Err(ContactError::FormLocked));
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_out_of_order_transitions() {
        let mut form = filled_form();
        assert_eq!(
            form.mark_submitted(),
            Err(ContactError::InvalidTransition {
                from: SubmissionStatus::Idle,
                to: SubmissionStatus::Submitted
            })
        );
        assert!(form.reset().is_err());
        assert_eq!(form.fields().name, "Ada");
    }
}
