// Contact form: field validation and the simulated submission lifecycle
pub mod form;
pub mod validation;

pub use form::{ContactError, ContactForm, ContactSnapshot};
pub use validation::{validate, ContactValidator, FieldError, ValidationErrors};
