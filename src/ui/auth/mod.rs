//! Authentication UI module
//!
//! The combined sign-in / sign-up form shown on the auth page.

mod registration_form;

pub use registration_form::RegistrationForm;
