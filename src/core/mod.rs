//! Core form logic for the Bazaari auth screen.
//!
//! Rendering-independent: this module owns the field state, the cascading
//! region → locality rule, and the submission payload.

pub mod form;
pub mod locations;
#[cfg(test)]
mod tests;

pub use form::{AccountType, FormMode, FormState, Submission};
pub use locations::{INDIA_REGIONS, Region, localities_for};
