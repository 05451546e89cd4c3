//! Application pages module
//!
//! This module contains the page components for the application:
//! - Auth page (combined sign-in / sign-up)
//! - Not found page

mod auth;
mod not_found;

pub use auth::AuthPage;
pub use not_found::NotFoundPage;
