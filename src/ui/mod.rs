pub mod auth;
pub mod icon;
pub mod logo;
pub mod pages;

pub use auth::RegistrationForm;
pub use icon::{Icon, icons};
pub use logo::Logo;
