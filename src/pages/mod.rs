//! Routed pages.

pub mod change_password;
pub mod sections;
