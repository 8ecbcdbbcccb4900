//! Reusable UI components.

pub mod navbar;
pub mod refresh_button;
