//! Password-change data types and client-side password rules.

pub mod requirements;
pub mod types;

pub use requirements::{default_requirements, unmet_requirements};
pub use types::{ChangePasswordPayload, ChangePasswordResponse, ChangeTempPasswordData, PasswordRequirement};
