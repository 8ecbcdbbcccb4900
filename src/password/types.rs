//! Change-password DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names serialize as camelCase to match the auth API. The payload is
//! always derived from the form data, never built field by field, so
//! `confirm_password` cannot leak onto the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Submission of the one-time (temporary) password change form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTempPasswordData {
    pub email: String,
    pub password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Body of `POST /api/auth/change-password`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    pub email: String,
    pub password: String,
    pub new_password: String,
}

impl From<ChangeTempPasswordData> for ChangePasswordPayload {
    fn from(data: ChangeTempPasswordData) -> Self {
        Self { email: data.email, password: data.password, new_password: data.new_password }
    }
}

impl From<&ChangeTempPasswordData> for ChangePasswordPayload {
    fn from(data: &ChangeTempPasswordData) -> Self {
        Self {
            email: data.email.clone(),
            password: data.password.clone(),
            new_password: data.new_password.clone(),
        }
    }
}

/// Result of a change-password call. `success == false` is an expected,
/// displayable outcome, not a transport error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ChangePasswordResponse {
    /// `Ok(message)` on success, `Err(message)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the server's message when `success` is false.
    pub fn into_result(self) -> Result<String, String> {
        if self.success { Ok(self.message) } else { Err(self.message) }
    }
}

/// A pattern a password must match, and the text shown when it does not.
#[derive(Clone, Debug)]
pub struct PasswordRequirement {
    pub regex: Regex,
    pub message: String,
}

impl PasswordRequirement {
    /// Compile `pattern` into a requirement.
    ///
    /// # Errors
    ///
    /// Returns the regex compile error for an invalid pattern.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self { regex: Regex::new(pattern)?, message: message.into() })
    }

    /// `None` when `candidate` satisfies the rule, otherwise the failure message.
    #[must_use]
    pub fn check(&self, candidate: &str) -> Option<&str> {
        if self.regex.is_match(candidate) { None } else { Some(&self.message) }
    }
}
