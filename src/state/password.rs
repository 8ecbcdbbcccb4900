//! Change-password form model, submit validation, and submit outcome.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use crate::net::api::ApiError;
use crate::password::{
    ChangePasswordPayload, ChangePasswordResponse, ChangeTempPasswordData, PasswordRequirement, unmet_requirements,
};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const CURRENT_PASSWORD_REQUIRED: &str = "Current password is required";
pub const NEW_PASSWORD_REQUIRED: &str = "New password is required";
pub const CONFIRM_REQUIRED: &str = "Please confirm your new password";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_UNCHANGED: &str = "New password must differ from the current password";

/// Values currently typed into the change-password form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub email: String,
    pub password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Every problem found in one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub missing: Vec<&'static str>,
    pub unmet: Vec<String>,
    pub confirm_mismatch: bool,
    pub unchanged: bool,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unmet.is_empty() && !self.confirm_mismatch && !self.unchanged
    }

    /// Display messages, missing fields first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let mut out: Vec<String> = self.missing.iter().map(|m| (*m).to_owned()).collect();
        out.extend(self.unmet.iter().cloned());
        if self.confirm_mismatch {
            out.push(CONFIRM_MISMATCH.to_owned());
        }
        if self.unchanged {
            out.push(PASSWORD_UNCHANGED.to_owned());
        }
        out
    }
}

impl ChangePasswordForm {
    /// Snapshot as the temporary-password submission shape. Email is trimmed.
    #[must_use]
    pub fn to_data(&self) -> ChangeTempPasswordData {
        ChangeTempPasswordData {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    /// Check the form and reduce it to the API payload.
    ///
    /// # Errors
    ///
    /// Returns all collected [`FormErrors`] when any check fails.
    pub fn validate(&self, requirements: &[PasswordRequirement]) -> Result<ChangePasswordPayload, FormErrors> {
        let data = self.to_data();
        let mut errors = FormErrors::default();

        for (value, message) in [
            (&data.email, EMAIL_REQUIRED),
            (&data.password, CURRENT_PASSWORD_REQUIRED),
            (&data.new_password, NEW_PASSWORD_REQUIRED),
            (&data.confirm_password, CONFIRM_REQUIRED),
        ] {
            if value.is_empty() {
                errors.missing.push(message);
            }
        }

        if !data.new_password.is_empty() {
            errors.unmet = unmet_requirements(requirements, &data.new_password)
                .into_iter()
                .map(str::to_owned)
                .collect();
            errors.unchanged = data.new_password == data.password;
            errors.confirm_mismatch = !data.confirm_password.is_empty() && data.confirm_password != data.new_password;
        }

        if errors.is_empty() { Ok(ChangePasswordPayload::from(data)) } else { Err(errors) }
    }
}

/// Progress of the change-password request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Password changed successfully.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Password change failed.";

impl SubmitState {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Map the API outcome to a displayable state. Server rejections and
    /// transport errors both become `Failed`; empty messages get a default.
    #[must_use]
    pub fn from_outcome(outcome: Result<ChangePasswordResponse, ApiError>) -> Self {
        match outcome.map(ChangePasswordResponse::into_result) {
            Ok(Ok(message)) => Self::Succeeded(or_default(message, DEFAULT_SUCCESS_MESSAGE)),
            Ok(Err(message)) => Self::Failed(or_default(message, DEFAULT_FAILURE_MESSAGE)),
            Err(e) => Self::Failed(format!("{DEFAULT_FAILURE_MESSAGE} {e}")),
        }
    }
}

fn or_default(message: String, default: &str) -> String {
    if message.trim().is_empty() { default.to_owned() } else { message }
}
