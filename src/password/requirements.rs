//! Standard password-strength rules and their evaluation.

#[cfg(test)]
#[path = "requirements_test.rs"]
mod requirements_test;

use std::sync::OnceLock;

use super::types::PasswordRequirement;

const RULES: &[(&str, &str)] = &[
    (r"^.{8,}$", "Password must be at least 8 characters long"),
    (r"[A-Z]", "Password must contain at least one uppercase letter"),
    (r"[a-z]", "Password must contain at least one lowercase letter"),
    (r"[0-9]", "Password must contain at least one number"),
    (r"[^A-Za-z0-9]", "Password must contain at least one special character"),
];

/// The rules shown on the change-password page, in display order.
///
/// # Panics
///
/// Panics if a built-in pattern in `RULES` fails to compile.
pub fn default_requirements() -> &'static [PasswordRequirement] {
    static VALUE: OnceLock<Vec<PasswordRequirement>> = OnceLock::new();
    VALUE.get_or_init(|| {
        RULES
            .iter()
            .map(|(pattern, message)| {
                PasswordRequirement::new(pattern, *message).expect("built-in password patterns compile")
            })
            .collect()
    })
}

/// Messages of every rule `candidate` fails, in rule order.
#[must_use]
pub fn unmet_requirements<'a>(requirements: &'a [PasswordRequirement], candidate: &str) -> Vec<&'a str> {
    requirements.iter().filter_map(|r| r.check(candidate)).collect()
}
