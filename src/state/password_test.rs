use super::*;
use crate::password::default_requirements;

fn filled() -> ChangePasswordForm {
    ChangePasswordForm {
        email: "  a@b.com ".to_owned(),
        password: "Old-pass1".to_owned(),
        new_password: "New-pass1".to_owned(),
        confirm_password: "New-pass1".to_owned(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_form_reduces_to_payload() {
    let payload = filled().validate(default_requirements()).unwrap();
    assert_eq!(
        payload,
        ChangePasswordPayload {
            email: "a@b.com".to_owned(),
            password: "Old-pass1".to_owned(),
            new_password: "New-pass1".to_owned(),
        }
    );
}

#[test]
fn empty_form_reports_every_missing_field() {
    let errors = ChangePasswordForm::default().validate(default_requirements()).unwrap_err();
    assert_eq!(errors.missing, vec![EMAIL_REQUIRED, CURRENT_PASSWORD_REQUIRED, NEW_PASSWORD_REQUIRED, CONFIRM_REQUIRED]);
    assert!(errors.unmet.is_empty());
    assert!(!errors.confirm_mismatch);
}

#[test]
fn whitespace_email_counts_as_missing() {
    let form = ChangePasswordForm { email: "   ".to_owned(), ..filled() };
    let errors = form.validate(default_requirements()).unwrap_err();
    assert_eq!(errors.missing, vec![EMAIL_REQUIRED]);
}

#[test]
fn weak_new_password_collects_all_unmet_rules() {
    let form = ChangePasswordForm { new_password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..filled() };
    let errors = form.validate(default_requirements()).unwrap_err();
    assert_eq!(errors.unmet.len(), 4);
    assert!(errors.missing.is_empty());
}

#[test]
fn mismatched_confirmation_is_reported() {
    let form = ChangePasswordForm { confirm_password: "New-pass2".to_owned(), ..filled() };
    let errors = form.validate(default_requirements()).unwrap_err();
    assert!(errors.confirm_mismatch);
    assert_eq!(errors.messages(), vec![CONFIRM_MISMATCH.to_owned()]);
}

#[test]
fn reusing_current_password_is_reported() {
    let form = ChangePasswordForm {
        new_password: "Old-pass1".to_owned(),
        confirm_password: "Old-pass1".to_owned(),
        ..filled()
    };
    let errors = form.validate(default_requirements()).unwrap_err();
    assert!(errors.unchanged);
    assert_eq!(errors.messages(), vec![PASSWORD_UNCHANGED.to_owned()]);
}

#[test]
fn messages_list_missing_fields_first() {
    let form = ChangePasswordForm { email: String::new(), new_password: "abc".to_owned(), ..filled() };
    let messages = form.validate(default_requirements()).unwrap_err().messages();
    assert_eq!(messages[0], EMAIL_REQUIRED);
    assert_eq!(messages.last().map(String::as_str), Some(CONFIRM_MISMATCH));
}

// =============================================================
// SubmitState
// =============================================================

#[test]
fn submit_state_defaults_to_idle() {
    assert_eq!(SubmitState::default(), SubmitState::Idle);
    assert!(SubmitState::Submitting.is_busy());
    assert!(!SubmitState::Idle.is_busy());
}

#[test]
fn rejection_becomes_failed_with_server_message() {
    let outcome = Ok(ChangePasswordResponse { success: false, message: "Incorrect password".to_owned() });
    assert_eq!(SubmitState::from_outcome(outcome), SubmitState::Failed("Incorrect password".to_owned()));
}

#[test]
fn success_without_message_uses_default() {
    let outcome = Ok(ChangePasswordResponse { success: true, message: String::new() });
    assert_eq!(SubmitState::from_outcome(outcome), SubmitState::Succeeded(DEFAULT_SUCCESS_MESSAGE.to_owned()));
}

#[test]
fn transport_error_becomes_failed() {
    let state = SubmitState::from_outcome(Err(ApiError::Status(500)));
    assert_eq!(state, SubmitState::Failed("Password change failed. change password failed: 500".to_owned()));
}

#[test]
fn bodiless_success_shows_default_message() {
    let outcome = crate::net::api::decode_change_password_response(204, "");
    assert_eq!(SubmitState::from_outcome(outcome), SubmitState::Succeeded(DEFAULT_SUCCESS_MESSAGE.to_owned()));
}
