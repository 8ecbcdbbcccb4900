use super::*;

#[test]
fn success_and_client_statuses_carry_bodies() {
    assert!(status_has_response_body(200));
    assert!(!status_has_response_body(204));
    assert!(status_has_response_body(400));
    assert!(status_has_response_body(401));
    assert!(!status_has_response_body(302));
    assert!(!status_has_response_body(500));
}

#[test]
fn decodes_rejection_from_client_error_status() {
    let resp = decode_change_password_response(401, r#"{"success":false,"message":"Incorrect password"}"#).unwrap();
    assert_eq!(resp, ChangePasswordResponse { success: false, message: "Incorrect password".to_owned() });
}

#[test]
fn decodes_success_body() {
    let resp = decode_change_password_response(200, r#"{"success":true,"message":"Password changed"}"#).unwrap();
    assert!(resp.success);
}

#[test]
fn server_error_is_status_error() {
    assert_eq!(decode_change_password_response(503, "oops"), Err(ApiError::Status(503)));
}

#[test]
fn malformed_success_body_is_decode_error() {
    assert!(matches!(decode_change_password_response(200, "not json"), Err(ApiError::Decode(_))));
}

#[test]
fn malformed_client_error_body_keeps_status() {
    assert_eq!(decode_change_password_response(404, "<html>"), Err(ApiError::Status(404)));
}

#[test]
fn error_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "change password failed: 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn endpoint_path() {
    assert_eq!(CHANGE_PASSWORD_ENDPOINT, "/api/auth/change-password");
}

#[test]
fn no_content_is_accepted_change() {
    let resp = decode_change_password_response(204, "").unwrap();
    assert_eq!(resp, ChangePasswordResponse { success: true, message: String::new() });
}

#[test]
fn empty_success_body_is_accepted_change() {
    assert_eq!(
        decode_change_password_response(200, "  \n"),
        Ok(ChangePasswordResponse { success: true, message: String::new() })
    );
}

#[test]
fn empty_client_error_body_keeps_status() {
    assert_eq!(decode_change_password_response(401, ""), Err(ApiError::Status(401)));
}
