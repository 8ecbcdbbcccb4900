//! REST API helpers for communicating with the membership server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A rejected password change arrives as a `ChangePasswordResponse` with
//! `success == false` and is returned as `Ok`. `ApiError` is reserved for
//! transport failures, unexpected statuses, and undecodable bodies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::password::{ChangePasswordPayload, ChangePasswordResponse};

pub const CHANGE_PASSWORD_ENDPOINT: &str = "/api/auth/change-password";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("change password failed: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

pub const NO_CONTENT: u16 = 204;

/// Client and success statuses may carry a `ChangePasswordResponse` body;
/// 204 never does.
#[cfg(any(test, feature = "hydrate"))]
fn status_has_response_body(status: u16) -> bool {
    status != NO_CONTENT && ((200..300).contains(&status) || (400..500).contains(&status))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_change_password_response(status: u16, body: &str) -> Result<ChangePasswordResponse, ApiError> {
    let success = (200..300).contains(&status);
    // A bodiless 2xx is an accepted change with no server message.
    if success && (status == NO_CONTENT || body.trim().is_empty()) {
        return Ok(ChangePasswordResponse { success: true, message: String::new() });
    }
    if !status_has_response_body(status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| {
        if success { ApiError::Decode(e.to_string()) } else { ApiError::Status(status) }
    })
}

/// Change the password via `POST /api/auth/change-password`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request cannot be sent, the server answers
/// with a 5xx/3xx status, or a 2xx body is not a `ChangePasswordResponse`.
pub async fn change_password(payload: &ChangePasswordPayload) -> Result<ChangePasswordResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHANGE_PASSWORD_ENDPOINT)
            .json(payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let decoded = decode_change_password_response(status, &body);
        if let Err(e) = &decoded {
            log::warn!("change password request failed: {e}");
        }
        decoded
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}
