//! Wire types for the auth API.

use drovery_core::AuthUser;

/// Request body for `POST /auth/login`.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for `POST /auth/signup`.
///
/// Deliberately has no confirm-password field; that check is local and the
/// confirmation must never reach the wire.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body shared by both auth endpoints.
///
/// Every field is optional: a success is recognized by the presence of
/// `accessToken`, a failure by its absence, with `message` as the error
/// text when the server provides one.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthResponseBody {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<AuthUser>,
    pub message: Option<String>,
}
