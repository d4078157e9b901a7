//! `_token` cookie session and top-level navigation.

use drive_model::{clear_cookie_header, parse_cookie_value, token_cookie_header, TOKEN_COOKIE};

use crate::bridge;

/// Bearer token stored in the session cookie.
pub fn current_token() -> Option<String> {
    let cookies = bridge::document_cookie()?;
    parse_cookie_value(&cookies, TOKEN_COOKIE)
}

/// Stores `token` in the session cookie for the whole site.
///
/// # Errors
///
/// Returns an error when the cookie cannot be written.
pub fn store_token(token: &str) -> Result<(), String> {
    bridge::set_document_cookie(&token_cookie_header(token))
}

/// Expires the session cookie.
///
/// # Errors
///
/// Returns an error when the cookie cannot be written.
pub fn clear_token() -> Result<(), String> {
    bridge::set_document_cookie(&clear_cookie_header())
}

/// Performs a full-page navigation to `path`.
///
/// # Errors
///
/// Returns an error when `window.location` is unavailable.
pub fn redirect_to(path: &str) -> Result<(), String> {
    bridge::navigate(path)
}
