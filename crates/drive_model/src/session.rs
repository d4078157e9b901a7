//! Auth-session constants and `document.cookie` string helpers.
//!
//! The browser adapter reads and writes the raw cookie string; the parsing and formatting rules
//! live here so they can be tested natively.

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "_token";
/// Route the client is sent to when the session is missing or rejected.
pub const AUTH_ROUTE: &str = "/dashboard/auth";
/// Landing route after a successful login or registration.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Extracts the value of cookie `name` from a `document.cookie` style string.
///
/// Empty values are treated as absent.
pub fn parse_cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Cookie assignment that stores `token` for the whole site.
pub fn token_cookie_header(token: &str) -> String {
    format!("{TOKEN_COOKIE}={token}; path=/")
}

/// Cookie assignment that expires the token cookie.
pub fn clear_cookie_header() -> String {
    format!("{TOKEN_COOKIE}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; max-age=0")
}
