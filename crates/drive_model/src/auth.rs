//! User and authentication payloads exchanged with the backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Authenticated user profile (`GET /users/me`).
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Credentials posted to `POST /login`.
pub struct LoginForm {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Account details posted to `POST /register`.
pub struct RegisterForm {
    /// Login email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Plain-text password.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Bearer token returned by login and registration.
pub struct TokenResponse {
    /// Opaque token stored in the session cookie.
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Partial profile update sent to `PATCH /users/me`; absent fields are left untouched.
pub struct ProfileUpdate {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New login email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Builds an update from form input, dropping blank fields.
    pub fn from_inputs(full_name: &str, email: &str, password: &str) -> Self {
        fn non_blank(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            full_name: non_blank(full_name),
            email: non_blank(email),
            password: (!password.is_empty()).then(|| password.to_string()),
        }
    }

    /// Returns `true` when the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn register_form_uses_camel_case_full_name() {
        let form = RegisterForm {
            email: "a@b.c".to_string(),
            full_name: "Ada".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&form).expect("serialize"),
            json!({"email": "a@b.c", "fullName": "Ada", "password": "pw"})
        );
    }

    #[test]
    fn profile_update_omits_absent_fields() {
        let update = ProfileUpdate::from_inputs("  Grace ", "", "");
        assert_eq!(
            serde_json::to_value(&update).expect("serialize"),
            json!({"fullName": "Grace"})
        );
        assert!(ProfileUpdate::from_inputs(" ", "", "").is_empty());
    }

    #[test]
    fn user_reads_backend_payload() {
        let user: User = serde_json::from_value(json!({
            "id": "42",
            "email": "a@b.c",
            "fullName": "Ada Lovelace"
        }))
        .expect("deserialize");
        assert_eq!(user.full_name, "Ada Lovelace");
    }
}
