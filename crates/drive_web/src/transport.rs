//! Request/response values and the transport seam used by [`HttpDriveApi`](crate::HttpDriveApi).

use drive_model::{ApiError, DriveApiFuture, UploadPayload, AUTH_ROUTE};
use leptos::logging;
use serde::{de::DeserializeOwned, Serialize};

use crate::{bridge, session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTTP verbs the backend uses.
pub enum HttpMethod {
    /// `GET`.
    Get,
    /// `POST`.
    Post,
    /// `PATCH`.
    Patch,
    /// `DELETE`.
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request payload.
pub enum RequestBody {
    /// No body.
    Empty,
    /// Serialized JSON document.
    Json(String),
    /// Multipart form with a single `file` field.
    Upload(UploadPayload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully resolved request handed to an [`HttpTransport`].
pub struct HttpRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    /// Payload.
    pub body: RequestBody,
}

impl HttpRequest {
    /// Creates a body-less request.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    /// Sets the bearer token.
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    /// Serializes `value` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when `value` cannot be serialized.
    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(value).map_err(|err| ApiError::Decode(err.to_string()))?;
        self.body = RequestBody::Json(json);
        Ok(self)
    }

    /// Attaches a multipart upload.
    pub fn with_upload(mut self, payload: UploadPayload) -> Self {
        self.body = RequestBody::Upload(payload);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw response as seen by the transport.
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header.
    pub content_type: Option<String>,
    /// Raw body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as (lossy) UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body decoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Turns a non-2xx response into its [`ApiError`].
    ///
    /// # Errors
    ///
    /// Returns the mapped error for any non-success status.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &self.text()))
        }
    }
}

/// Sends requests and exposes the session the requests are authorized with.
pub trait HttpTransport {
    /// Performs one request; non-2xx statuses are returned as responses, not errors.
    fn send<'a>(&'a self, request: HttpRequest) -> DriveApiFuture<'a, Result<HttpResponse, ApiError>>;

    /// Current bearer token.
    fn token(&self) -> Option<String>;

    /// Called once the backend rejected the token.
    fn session_expired(&self);
}

#[derive(Debug, Clone, Copy, Default)]
/// Transport backed by `gloo-net` and the `_token` cookie.
pub struct BrowserTransport;

impl HttpTransport for BrowserTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> DriveApiFuture<'a, Result<HttpResponse, ApiError>> {
        Box::pin(bridge::send(request))
    }

    fn token(&self) -> Option<String> {
        session::current_token()
    }

    fn session_expired(&self) {
        if let Err(err) = session::clear_token() {
            logging::warn!("failed to clear session cookie: {err}");
        }
        if let Err(err) = session::redirect_to(AUTH_ROUTE) {
            logging::warn!("failed to redirect to {AUTH_ROUTE}: {err}");
        }
    }
}
