//! Target split for the browser bridge.

use drive_model::ApiError;

use crate::transport::{HttpRequest, HttpResponse};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn send(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    imp::send(request).await
}

pub fn document_cookie() -> Option<String> {
    imp::document_cookie()
}

pub fn set_document_cookie(assignment: &str) -> Result<(), String> {
    imp::set_document_cookie(assignment)
}

pub fn navigate(path: &str) -> Result<(), String> {
    imp::navigate(path)
}

pub fn save_blob(bytes: &[u8], content_type: &str, file_name: &str) -> Result<(), String> {
    imp::save_blob(bytes, content_type, file_name)
}

pub async fn sleep_ms(ms: u32) {
    imp::sleep_ms(ms).await
}
