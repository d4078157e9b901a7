//! Browser capability bridge for `drive_web` adapters.
//!
//! The public functions here are the only way the crate reaches browser APIs. They route to
//! `interop`, which selects the wasm implementation or the native shim.

mod interop;

use drive_model::ApiError;

use crate::transport::{HttpRequest, HttpResponse};

pub(crate) async fn send(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    interop::send(request).await
}

pub(crate) fn document_cookie() -> Option<String> {
    interop::document_cookie()
}

pub(crate) fn set_document_cookie(assignment: &str) -> Result<(), String> {
    interop::set_document_cookie(assignment)
}

pub(crate) fn navigate(path: &str) -> Result<(), String> {
    interop::navigate(path)
}

pub(crate) fn save_blob(bytes: &[u8], content_type: &str, file_name: &str) -> Result<(), String> {
    interop::save_blob(bytes, content_type, file_name)
}

pub(crate) async fn sleep_ms(ms: u32) {
    interop::sleep_ms(ms).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::transport::HttpMethod;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_bridge_reports_unsupported_browser_apis() {
        let request = HttpRequest::new(HttpMethod::Get, "http://localhost:3001/files?type=all");
        assert!(matches!(
            block_on(send(request)),
            Err(ApiError::Unsupported(_))
        ));
        assert_eq!(document_cookie(), None);
        assert!(set_document_cookie("_token=x; path=/").is_err());
        assert!(navigate("/dashboard/auth").is_err());
        assert!(save_blob(&[1, 2], "text/plain", "a.txt").is_err());
        block_on(sleep_ms(100));
    }
}
