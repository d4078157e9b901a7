use super::*;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn send(_request: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::Unsupported("browser HTTP transport"))
}

pub fn document_cookie() -> Option<String> {
    None
}

pub fn set_document_cookie(_assignment: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn navigate(_path: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn save_blob(_bytes: &[u8], _content_type: &str, _file_name: &str) -> Result<(), String> {
    Err(unsupported())
}

pub async fn sleep_ms(_ms: u32) {}
