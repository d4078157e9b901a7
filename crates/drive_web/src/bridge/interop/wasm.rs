use gloo_net::http::Request;
use gloo_timers::{callback::Timeout, future::TimeoutFuture};
use js_sys::{Array, Uint8Array};
use leptos::logging;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, FormData, HtmlAnchorElement, HtmlDocument, Url};

use drive_model::UploadPayload;

use super::*;
use crate::transport::{HttpMethod, RequestBody};

const REVOKE_DELAY_MS: u32 = 100;

fn js_error(context: &str, err: JsValue) -> String {
    format!("{context}: {err:?}")
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())
}

fn html_document() -> Result<HtmlDocument, String> {
    document()?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| "document is not an HTML document".to_string())
}

fn blob_from_bytes(bytes: &[u8], content_type: &str) -> Result<Blob, String> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|err| js_error("Blob construction failed", err))
}

fn upload_form(payload: &UploadPayload) -> Result<FormData, String> {
    let content_type = payload
        .content_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    let blob = blob_from_bytes(&payload.bytes, content_type)?;
    let form = FormData::new().map_err(|err| js_error("FormData unavailable", err))?;
    form.append_with_blob_and_filename("file", &blob, &payload.file_name)
        .map_err(|err| js_error("FormData append failed", err))?;
    Ok(form)
}

pub async fn send(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let HttpRequest {
        method,
        url,
        bearer,
        body,
    } = request;

    let mut builder = match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Patch => Request::patch(&url),
        HttpMethod::Delete => Request::delete(&url),
    };
    if let Some(token) = bearer.as_deref() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let response = match body {
        RequestBody::Empty => builder.send().await,
        RequestBody::Json(json) => {
            builder
                .header("Content-Type", "application/json")
                .body(json)
                .map_err(network)?
                .send()
                .await
        }
        RequestBody::Upload(payload) => {
            let form = upload_form(&payload).map_err(ApiError::Network)?;
            builder.body(form).map_err(network)?.send().await
        }
    }
    .map_err(network)?;

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response.binary().await.map_err(network)?;
    Ok(HttpResponse {
        status,
        content_type,
        body,
    })
}

pub fn document_cookie() -> Option<String> {
    html_document().ok()?.cookie().ok()
}

pub fn set_document_cookie(assignment: &str) -> Result<(), String> {
    html_document()?
        .set_cookie(assignment)
        .map_err(|err| js_error("cookie write failed", err))
}

pub fn navigate(path: &str) -> Result<(), String> {
    window()?
        .location()
        .set_href(path)
        .map_err(|err| js_error("navigation failed", err))
}

pub fn save_blob(bytes: &[u8], content_type: &str, file_name: &str) -> Result<(), String> {
    let document = document()?;
    let blob = blob_from_bytes(bytes, content_type)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|err| js_error("object URL creation failed", err))?;

    let anchor = document
        .create_element("a")
        .map_err(|err| js_error("anchor creation failed", err))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|err| js_error("anchor styling failed", err))?;

    let body = document
        .body()
        .ok_or_else(|| "document body unavailable".to_string())?;
    body.append_child(&anchor)
        .map_err(|err| js_error("anchor insertion failed", err))?;
    anchor.click();

    Timeout::new(REVOKE_DELAY_MS, move || {
        anchor.remove();
        if let Err(err) = Url::revoke_object_url(&url) {
            logging::warn!("{}", js_error("object URL revocation failed", err));
        }
    })
    .forget();
    Ok(())
}

pub async fn sleep_ms(ms: u32) {
    TimeoutFuture::new(ms).await;
}
