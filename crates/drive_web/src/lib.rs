//! Browser (`wasm32`) implementation of the [`drive_model::DriveApi`] contract.
//!
//! This crate owns everything that touches the browser: HTTP requests through `gloo-net`, the
//! `_token` session cookie, the 401 redirect, saving downloads through an object URL, and timers.
//! Non-wasm builds compile the same public API against an "unsupported" shim so the rest of the
//! workspace tests natively.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` holding the target split.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
mod bridge;
pub mod config;
pub mod download;
pub mod endpoints;
pub mod http;
pub mod session;
pub mod transport;

pub use adapters::{drive_api, host_strategy_name, DriveApiAdapter};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use download::{pause, save_download, BULK_DOWNLOAD_DELAY_MS};
pub use http::HttpDriveApi;
pub use session::{clear_token, current_token, redirect_to, store_token};
pub use transport::{
    BrowserTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody,
};
