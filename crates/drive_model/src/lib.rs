//! Typed domain contracts and shared models for the CloudDrive web client.
//!
//! This crate is the API-first boundary between the dashboard runtime and the REST backend. It
//! exposes the file and user models, extension-based category classification, the pure
//! sort/filter/search pipeline, storage statistics, and the [`DriveApi`] service trait while the
//! concrete browser transport lives in `drive_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod auth;
pub mod files;
pub mod format;
pub mod session;

pub use api::error::{parse_error_message, ApiError};
pub use api::memory::MemoryDriveApi;
pub use api::service::{
    ids_query, DownloadedFile, DriveApi, DriveApiFuture, NoopDriveApi, UploadPayload,
};
pub use auth::{LoginForm, ProfileUpdate, RegisterForm, TokenResponse, User};
pub use files::category::{classify, extension_of, FileCategory};
pub use files::pipeline::{apply_view, SortKey, ViewQuery};
pub use files::stats::{CategoryStats, StorageStats, UsageLevel, DEFAULT_STORAGE_QUOTA_BYTES};
pub use files::types::{FileId, FileItem, FileKind, FilePatch};
pub use format::format_bytes;
pub use session::{
    clear_cookie_header, parse_cookie_value, token_cookie_header, AUTH_ROUTE, DASHBOARD_ROUTE,
    TOKEN_COOKIE,
};
