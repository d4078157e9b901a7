//! CloudDrive backend service contract and no-op adapter.

use std::{future::Future, pin::Pin};

use super::error::ApiError;
use crate::auth::{LoginForm, ProfileUpdate, RegisterForm, TokenResponse, User};
use crate::files::types::{FileId, FileItem, FileKind};

/// Object-safe boxed future used by [`DriveApi`] async methods.
pub type DriveApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// File contents picked by the user for upload.
pub struct UploadPayload {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the browser.
    pub content_type: Option<String>,
    /// Raw bytes.
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Body of a successful download.
pub struct DownloadedFile {
    /// Raw bytes.
    pub bytes: Vec<u8>,
    /// `Content-Type` of the response, when present.
    pub content_type: Option<String>,
}

impl DownloadedFile {
    /// Content type to stamp on the saved blob.
    pub fn content_type_or_default(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or("application/octet-stream")
    }
}

/// Formats ids for the `ids=` query parameter (`1,2,3`).
pub fn ids_query(ids: &[FileId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Backend operations used by the dashboard.
pub trait DriveApi {
    /// Exchanges credentials for a session token.
    fn login<'a>(&'a self, form: &'a LoginForm)
        -> DriveApiFuture<'a, Result<TokenResponse, ApiError>>;

    /// Creates an account and returns its session token.
    fn register<'a>(
        &'a self,
        form: &'a RegisterForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>>;

    /// Loads the profile of the current session.
    fn me<'a>(&'a self) -> DriveApiFuture<'a, Result<User, ApiError>>;

    /// Applies a partial profile update and returns the stored profile.
    fn update_profile<'a>(
        &'a self,
        update: &'a ProfileUpdate,
    ) -> DriveApiFuture<'a, Result<User, ApiError>>;

    /// Lists files of one server-side kind.
    fn list_files<'a>(&'a self, kind: FileKind)
        -> DriveApiFuture<'a, Result<Vec<FileItem>, ApiError>>;

    /// Moves files to the trash.
    fn trash<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>>;

    /// Restores files from the trash.
    fn restore<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>>;

    /// Deletes files for good.
    fn delete_permanently<'a>(
        &'a self,
        ids: &'a [FileId],
    ) -> DriveApiFuture<'a, Result<(), ApiError>>;

    /// Flips the favorite flag server-side and returns the updated file.
    fn toggle_favorite<'a>(&'a self, id: FileId)
        -> DriveApiFuture<'a, Result<FileItem, ApiError>>;

    /// Uploads one file.
    fn upload<'a>(
        &'a self,
        payload: &'a UploadPayload,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>>;

    /// Fetches the contents of a stored file.
    fn download<'a>(
        &'a self,
        filename: &'a str,
    ) -> DriveApiFuture<'a, Result<DownloadedFile, ApiError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Backend-less adapter for unsupported targets: lists are empty and everything else fails.
pub struct NoopDriveApi;

impl DriveApi for NoopDriveApi {
    fn login<'a>(
        &'a self,
        _form: &'a LoginForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("login")) })
    }

    fn register<'a>(
        &'a self,
        _form: &'a RegisterForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("register")) })
    }

    fn me<'a>(&'a self) -> DriveApiFuture<'a, Result<User, ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("profile lookup")) })
    }

    fn update_profile<'a>(
        &'a self,
        _update: &'a ProfileUpdate,
    ) -> DriveApiFuture<'a, Result<User, ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("profile update")) })
    }

    fn list_files<'a>(
        &'a self,
        _kind: FileKind,
    ) -> DriveApiFuture<'a, Result<Vec<FileItem>, ApiError>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn trash<'a>(&'a self, _ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("trash")) })
    }

    fn restore<'a>(&'a self, _ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("restore")) })
    }

    fn delete_permanently<'a>(
        &'a self,
        _ids: &'a [FileId],
    ) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("permanent delete")) })
    }

    fn toggle_favorite<'a>(
        &'a self,
        _id: FileId,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("favorites")) })
    }

    fn upload<'a>(
        &'a self,
        _payload: &'a UploadPayload,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("upload")) })
    }

    fn download<'a>(
        &'a self,
        _filename: &'a str,
    ) -> DriveApiFuture<'a, Result<DownloadedFile, ApiError>> {
        Box::pin(async { Err(ApiError::Unsupported("download")) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn ids_query_is_comma_separated() {
        assert_eq!(ids_query(&[FileId(1), FileId(22), FileId(3)]), "1,22,3");
        assert_eq!(ids_query(&[]), "");
    }

    #[test]
    fn noop_adapter_lists_nothing_and_rejects_mutations() {
        let api = NoopDriveApi;
        assert_eq!(block_on(api.list_files(FileKind::All)), Ok(Vec::new()));
        assert_eq!(
            block_on(api.trash(&[FileId(1)])),
            Err(ApiError::Unsupported("trash"))
        );
    }

    #[test]
    fn download_content_type_defaults_to_octet_stream() {
        let file = DownloadedFile {
            bytes: vec![1],
            content_type: Some(String::new()),
        };
        assert_eq!(file.content_type_or_default(), "application/octet-stream");
    }
}
