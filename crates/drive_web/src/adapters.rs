//! Compile-time selection of the [`DriveApi`] backend for runtime wiring.

use drive_model::{
    ApiError, DownloadedFile, DriveApi, DriveApiFuture, FileId, FileItem, FileKind, LoginForm,
    NoopDriveApi, ProfileUpdate, RegisterForm, TokenResponse, UploadPayload, User,
};

use crate::HttpDriveApi;

/// Adapter enum that erases the concrete backend behind [`DriveApi`].
#[derive(Debug, Clone)]
pub enum DriveApiAdapter {
    /// REST client running in the browser.
    Browser(HttpDriveApi),
    /// Backend-less fallback for native builds.
    Offline(NoopDriveApi),
}

/// Returns the backend for the active build target.
pub fn drive_api() -> DriveApiAdapter {
    #[cfg(target_arch = "wasm32")]
    {
        DriveApiAdapter::Browser(HttpDriveApi::browser(crate::ApiConfig::from_env()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        DriveApiAdapter::Offline(NoopDriveApi)
    }
}

/// Stable token naming the selected backend.
pub fn host_strategy_name() -> &'static str {
    match drive_api() {
        DriveApiAdapter::Browser(_) => "browser",
        DriveApiAdapter::Offline(_) => "offline",
    }
}

impl DriveApi for DriveApiAdapter {
    fn login<'a>(
        &'a self,
        form: &'a LoginForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        match self {
            Self::Browser(api) => api.login(form),
            Self::Offline(api) => api.login(form),
        }
    }

    fn register<'a>(
        &'a self,
        form: &'a RegisterForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        match self {
            Self::Browser(api) => api.register(form),
            Self::Offline(api) => api.register(form),
        }
    }

    fn me<'a>(&'a self) -> DriveApiFuture<'a, Result<User, ApiError>> {
        match self {
            Self::Browser(api) => api.me(),
            Self::Offline(api) => api.me(),
        }
    }

    fn update_profile<'a>(
        &'a self,
        update: &'a ProfileUpdate,
    ) -> DriveApiFuture<'a, Result<User, ApiError>> {
        match self {
            Self::Browser(api) => api.update_profile(update),
            Self::Offline(api) => api.update_profile(update),
        }
    }

    fn list_files<'a>(
        &'a self,
        kind: FileKind,
    ) -> DriveApiFuture<'a, Result<Vec<FileItem>, ApiError>> {
        match self {
            Self::Browser(api) => api.list_files(kind),
            Self::Offline(api) => api.list_files(kind),
        }
    }

    fn trash<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        match self {
            Self::Browser(api) => api.trash(ids),
            Self::Offline(api) => api.trash(ids),
        }
    }

    fn restore<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        match self {
            Self::Browser(api) => api.restore(ids),
            Self::Offline(api) => api.restore(ids),
        }
    }

    fn delete_permanently<'a>(
        &'a self,
        ids: &'a [FileId],
    ) -> DriveApiFuture<'a, Result<(), ApiError>> {
        match self {
            Self::Browser(api) => api.delete_permanently(ids),
            Self::Offline(api) => api.delete_permanently(ids),
        }
    }

    fn toggle_favorite<'a>(
        &'a self,
        id: FileId,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        match self {
            Self::Browser(api) => api.toggle_favorite(id),
            Self::Offline(api) => api.toggle_favorite(id),
        }
    }

    fn upload<'a>(
        &'a self,
        payload: &'a UploadPayload,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        match self {
            Self::Browser(api) => api.upload(payload),
            Self::Offline(api) => api.upload(payload),
        }
    }

    fn download<'a>(
        &'a self,
        filename: &'a str,
    ) -> DriveApiFuture<'a, Result<DownloadedFile, ApiError>> {
        match self {
            Self::Browser(api) => api.download(filename),
            Self::Offline(api) => api.download(filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_builds_select_the_offline_backend() {
        assert_eq!(host_strategy_name(), "offline");
        assert_eq!(block_on(drive_api().list_files(FileKind::All)), Ok(Vec::new()));
    }
}
