//! In-memory [`DriveApi`] adapter with a call log and injectable failures.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::error::ApiError;
use super::service::{ids_query, DownloadedFile, DriveApi, DriveApiFuture, UploadPayload};
use crate::auth::{LoginForm, ProfileUpdate, RegisterForm, TokenResponse, User};
use crate::files::types::{FileId, FileItem, FileKind};

/// Deletion timestamp stamped on files trashed through the memory adapter.
pub const MEMORY_DELETED_AT: &str = "1970-01-01T00:00:00Z";
const MEMORY_TOKEN: &str = "memory-token";

#[derive(Debug, Default)]
struct MemoryDriveState {
    files: Vec<FileItem>,
    user: Option<User>,
    password: String,
    downloads: HashMap<String, DownloadedFile>,
    failures: HashMap<&'static str, ApiError>,
    calls: Vec<String>,
    next_id: u64,
}

impl MemoryDriveState {
    fn enter(&mut self, operation: &'static str, detail: String) -> Result<(), ApiError> {
        self.calls.push(if detail.is_empty() {
            operation.to_string()
        } else {
            format!("{operation}:{detail}")
        });
        match self.failures.get(operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn file_mut(&mut self, id: FileId) -> Result<&mut FileItem, ApiError> {
        self.files
            .iter_mut()
            .find(|file| file.id == id)
            .ok_or(ApiError::NotFound)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory backend keeping files, one account, and download bodies.
///
/// Every call is recorded as `operation` or `operation:detail` (ids as `1,2`), and an operation
/// can be made to fail with [`MemoryDriveApi::fail`].
pub struct MemoryDriveApi {
    inner: Rc<RefCell<MemoryDriveState>>,
}

impl MemoryDriveApi {
    /// Creates a backend seeded with `files`.
    pub fn with_files(files: Vec<FileItem>) -> Self {
        let next_id = files.iter().map(|file| file.id.0).max().unwrap_or(0) + 1;
        let api = Self::default();
        {
            let mut state = api.inner.borrow_mut();
            state.files = files;
            state.next_id = next_id;
        }
        api
    }

    /// Registers the account `login` accepts.
    pub fn set_account(&self, user: User, password: impl Into<String>) {
        let mut state = self.inner.borrow_mut();
        state.user = Some(user);
        state.password = password.into();
    }

    /// Stores the body returned for `filename`.
    pub fn put_download(&self, filename: impl Into<String>, file: DownloadedFile) {
        self.inner
            .borrow_mut()
            .downloads
            .insert(filename.into(), file);
    }

    /// Makes every later call of `operation` fail with `err`.
    ///
    /// Operation names match the [`DriveApi`] method names.
    pub fn fail(&self, operation: &'static str, err: ApiError) {
        self.inner.borrow_mut().failures.insert(operation, err);
    }

    /// Clears an injected failure.
    pub fn recover(&self, operation: &'static str) {
        self.inner.borrow_mut().failures.remove(operation);
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    /// Snapshot of the stored files.
    pub fn files(&self) -> Vec<FileItem> {
        self.inner.borrow().files.clone()
    }
}

impl DriveApi for MemoryDriveApi {
    fn login<'a>(
        &'a self,
        form: &'a LoginForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("login", form.email.clone())?;
            let matches = state
                .user
                .as_ref()
                .is_some_and(|user| user.email == form.email)
                && state.password == form.password;
            if !matches {
                return Err(ApiError::Unauthorized);
            }
            Ok(TokenResponse {
                token: MEMORY_TOKEN.to_string(),
            })
        })
    }

    fn register<'a>(
        &'a self,
        form: &'a RegisterForm,
    ) -> DriveApiFuture<'a, Result<TokenResponse, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("register", form.email.clone())?;
            state.user = Some(User {
                id: "1".to_string(),
                email: form.email.clone(),
                full_name: form.full_name.clone(),
            });
            state.password = form.password.clone();
            Ok(TokenResponse {
                token: MEMORY_TOKEN.to_string(),
            })
        })
    }

    fn me<'a>(&'a self) -> DriveApiFuture<'a, Result<User, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("me", String::new())?;
            state.user.clone().ok_or(ApiError::Unauthorized)
        })
    }

    fn update_profile<'a>(
        &'a self,
        update: &'a ProfileUpdate,
    ) -> DriveApiFuture<'a, Result<User, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("update_profile", String::new())?;
            if let Some(password) = update.password.as_ref() {
                state.password = password.clone();
            }
            let user = state.user.as_mut().ok_or(ApiError::Unauthorized)?;
            if let Some(full_name) = update.full_name.as_ref() {
                user.full_name = full_name.clone();
            }
            if let Some(email) = update.email.as_ref() {
                user.email = email.clone();
            }
            Ok(user.clone())
        })
    }

    fn list_files<'a>(
        &'a self,
        kind: FileKind,
    ) -> DriveApiFuture<'a, Result<Vec<FileItem>, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("list_files", kind.as_query().to_string())?;
            Ok(state
                .files
                .iter()
                .filter(|file| file.matches_kind(kind))
                .cloned()
                .collect())
        })
    }

    fn trash<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("trash", ids_query(ids))?;
            for file in state.files.iter_mut().filter(|file| ids.contains(&file.id)) {
                file.deleted_at = Some(MEMORY_DELETED_AT.to_string());
            }
            Ok(())
        })
    }

    fn restore<'a>(&'a self, ids: &'a [FileId]) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("restore", ids_query(ids))?;
            for file in state.files.iter_mut().filter(|file| ids.contains(&file.id)) {
                file.deleted_at = None;
            }
            Ok(())
        })
    }

    fn delete_permanently<'a>(
        &'a self,
        ids: &'a [FileId],
    ) -> DriveApiFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("delete_permanently", ids_query(ids))?;
            state.files.retain(|file| !ids.contains(&file.id));
            Ok(())
        })
    }

    fn toggle_favorite<'a>(
        &'a self,
        id: FileId,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("toggle_favorite", id.to_string())?;
            let file = state.file_mut(id)?;
            file.is_favorite = !file.is_favorite;
            Ok(file.clone())
        })
    }

    fn upload<'a>(
        &'a self,
        payload: &'a UploadPayload,
    ) -> DriveApiFuture<'a, Result<FileItem, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("upload", payload.file_name.clone())?;
            let id = state.next_id.max(1);
            state.next_id = id + 1;
            let file = FileItem {
                id: FileId(id),
                filename: format!("{id}-{}", payload.file_name),
                original_name: payload.file_name.clone(),
                size: payload.bytes.len() as u64,
                mimetype: payload.content_type.clone(),
                is_favorite: false,
                deleted_at: None,
            };
            state.files.push(file.clone());
            state.downloads.insert(
                file.filename.clone(),
                DownloadedFile {
                    bytes: payload.bytes.clone(),
                    content_type: payload.content_type.clone(),
                },
            );
            Ok(file)
        })
    }

    fn download<'a>(
        &'a self,
        filename: &'a str,
    ) -> DriveApiFuture<'a, Result<DownloadedFile, ApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.enter("download", filename.to_string())?;
            let file = state
                .downloads
                .get(filename)
                .cloned()
                .ok_or(ApiError::NotFound)?;
            if file.bytes.is_empty() {
                return Err(ApiError::EmptyDownload);
            }
            Ok(file)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn file(id: u64, name: &str) -> FileItem {
        FileItem {
            id: FileId(id),
            filename: name.to_string(),
            original_name: name.to_string(),
            size: 1,
            mimetype: None,
            is_favorite: false,
            deleted_at: None,
        }
    }

    #[test]
    fn trash_and_restore_move_files_between_kinds() {
        let api = MemoryDriveApi::with_files(vec![file(1, "a.txt"), file(2, "b.txt")]);

        block_on(api.trash(&[FileId(1)])).expect("trash");
        let trash = block_on(api.list_files(FileKind::Trash)).expect("list trash");
        assert_eq!(trash.len(), 1);
        assert_eq!(trash[0].id, FileId(1));

        block_on(api.restore(&[FileId(1)])).expect("restore");
        assert_eq!(
            block_on(api.list_files(FileKind::All)).expect("list").len(),
            2
        );
        assert_eq!(
            api.calls(),
            vec!["trash:1", "list_files:trash", "restore:1", "list_files:all"]
        );
    }

    #[test]
    fn injected_failures_are_returned_and_logged() {
        let api = MemoryDriveApi::with_files(vec![file(1, "a.txt")]);
        api.fail("delete_permanently", ApiError::Forbidden);

        assert_eq!(
            block_on(api.delete_permanently(&[FileId(1)])),
            Err(ApiError::Forbidden)
        );
        assert_eq!(api.files().len(), 1);

        api.recover("delete_permanently");
        block_on(api.delete_permanently(&[FileId(1)])).expect("delete");
        assert!(api.files().is_empty());
    }

    #[test]
    fn upload_assigns_fresh_ids_and_serves_downloads() {
        let api = MemoryDriveApi::with_files(vec![file(4, "a.txt")]);
        let uploaded = block_on(api.upload(&UploadPayload {
            file_name: "photo.png".to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        }))
        .expect("upload");
        assert_eq!(uploaded.id, FileId(5));
        assert!(uploaded.is_image_mime());

        let body = block_on(api.download(&uploaded.filename)).expect("download");
        assert_eq!(body.bytes, vec![1, 2, 3]);
        assert_eq!(block_on(api.download("missing")), Err(ApiError::NotFound));
    }

    #[test]
    fn login_checks_registered_credentials() {
        let api = MemoryDriveApi::default();
        let form = LoginForm {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(block_on(api.login(&form)), Err(ApiError::Unauthorized));

        block_on(api.register(&RegisterForm {
            email: "a@b.c".to_string(),
            full_name: "Ada".to_string(),
            password: "pw".to_string(),
        }))
        .expect("register");
        assert!(block_on(api.login(&form)).is_ok());
        assert_eq!(block_on(api.me()).expect("me").full_name, "Ada");
    }
}
