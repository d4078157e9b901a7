//! Async orchestration of dashboard actions over a [`DriveApi`].
//!
//! Each action talks to the backend, applies the outcome to the stores through an
//! [`ActionHost`], and reports the result with a toast. Failures of the follow-up refetch after
//! a successful mutation are logged and swallowed so the optimistic local state stays visible.

use drive_model::{
    ApiError, DownloadedFile, DriveApi, DriveApiFuture, FileId, FileItem, FileKind, FilePatch,
    LoginForm, ProfileUpdate, RegisterForm, StorageStats, UploadPayload, User, AUTH_ROUTE,
    DASHBOARD_ROUTE, DEFAULT_STORAGE_QUOTA_BYTES,
};
use drive_web::BULK_DOWNLOAD_DELAY_MS;
use leptos::logging;

use crate::{
    model::ToastLevel,
    reducer::{FilesAction, UiAction},
};

/// Store dispatch and browser side effects used by the actions.
pub trait ActionHost {
    /// Dispatches a files-cache action.
    fn files(&self, action: FilesAction);

    /// Dispatches a selection-store action.
    fn ui(&self, action: UiAction);

    /// Shows a toast.
    fn toast(&self, level: ToastLevel, message: String);

    /// Hands a downloaded body to the browser.
    fn save_file(&self, file_name: &str, file: &DownloadedFile) -> Result<(), String>;

    /// Waits `ms` milliseconds.
    fn pause(&self, ms: u32) -> DriveApiFuture<'_, ()>;

    /// Persists the session token.
    fn store_token(&self, token: &str) -> Result<(), String>;

    /// Forgets the session token.
    fn clear_token(&self) -> Result<(), String>;

    /// Performs a full-page navigation.
    fn navigate(&self, path: &str) -> Result<(), String>;
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{count} files")
    }
}

async fn refetch(api: &dyn DriveApi, host: &dyn ActionHost, kind: FileKind) {
    match api.list_files(kind).await {
        Ok(files) => host.files(FilesAction::ReplaceAll(files)),
        Err(err) => logging::warn!("failed to refresh {} files: {err}", kind.as_query()),
    }
}

/// Loads the files of `kind` into the cache, recording a failure in the cache's error slot.
pub async fn load_files(api: &dyn DriveApi, host: &dyn ActionHost, kind: FileKind) {
    host.files(FilesAction::SetLoading(true));
    match api.list_files(kind).await {
        Ok(files) => host.files(FilesAction::ReplaceAll(files)),
        Err(err) => {
            logging::warn!("failed to load {} files: {err}", kind.as_query());
            host.files(FilesAction::SetError(Some(
                err.user_message("Could not load files"),
            )));
        }
    }
    host.files(FilesAction::SetLoading(false));
}

/// Loads a list without touching the cache, for pages that keep their own list.
pub async fn load_local_list(
    api: &dyn DriveApi,
    host: &dyn ActionHost,
    kind: FileKind,
) -> Vec<FileItem> {
    match api.list_files(kind).await {
        Ok(files) => files,
        Err(err) => {
            logging::warn!("failed to load {} files: {err}", kind.as_query());
            host.toast(ToastLevel::Error, err.user_message("Could not load files"));
            Vec::new()
        }
    }
}

/// Moves `ids` to the trash, or deletes them for good when `permanent`, then refetches `kind`.
///
/// Returns `true` when the backend accepted the request.
pub async fn remove_files(
    api: &dyn DriveApi,
    host: &dyn ActionHost,
    ids: Vec<FileId>,
    kind: FileKind,
    permanent: bool,
) -> bool {
    if ids.is_empty() {
        return false;
    }

    let outcome = if permanent {
        api.delete_permanently(&ids).await
    } else {
        api.trash(&ids).await
    };
    if let Err(err) = outcome {
        logging::warn!("failed to remove files: {err}");
        host.toast(
            ToastLevel::Error,
            err.user_message("Could not remove files"),
        );
        return false;
    }

    let count = ids.len();
    host.files(FilesAction::RemoveMany(ids));
    host.ui(UiAction::DeselectAll);
    host.toast(
        ToastLevel::Success,
        format!("Removed {}", count_label(count)),
    );
    refetch(api, host, kind).await;
    true
}

/// Restores `ids` from the trash and refetches the trash list.
pub async fn restore_files(api: &dyn DriveApi, host: &dyn ActionHost, ids: Vec<FileId>) -> bool {
    if ids.is_empty() {
        return false;
    }

    if let Err(err) = api.restore(&ids).await {
        logging::warn!("failed to restore files: {err}");
        host.toast(
            ToastLevel::Error,
            err.user_message("Could not restore files"),
        );
        return false;
    }

    let count = ids.len();
    host.files(FilesAction::RemoveMany(ids));
    refetch(api, host, FileKind::Trash).await;
    host.ui(UiAction::DeselectAll);
    host.toast(
        ToastLevel::Success,
        format!("Restored {}", count_label(count)),
    );
    true
}

async fn download_one(
    api: &dyn DriveApi,
    host: &dyn ActionHost,
    file: &FileItem,
) -> Result<(), String> {
    let body = api
        .download(&file.filename)
        .await
        .map_err(|err| err.to_string())?;
    host.save_file(file.download_name(), &body)
}

/// Downloads `files` one after another, pausing between items and stopping at the first failure.
pub async fn download_files(api: &dyn DriveApi, host: &dyn ActionHost, files: &[FileItem]) -> bool {
    if files.is_empty() {
        return false;
    }

    for (index, file) in files.iter().enumerate() {
        if index > 0 {
            host.pause(BULK_DOWNLOAD_DELAY_MS).await;
        }
        if let Err(err) = download_one(api, host, file).await {
            logging::warn!("failed to download {}: {err}", file.filename);
            host.toast(ToastLevel::Error, "Could not download files".to_string());
            return false;
        }
    }

    let message = if files.len() == 1 {
        "File downloaded".to_string()
    } else {
        format!("Downloaded {}", count_label(files.len()))
    };
    host.toast(ToastLevel::Success, message);
    true
}

/// Flips the favorite flag of `file` and returns the server's copy.
///
/// Trashed files are refused without calling the backend. With `patch_cache` the cached copy is
/// patched; pages holding their own list leave it `false` and apply the result themselves.
pub async fn toggle_favorite(
    api: &dyn DriveApi,
    host: &dyn ActionHost,
    file: &FileItem,
    patch_cache: bool,
) -> Option<FileItem> {
    if file.is_trashed() {
        host.toast(
            ToastLevel::Error,
            "Files in the trash cannot be added to favorites".to_string(),
        );
        return None;
    }

    match api.toggle_favorite(file.id).await {
        Ok(updated) => {
            if patch_cache {
                host.files(FilesAction::Patch(
                    file.id,
                    FilePatch::favorite(updated.is_favorite),
                ));
            }
            let message = if updated.is_favorite {
                "Added to favorites"
            } else {
                "Removed from favorites"
            };
            host.toast(ToastLevel::Success, message.to_string());
            Some(updated)
        }
        Err(err) => {
            logging::warn!("failed to toggle favorite for {}: {err}", file.id);
            let message = err
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            host.toast(ToastLevel::Error, message);
            None
        }
    }
}

/// Uploads each payload independently and refetches `refresh` once if anything landed.
///
/// Returns the number of files the backend accepted.
pub async fn upload_files(
    api: &dyn DriveApi,
    host: &dyn ActionHost,
    payloads: Vec<UploadPayload>,
    refresh: Option<FileKind>,
) -> usize {
    let mut uploaded = 0;
    for payload in &payloads {
        match api.upload(payload).await {
            Ok(file) => {
                logging::log!("uploaded {} as {}", payload.file_name, file.filename);
                uploaded += 1;
            }
            Err(err) => {
                logging::warn!("failed to upload {}: {err}", payload.file_name);
                host.toast(
                    ToastLevel::Error,
                    err.user_message(&format!("Could not upload {}", payload.file_name)),
                );
            }
        }
    }

    if uploaded == 0 {
        return 0;
    }
    let message = if uploaded == 1 {
        "File uploaded".to_string()
    } else {
        format!("Uploaded {}", count_label(uploaded))
    };
    host.toast(ToastLevel::Success, message);
    if let Some(kind) = refresh {
        refetch(api, host, kind).await;
    }
    uploaded
}

fn start_session(host: &dyn ActionHost, token: &str) -> bool {
    if let Err(err) = host.store_token(token) {
        logging::error!("failed to store session token: {err}");
        host.toast(ToastLevel::Error, "Could not start a session".to_string());
        return false;
    }
    if let Err(err) = host.navigate(DASHBOARD_ROUTE) {
        logging::warn!("failed to open the dashboard: {err}");
    }
    true
}

/// Signs in and opens the dashboard.
pub async fn login(api: &dyn DriveApi, host: &dyn ActionHost, form: &LoginForm) -> bool {
    match api.login(form).await {
        Ok(response) => start_session(host, &response.token),
        Err(err) => {
            logging::warn!("login failed: {err}");
            host.toast(
                ToastLevel::Error,
                err.user_message("Invalid login or password"),
            );
            false
        }
    }
}

/// Creates an account, signs in, and opens the dashboard.
pub async fn register(api: &dyn DriveApi, host: &dyn ActionHost, form: &RegisterForm) -> bool {
    match api.register(form).await {
        Ok(response) => start_session(host, &response.token),
        Err(err) => {
            logging::warn!("registration failed: {err}");
            host.toast(
                ToastLevel::Error,
                err.user_message("Could not create an account"),
            );
            false
        }
    }
}

/// Ends the session and returns to the sign-in page.
pub fn logout(host: &dyn ActionHost) {
    if let Err(err) = host.clear_token() {
        logging::warn!("failed to clear session token: {err}");
    }
    host.ui(UiAction::DeselectAll);
    host.files(FilesAction::Clear);
    if let Err(err) = host.navigate(AUTH_ROUTE) {
        logging::warn!("failed to open the sign-in page: {err}");
    }
}

/// Loads the signed-in user's profile.
pub async fn load_profile(api: &dyn DriveApi, host: &dyn ActionHost) -> Option<User> {
    match api.me().await {
        Ok(user) => Some(user),
        Err(err) => {
            logging::warn!("failed to load profile: {err}");
            host.toast(ToastLevel::Error, err.user_message("Could not load profile"));
            None
        }
    }
}

/// Sends a partial profile update. Empty updates are not sent.
pub async fn update_profile(
    api: &dyn DriveApi,
    host: &dyn ActionHost,
    update: &ProfileUpdate,
) -> Option<User> {
    if update.is_empty() {
        host.toast(ToastLevel::Info, "Nothing to update".to_string());
        return None;
    }

    match api.update_profile(update).await {
        Ok(user) => {
            host.toast(ToastLevel::Success, "Profile updated".to_string());
            Some(user)
        }
        Err(err) => {
            logging::warn!("failed to update profile: {err}");
            host.toast(
                ToastLevel::Error,
                err.user_message("Could not update profile"),
            );
            None
        }
    }
}

/// Fetches the active, trash, and favorites lists and computes storage statistics.
pub async fn load_statistics(api: &dyn DriveApi, host: &dyn ActionHost) -> Option<StorageStats> {
    let lists = async {
        let all = api.list_files(FileKind::All).await?;
        let trash = api.list_files(FileKind::Trash).await?;
        let favorites = api.list_files(FileKind::Favorites).await?;
        Ok::<_, ApiError>((all, trash, favorites))
    };

    match lists.await {
        Ok((all, trash, favorites)) => Some(StorageStats::compute(
            &all,
            &trash,
            &favorites,
            DEFAULT_STORAGE_QUOTA_BYTES,
        )),
        Err(err) => {
            logging::warn!("failed to load statistics: {err}");
            host.toast(
                ToastLevel::Error,
                err.user_message("Could not load statistics"),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use drive_model::MemoryDriveApi;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{FilesState, UiState},
        reducer::{reduce_files, reduce_ui},
    };

    #[derive(Default)]
    struct RecordingHost {
        files: RefCell<FilesState>,
        ui: RefCell<UiState>,
        toasts: RefCell<Vec<(ToastLevel, String)>>,
        saved: RefCell<Vec<String>>,
        pauses: RefCell<Vec<u32>>,
        token: RefCell<Option<String>>,
        visited: RefCell<Vec<String>>,
    }

    impl RecordingHost {
        fn seeded(files: Vec<FileItem>) -> Self {
            let host = Self::default();
            host.files(FilesAction::ReplaceAll(files));
            host
        }

        fn cached_ids(&self) -> Vec<u64> {
            self.files.borrow().files.iter().map(|file| file.id.0).collect()
        }

        fn last_toast(&self) -> Option<(ToastLevel, String)> {
            self.toasts.borrow().last().cloned()
        }
    }

    impl ActionHost for RecordingHost {
        fn files(&self, action: FilesAction) {
            reduce_files(&mut self.files.borrow_mut(), action).expect("files action");
        }

        fn ui(&self, action: UiAction) {
            reduce_ui(&mut self.ui.borrow_mut(), action);
        }

        fn toast(&self, level: ToastLevel, message: String) {
            self.toasts.borrow_mut().push((level, message));
        }

        fn save_file(&self, file_name: &str, _file: &DownloadedFile) -> Result<(), String> {
            self.saved.borrow_mut().push(file_name.to_string());
            Ok(())
        }

        fn pause(&self, ms: u32) -> DriveApiFuture<'_, ()> {
            self.pauses.borrow_mut().push(ms);
            Box::pin(async {})
        }

        fn store_token(&self, token: &str) -> Result<(), String> {
            *self.token.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn clear_token(&self) -> Result<(), String> {
            *self.token.borrow_mut() = None;
            Ok(())
        }

        fn navigate(&self, path: &str) -> Result<(), String> {
            self.visited.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    fn file(id: u64, name: &str) -> FileItem {
        FileItem {
            id: FileId(id),
            filename: format!("stored-{id}"),
            original_name: name.to_string(),
            size: 1_000 * id,
            mimetype: Some("text/plain".to_string()),
            is_favorite: false,
            deleted_at: None,
        }
    }

    fn body(text: &str) -> DownloadedFile {
        DownloadedFile {
            bytes: text.as_bytes().to_vec(),
            content_type: Some("text/plain".to_string()),
        }
    }

    #[test]
    fn remove_calls_api_updates_stores_toasts_and_refetches() {
        let files = vec![file(1, "a.txt"), file(2, "b.txt"), file(3, "c.txt")];
        let api = MemoryDriveApi::with_files(files.clone());
        let host = RecordingHost::seeded(files);
        host.ui(UiAction::SelectAll(vec![FileId(1), FileId(2)]));

        let removed = block_on(remove_files(
            &api,
            &host,
            vec![FileId(1), FileId(2)],
            FileKind::All,
            false,
        ));

        assert!(removed);
        assert_eq!(api.calls(), vec!["trash:1,2", "list_files:all"]);
        assert_eq!(host.cached_ids(), vec![3]);
        assert!(!host.ui.borrow().has_selection());
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Success, "Removed 2 files".to_string()))
        );
    }

    #[test]
    fn refetch_failure_after_remove_keeps_local_state() {
        let files = vec![file(1, "a.txt"), file(2, "b.txt")];
        let api = MemoryDriveApi::with_files(files.clone());
        api.fail("list_files", ApiError::Network("offline".into()));
        let host = RecordingHost::seeded(files);

        assert!(block_on(remove_files(
            &api,
            &host,
            vec![FileId(1)],
            FileKind::All,
            false
        )));

        assert_eq!(host.cached_ids(), vec![2]);
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Success, "Removed 1 file".to_string()))
        );
    }

    #[test]
    fn rejected_remove_keeps_cache_and_shows_server_message() {
        let files = vec![file(1, "a.txt")];
        let api = MemoryDriveApi::with_files(files.clone());
        api.fail(
            "trash",
            ApiError::Status {
                status: 400,
                message: Some("File is locked".into()),
            },
        );
        let host = RecordingHost::seeded(files);

        assert!(!block_on(remove_files(
            &api,
            &host,
            vec![FileId(1)],
            FileKind::All,
            false
        )));
        assert_eq!(host.cached_ids(), vec![1]);
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Error, "File is locked".to_string()))
        );
        assert_eq!(api.calls(), vec!["trash:1"]);
    }

    #[test]
    fn permanent_delete_refetches_the_trash() {
        let mut trashed = file(4, "old.log");
        trashed.deleted_at = Some("2024-02-02T00:00:00Z".into());
        let api = MemoryDriveApi::with_files(vec![trashed.clone()]);
        let host = RecordingHost::seeded(vec![trashed]);

        assert!(block_on(remove_files(
            &api,
            &host,
            vec![FileId(4)],
            FileKind::Trash,
            true
        )));
        assert_eq!(
            api.calls(),
            vec!["delete_permanently:4", "list_files:trash"]
        );
        assert!(api.files().is_empty());
    }

    #[test]
    fn restore_refetches_trash_and_clears_selection() {
        let mut trashed = file(5, "photo.png");
        trashed.deleted_at = Some("2024-02-02T00:00:00Z".into());
        let api = MemoryDriveApi::with_files(vec![trashed.clone()]);
        let host = RecordingHost::seeded(vec![trashed]);
        host.ui(UiAction::Select(FileId(5)));

        assert!(block_on(restore_files(&api, &host, vec![FileId(5)])));
        assert_eq!(api.calls(), vec!["restore:5", "list_files:trash"]);
        assert!(host.cached_ids().is_empty());
        assert!(!host.ui.borrow().has_selection());
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Success, "Restored 1 file".to_string()))
        );
    }

    #[test]
    fn favorite_toggle_on_trashed_file_never_calls_the_api() {
        let mut trashed = file(1, "a.txt");
        trashed.deleted_at = Some("2024-02-02T00:00:00Z".into());
        let api = MemoryDriveApi::with_files(vec![trashed.clone()]);
        let host = RecordingHost::seeded(vec![trashed.clone()]);

        assert_eq!(block_on(toggle_favorite(&api, &host, &trashed, true)), None);
        assert!(api.calls().is_empty());
        assert_eq!(host.last_toast().map(|(level, _)| level), Some(ToastLevel::Error));
    }

    #[test]
    fn favorite_toggle_patches_cache_from_server_copy() {
        let target = file(2, "b.txt");
        let api = MemoryDriveApi::with_files(vec![file(1, "a.txt"), target.clone()]);
        let host = RecordingHost::seeded(vec![file(1, "a.txt"), target.clone()]);

        let updated = block_on(toggle_favorite(&api, &host, &target, true)).expect("updated");

        assert!(updated.is_favorite);
        let flags: Vec<bool> = host
            .files
            .borrow()
            .files
            .iter()
            .map(|file| file.is_favorite)
            .collect();
        assert_eq!(flags, vec![false, true]);
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Success, "Added to favorites".to_string()))
        );
    }

    #[test]
    fn favorite_toggle_failure_prefers_server_message() {
        let target = file(2, "b.txt");
        let api = MemoryDriveApi::with_files(vec![target.clone()]);
        api.fail(
            "toggle_favorite",
            ApiError::Status {
                status: 409,
                message: Some("Quota reached".into()),
            },
        );
        let host = RecordingHost::seeded(vec![target.clone()]);

        assert_eq!(block_on(toggle_favorite(&api, &host, &target, true)), None);
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Error, "Quota reached".to_string()))
        );
        assert!(!host.files.borrow().files[0].is_favorite);
    }

    #[test]
    fn bulk_download_pauses_between_items() {
        let files = vec![file(1, "a.txt"), file(2, "b.txt"), file(3, "c.txt")];
        let api = MemoryDriveApi::with_files(files.clone());
        for item in &files {
            api.put_download(item.filename.clone(), body("data"));
        }
        let host = RecordingHost::default();

        assert!(block_on(download_files(&api, &host, &files)));
        assert_eq!(*host.saved.borrow(), vec!["a.txt", "b.txt", "c.txt"]);
        assert_eq!(
            *host.pauses.borrow(),
            vec![BULK_DOWNLOAD_DELAY_MS, BULK_DOWNLOAD_DELAY_MS]
        );
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Success, "Downloaded 3 files".to_string()))
        );
    }

    #[test]
    fn bulk_download_stops_at_first_failure() {
        let files = vec![file(1, "a.txt"), file(2, "b.txt"), file(3, "c.txt")];
        let api = MemoryDriveApi::with_files(files.clone());
        api.put_download("stored-1", body("one"));
        api.put_download("stored-3", body("three"));
        let host = RecordingHost::default();

        assert!(!block_on(download_files(&api, &host, &files)));
        assert_eq!(*host.saved.borrow(), vec!["a.txt"]);
        assert_eq!(
            api.calls(),
            vec!["download:stored-1", "download:stored-2"]
        );
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Error, "Could not download files".to_string()))
        );
    }

    #[test]
    fn single_download_uses_singular_toast() {
        let only = file(7, "report.pdf");
        let api = MemoryDriveApi::with_files(vec![only.clone()]);
        api.put_download("stored-7", body("%PDF"));
        let host = RecordingHost::default();

        assert!(block_on(download_files(&api, &host, &[only])));
        assert!(host.pauses.borrow().is_empty());
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Success, "File downloaded".to_string()))
        );
    }

    #[test]
    fn upload_refreshes_the_active_kind_once() {
        let api = MemoryDriveApi::with_files(vec![file(1, "a.txt")]);
        let host = RecordingHost::default();
        let payloads = vec![
            UploadPayload {
                file_name: "b.txt".into(),
                content_type: Some("text/plain".into()),
                bytes: b"bee".to_vec(),
            },
            UploadPayload {
                file_name: "c.txt".into(),
                content_type: None,
                bytes: b"sea".to_vec(),
            },
        ];

        assert_eq!(
            block_on(upload_files(&api, &host, payloads, Some(FileKind::All))),
            2
        );
        assert_eq!(
            api.calls(),
            vec!["upload:b.txt", "upload:c.txt", "list_files:all"]
        );
        assert_eq!(host.cached_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn login_stores_token_and_opens_dashboard() {
        let api = MemoryDriveApi::default();
        api.set_account(
            User {
                id: "1".into(),
                email: "ada@example.com".into(),
                full_name: "Ada".into(),
            },
            "secret",
        );
        let host = RecordingHost::default();

        let wrong = LoginForm {
            email: "ada@example.com".into(),
            password: "nope".into(),
        };
        assert!(!block_on(login(&api, &host, &wrong)));
        assert_eq!(
            host.last_toast(),
            Some((ToastLevel::Error, "Invalid login or password".to_string()))
        );
        assert_eq!(*host.token.borrow(), None);

        let right = LoginForm {
            password: "secret".into(),
            ..wrong
        };
        assert!(block_on(login(&api, &host, &right)));
        assert!(host.token.borrow().is_some());
        assert_eq!(*host.visited.borrow(), vec![DASHBOARD_ROUTE]);
    }

    #[test]
    fn logout_clears_session_and_stores() {
        let host = RecordingHost::seeded(vec![file(1, "a.txt")]);
        host.store_token("abc").expect("token");
        host.ui(UiAction::Select(FileId(1)));

        logout(&host);

        assert_eq!(*host.token.borrow(), None);
        assert!(host.cached_ids().is_empty());
        assert!(!host.ui.borrow().has_selection());
        assert_eq!(*host.visited.borrow(), vec![AUTH_ROUTE]);
    }

    #[test]
    fn empty_profile_update_is_not_sent() {
        let api = MemoryDriveApi::default();
        let host = RecordingHost::default();

        assert_eq!(
            block_on(update_profile(&api, &host, &ProfileUpdate::default())),
            None
        );
        assert!(api.calls().is_empty());
    }

    #[test]
    fn statistics_combine_three_lists() {
        let mut trashed = file(3, "old.zip");
        trashed.deleted_at = Some("2024-02-02T00:00:00Z".into());
        let mut favorite = file(2, "b.txt");
        favorite.is_favorite = true;
        let api = MemoryDriveApi::with_files(vec![file(1, "a.txt"), favorite, trashed]);
        let host = RecordingHost::default();

        let stats = block_on(load_statistics(&api, &host)).expect("stats");

        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.trash_count, 1);
        assert_eq!(stats.favorites_count, 1);
        assert_eq!(
            api.calls(),
            vec!["list_files:all", "list_files:trash", "list_files:favorites"]
        );
    }
}
