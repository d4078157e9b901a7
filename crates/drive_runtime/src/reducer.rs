//! Store actions and transition logic for the files cache, the selection store, and toasts.

use drive_model::{FileCategory, FileId, FileItem, FilePatch, SortKey};
use thiserror::Error;

use crate::model::{FilesState, Toast, ToastId, ToastLevel, ToastState, UiState, ViewMode};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_files`].
pub enum FilesAction {
    /// Replace the cached list and clear the last error.
    ReplaceAll(Vec<FileItem>),
    /// Append one file.
    Add(FileItem),
    /// Drop one file.
    Remove(FileId),
    /// Drop every listed file that is cached.
    RemoveMany(Vec<FileId>),
    /// Merge a partial update into one file.
    Patch(FileId, FilePatch),
    /// Flip the favorite flag of one file.
    ToggleFavorite(FileId),
    /// Mark a list request as started or finished.
    SetLoading(bool),
    /// Record or clear a list failure.
    SetError(Option<String>),
    /// Forget everything.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_ui`].
pub enum UiAction {
    /// Add one id to the selection.
    Select(FileId),
    /// Remove one id from the selection.
    Deselect(FileId),
    /// Replace the selection with `ids`, dropping duplicates.
    SelectAll(Vec<FileId>),
    /// Clear the selection and the range anchor.
    DeselectAll,
    /// Select or deselect one id.
    Toggle(FileId),
    /// Replace the selection and the anchor in one step.
    SetSelection {
        /// New selection.
        ids: Vec<FileId>,
        /// New range anchor.
        anchor: Option<FileId>,
    },
    /// Switch grid/list layout.
    SetViewMode(ViewMode),
    /// Update the search box.
    SetSearchQuery(String),
    /// Change the sort key.
    SetSortKey(SortKey),
    /// Change the category filter.
    SetFilter(FileCategory),
    /// Reset per-page state after navigation.
    ResetForPage {
        /// Default category filter of the new page.
        filter: FileCategory,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_toasts`].
pub enum ToastAction {
    /// Show a new toast.
    Push {
        /// Severity.
        level: ToastLevel,
        /// Text.
        message: String,
    },
    /// Remove a toast; unknown ids are ignored since expiry and click can race.
    Dismiss(ToastId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects emitted by reducers and executed by the runtime.
pub enum RuntimeEffect {
    /// Dismiss a toast after a delay.
    ExpireToast {
        /// Toast to dismiss.
        id: ToastId,
        /// Delay in milliseconds.
        after_ms: u32,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Store errors for actions that reference missing data.
pub enum StoreError {
    /// The target file is not in the cache.
    #[error("file {0} not found in the files cache")]
    FileNotFound(FileId),
}

fn position_of(state: &FilesState, id: FileId) -> Result<usize, StoreError> {
    state
        .files
        .iter()
        .position(|file| file.id == id)
        .ok_or(StoreError::FileNotFound(id))
}

/// Applies a [`FilesAction`] to the files cache.
///
/// # Errors
///
/// Returns [`StoreError::FileNotFound`] when `Remove`, `Patch`, or `ToggleFavorite` name a file
/// that is not cached. The state is left unchanged in that case.
pub fn reduce_files(state: &mut FilesState, action: FilesAction) -> Result<(), StoreError> {
    match action {
        FilesAction::ReplaceAll(files) => {
            state.files = files;
            state.error = None;
        }
        FilesAction::Add(file) => state.files.push(file),
        FilesAction::Remove(id) => {
            let index = position_of(state, id)?;
            state.files.remove(index);
        }
        FilesAction::RemoveMany(ids) => state.files.retain(|file| !ids.contains(&file.id)),
        FilesAction::Patch(id, patch) => {
            let index = position_of(state, id)?;
            state.files[index].apply_patch(&patch);
        }
        FilesAction::ToggleFavorite(id) => {
            let index = position_of(state, id)?;
            let file = &mut state.files[index];
            file.is_favorite = !file.is_favorite;
        }
        FilesAction::SetLoading(is_loading) => state.is_loading = is_loading,
        FilesAction::SetError(error) => state.error = error,
        FilesAction::Clear => *state = FilesState::default(),
    }
    Ok(())
}

fn dedupe(ids: Vec<FileId>) -> Vec<FileId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// Applies a [`UiAction`] to the selection/view store. Every action is total.
pub fn reduce_ui(state: &mut UiState, action: UiAction) {
    match action {
        UiAction::Select(id) => {
            if !state.is_selected(id) {
                state.selected.push(id);
            }
        }
        UiAction::Deselect(id) => state.selected.retain(|selected| *selected != id),
        UiAction::SelectAll(ids) => state.selected = dedupe(ids),
        UiAction::DeselectAll => {
            state.selected.clear();
            state.anchor = None;
        }
        UiAction::Toggle(id) => {
            if state.is_selected(id) {
                state.selected.retain(|selected| *selected != id);
            } else {
                state.selected.push(id);
            }
        }
        UiAction::SetSelection { ids, anchor } => {
            state.selected = dedupe(ids);
            state.anchor = anchor;
        }
        UiAction::SetViewMode(mode) => state.view_mode = mode,
        UiAction::SetSearchQuery(query) => state.search_query = query,
        UiAction::SetSortKey(key) => state.sort_key = key,
        UiAction::SetFilter(filter) => state.filter = filter,
        UiAction::ResetForPage { filter } => {
            state.selected.clear();
            state.anchor = None;
            state.search_query.clear();
            state.filter = filter;
        }
    }
}

/// Applies a [`ToastAction`] and returns the effects the runtime must schedule.
pub fn reduce_toasts(state: &mut ToastState, action: ToastAction) -> Vec<RuntimeEffect> {
    match action {
        ToastAction::Push { level, message } => {
            let id = state.allocate_id();
            state.toasts.push(Toast { id, level, message });
            vec![RuntimeEffect::ExpireToast {
                id,
                after_ms: crate::model::TOAST_LIFETIME_MS,
            }]
        }
        ToastAction::Dismiss(id) => {
            state.toasts.retain(|toast| toast.id != id);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::TOAST_LIFETIME_MS;

    fn file(id: u64, favorite: bool) -> FileItem {
        FileItem {
            id: FileId(id),
            filename: format!("{id}.txt"),
            original_name: format!("note-{id}.txt"),
            size: 100,
            mimetype: Some("text/plain".to_string()),
            is_favorite: favorite,
            deleted_at: None,
        }
    }

    fn cache(files: Vec<FileItem>) -> FilesState {
        let mut state = FilesState::default();
        reduce_files(&mut state, FilesAction::ReplaceAll(files)).expect("replace");
        state
    }

    #[test]
    fn toggle_favorite_flips_only_the_target() {
        let mut state = cache(vec![file(1, false), file(2, true), file(3, false)]);

        reduce_files(&mut state, FilesAction::ToggleFavorite(FileId(2))).expect("toggle");

        let flags: Vec<bool> = state.files.iter().map(|file| file.is_favorite).collect();
        assert_eq!(flags, vec![false, false, false]);
    }

    #[test]
    fn remove_many_leaves_a_disjoint_remainder() {
        let mut state = cache(vec![file(1, false), file(2, false), file(3, false)]);
        let removed = vec![FileId(1), FileId(2)];

        reduce_files(&mut state, FilesAction::RemoveMany(removed.clone())).expect("remove");

        assert!(state.files.iter().all(|file| !removed.contains(&file.id)));
        assert_eq!(state.files.len(), 1);
    }

    #[test]
    fn unknown_ids_are_rejected_without_mutation() {
        let mut state = cache(vec![file(1, false)]);
        let before = state.clone();

        for action in [
            FilesAction::Remove(FileId(9)),
            FilesAction::ToggleFavorite(FileId(9)),
            FilesAction::Patch(FileId(9), FilePatch::favorite(true)),
        ] {
            assert_eq!(
                reduce_files(&mut state, action),
                Err(StoreError::FileNotFound(FileId(9)))
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn replace_all_clears_a_previous_error() {
        let mut state = FilesState::default();
        reduce_files(&mut state, FilesAction::SetError(Some("offline".into()))).expect("error");
        reduce_files(&mut state, FilesAction::ReplaceAll(vec![file(4, false)])).expect("replace");

        assert_eq!(state.error, None);
        assert_eq!(state.files.len(), 1);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut state = cache(vec![file(1, false)]);
        reduce_files(
            &mut state,
            FilesAction::Patch(FileId(1), FilePatch::favorite(true)),
        )
        .expect("patch");

        assert!(state.files[0].is_favorite);
        assert_eq!(state.files[0].original_name, "note-1.txt");
    }

    #[test]
    fn select_is_idempotent_and_toggle_twice_restores() {
        let mut ui = UiState::default();
        reduce_ui(&mut ui, UiAction::Select(FileId(1)));
        reduce_ui(&mut ui, UiAction::Select(FileId(1)));
        assert_eq!(ui.selected, vec![FileId(1)]);

        let before = ui.clone();
        reduce_ui(&mut ui, UiAction::Toggle(FileId(2)));
        reduce_ui(&mut ui, UiAction::Toggle(FileId(2)));
        assert_eq!(ui, before);
    }

    #[test]
    fn select_all_deduplicates() {
        let mut ui = UiState::default();
        reduce_ui(
            &mut ui,
            UiAction::SelectAll(vec![FileId(3), FileId(1), FileId(3), FileId(1)]),
        );
        assert_eq!(ui.selected, vec![FileId(3), FileId(1)]);
    }

    #[test]
    fn deselect_all_and_page_reset_clear_the_anchor() {
        let mut ui = UiState::default();
        reduce_ui(
            &mut ui,
            UiAction::SetSelection {
                ids: vec![FileId(1)],
                anchor: Some(FileId(1)),
            },
        );
        reduce_ui(&mut ui, UiAction::DeselectAll);
        assert_eq!(ui.anchor, None);

        reduce_ui(&mut ui, UiAction::SetSearchQuery("report".into()));
        reduce_ui(&mut ui, UiAction::SetSortKey(SortKey::Size));
        reduce_ui(&mut ui, UiAction::Select(FileId(2)));
        reduce_ui(
            &mut ui,
            UiAction::ResetForPage {
                filter: FileCategory::Video,
            },
        );

        assert_eq!(ui.selected, Vec::<FileId>::new());
        assert_eq!(ui.search_query, "");
        assert_eq!(ui.filter, FileCategory::Video);
        assert_eq!(ui.sort_key, SortKey::Size);
    }

    #[test]
    fn pushed_toasts_schedule_their_own_expiry() {
        let mut toasts = ToastState::default();
        let effects = reduce_toasts(
            &mut toasts,
            ToastAction::Push {
                level: ToastLevel::Success,
                message: "Removed 2 files".into(),
            },
        );

        let id = toasts.toasts[0].id;
        assert_eq!(
            effects,
            vec![RuntimeEffect::ExpireToast {
                id,
                after_ms: TOAST_LIFETIME_MS
            }]
        );

        assert_eq!(reduce_toasts(&mut toasts, ToastAction::Dismiss(id)), vec![]);
        assert!(toasts.toasts.is_empty());
        reduce_toasts(&mut toasts, ToastAction::Dismiss(id));
    }
}
