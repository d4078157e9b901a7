//! Store state for the dashboard runtime: the files cache, selection/view state, and toasts.

use drive_model::{FileCategory, FileId, FileItem, FileKind, SortKey, ViewQuery};

/// Time a toast stays on screen before it expires.
pub const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Client-side cache of the files listed for the current page.
pub struct FilesState {
    /// Cached files in server order.
    pub files: Vec<FileItem>,
    /// A list request is in flight.
    pub is_loading: bool,
    /// Last list failure shown to the user.
    pub error: Option<String>,
}

impl FilesState {
    /// Cached files visible under `kind`.
    pub fn files_of_kind(&self, kind: FileKind) -> Vec<FileItem> {
        self.files
            .iter()
            .filter(|file| file.matches_kind(kind))
            .cloned()
            .collect()
    }

    /// Cached files for `ids`, in cache order.
    pub fn files_for_ids(&self, ids: &[FileId]) -> Vec<FileItem> {
        self.files
            .iter()
            .filter(|file| ids.contains(&file.id))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Layout used by the files view.
pub enum ViewMode {
    /// Card grid with thumbnails.
    #[default]
    Grid,
    /// Compact rows.
    List,
}

impl ViewMode {
    /// Stable token for DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Selection and view preferences shared by every files page.
pub struct UiState {
    /// Selected ids in selection order, without duplicates.
    pub selected: Vec<FileId>,
    /// Origin of shift-click range selection.
    pub anchor: Option<FileId>,
    /// Grid or list layout.
    pub view_mode: ViewMode,
    /// Raw search box contents.
    pub search_query: String,
    /// Active sort key.
    pub sort_key: SortKey,
    /// Active category filter.
    pub filter: FileCategory,
}

impl UiState {
    /// Returns `true` when `id` is selected.
    pub fn is_selected(&self, id: FileId) -> bool {
        self.selected.contains(&id)
    }

    /// Returns `true` when anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Number of selected ids.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Pipeline query derived from the current search, sort, and filter.
    pub fn view_query(&self) -> ViewQuery {
        ViewQuery {
            category: self.filter,
            search: self.search_query.clone(),
            sort: self.sort_key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Runtime-assigned toast identifier.
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Toast severity.
pub enum ToastLevel {
    /// Completed action.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
    /// Failed action.
    Error,
}

impl ToastLevel {
    /// Stable token for DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One transient notification.
pub struct Toast {
    /// Identifier used for dismissal.
    pub id: ToastId,
    /// Severity.
    pub level: ToastLevel,
    /// User-facing text.
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Visible toasts, oldest first.
pub struct ToastState {
    /// Toasts on screen.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub(crate) fn allocate_id(&mut self) -> ToastId {
        self.next_id += 1;
        ToastId(self.next_id)
    }
}
