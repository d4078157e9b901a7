//! File data types shared by the API contract, the files cache, and the view pipeline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Server-assigned file identifier.
pub struct FileId(pub u64);

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FileId {
    type Err = std::num::ParseIntError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Metadata for one uploaded file as returned by the backend.
pub struct FileItem {
    /// Server identifier.
    pub id: FileId,
    /// Name under which the backend stored the file.
    pub filename: String,
    /// Name the user uploaded the file with; used for display and search.
    pub original_name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// MIME type reported at upload time.
    #[serde(default)]
    pub mimetype: Option<String>,
    /// Whether the user marked the file as a favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Deletion timestamp (ISO-8601); `Some` means the file sits in the trash.
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl FileItem {
    /// Returns `true` when the file is soft-deleted.
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns `true` when the MIME type marks the file as an image.
    pub fn is_image_mime(&self) -> bool {
        self.mimetype
            .as_deref()
            .map(|mime| mime.starts_with("image/"))
            .unwrap_or(false)
    }

    /// Name offered to the browser when saving a download.
    pub fn download_name(&self) -> &str {
        if self.original_name.is_empty() {
            &self.filename
        } else {
            &self.original_name
        }
    }

    /// Returns `true` when the file belongs to the given cache view.
    pub fn matches_kind(&self, kind: FileKind) -> bool {
        match kind {
            FileKind::All => !self.is_trashed(),
            FileKind::Photo => !self.is_trashed() && self.is_image_mime(),
            FileKind::Trash => self.is_trashed(),
            FileKind::Favorites => !self.is_trashed() && self.is_favorite,
        }
    }

    /// Applies the populated fields of a partial update.
    pub fn apply_patch(&mut self, patch: &FilePatch) {
        if let Some(original_name) = patch.original_name.as_ref() {
            self.original_name = original_name.clone();
        }
        if let Some(is_favorite) = patch.is_favorite {
            self.is_favorite = is_favorite;
        }
        if let Some(deleted_at) = patch.deleted_at.as_ref() {
            self.deleted_at = deleted_at.clone();
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Partial update merged into a cached [`FileItem`].
pub struct FilePatch {
    /// Replacement display name.
    pub original_name: Option<String>,
    /// Replacement favorite flag.
    pub is_favorite: Option<bool>,
    /// Replacement deletion timestamp; `Some(None)` restores the file from the trash.
    pub deleted_at: Option<Option<String>>,
    /// Replacement size.
    pub size: Option<u64>,
}

impl FilePatch {
    /// Patch that only sets the favorite flag.
    pub fn favorite(is_favorite: bool) -> Self {
        Self {
            is_favorite: Some(is_favorite),
            ..Self::default()
        }
    }

    /// Patch that clears the deletion timestamp.
    pub fn restored() -> Self {
        Self {
            deleted_at: Some(None),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Server-side list type and matching files-cache view.
pub enum FileKind {
    /// Everything not in the trash.
    #[default]
    All,
    /// Non-trashed images (by MIME type).
    Photo,
    /// Soft-deleted files.
    Trash,
    /// Non-trashed favorites.
    Favorites,
}

impl FileKind {
    /// Query-string value understood by `GET /files?type=`.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Photo => "photo",
            Self::Trash => "trash",
            Self::Favorites => "favorites",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(id: u64) -> FileItem {
        FileItem {
            id: FileId(id),
            filename: format!("{id}.png"),
            original_name: format!("photo-{id}.png"),
            size: 10,
            mimetype: Some("image/png".to_string()),
            is_favorite: false,
            deleted_at: None,
        }
    }

    #[test]
    fn file_item_reads_backend_camel_case_payload() {
        let value = json!({
            "id": 7,
            "filename": "a1b2.pdf",
            "originalName": "report.pdf",
            "size": 2048,
            "mimetype": "application/pdf",
            "isFavorite": true,
            "deletedAt": null,
            "userId": 3
        });

        let file: FileItem = serde_json::from_value(value).expect("deserialize");
        assert_eq!(file.id, FileId(7));
        assert_eq!(file.original_name, "report.pdf");
        assert!(file.is_favorite);
        assert!(!file.is_trashed());
    }

    #[test]
    fn kinds_follow_trash_and_favorite_conventions() {
        let mut trashed_favorite = item(1);
        trashed_favorite.is_favorite = true;
        trashed_favorite.deleted_at = Some("2025-01-02T00:00:00Z".to_string());

        assert!(trashed_favorite.matches_kind(FileKind::Trash));
        assert!(!trashed_favorite.matches_kind(FileKind::Favorites));
        assert!(!trashed_favorite.matches_kind(FileKind::All));
        assert!(!trashed_favorite.matches_kind(FileKind::Photo));

        let mut document = item(2);
        document.mimetype = Some("application/pdf".to_string());
        assert!(document.matches_kind(FileKind::All));
        assert!(!document.matches_kind(FileKind::Photo));
    }

    #[test]
    fn patch_only_touches_populated_fields() {
        let mut file = item(3);
        file.deleted_at = Some("2025-01-02T00:00:00Z".to_string());

        file.apply_patch(&FilePatch::restored());
        assert_eq!(file.deleted_at, None);
        assert_eq!(file.original_name, "photo-3.png");

        file.apply_patch(&FilePatch::favorite(true));
        assert!(file.is_favorite);
        assert_eq!(file.size, 10);
    }

    #[test]
    fn kind_query_strings_match_backend_values() {
        assert_eq!(FileKind::All.as_query(), "all");
        assert_eq!(FileKind::Favorites.as_query(), "favorites");
        assert_eq!(
            serde_json::to_string(&FileKind::Trash).expect("serialize"),
            "\"trash\""
        );
        assert_eq!("12".parse::<FileId>().expect("parse"), FileId(12));
    }
}
