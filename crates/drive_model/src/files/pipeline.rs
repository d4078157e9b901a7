//! Pure sort/filter/search pipeline producing the visible file ordering.
//!
//! The pipeline is re-derived from scratch whenever one of its inputs changes: category filter
//! first, then the search substring, then the sort key. The resulting ordering is also the
//! ordering that range selection walks.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{classify, extension_of, FileCategory};
use super::types::FileItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Sort keys offered by the toolbar.
pub enum SortKey {
    /// Display name, case-insensitive.
    #[default]
    Name,
    /// Deletion timestamp, newest first.
    Date,
    /// Byte size, largest first.
    Size,
    /// Extension of the display name.
    Type,
}

impl SortKey {
    /// Every sort key in menu order.
    pub const ALL: [SortKey; 4] = [Self::Name, Self::Date, Self::Size, Self::Type];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "By name",
            Self::Date => "By date",
            Self::Size => "By size",
            Self::Type => "By type",
        }
    }

    /// Stable token used as the menu option value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Size => "size",
            Self::Type => "type",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Inputs of the view pipeline.
pub struct ViewQuery {
    /// Category filter.
    pub category: FileCategory,
    /// Free-text search matched against display names.
    pub search: String,
    /// Sort key.
    pub sort: SortKey,
}

/// Compares display names the way a locale-aware collator would for plain names: letters
/// compare case-insensitively, and only exact case differences fall back to the raw string.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

// Variant order is the ascending sort order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum DeletedAt<'a> {
    Missing,
    Unparsed(&'a str),
    At(DateTime<Utc>),
}

fn deleted_at(file: &FileItem) -> DeletedAt<'_> {
    match file.deleted_at.as_deref() {
        None => DeletedAt::Missing,
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|at| DeletedAt::At(at.with_timezone(&Utc)))
            .unwrap_or(DeletedAt::Unparsed(raw)),
    }
}

/// Newest deletion instant first. Stamps that do not parse follow the parsed ones and undated
/// files come last.
fn compare_deleted_at(a: &FileItem, b: &FileItem) -> Ordering {
    deleted_at(b).cmp(&deleted_at(a))
}

fn compare_by(sort: SortKey, a: &FileItem, b: &FileItem) -> Ordering {
    match sort {
        SortKey::Name => compare_names(&a.original_name, &b.original_name),
        SortKey::Size => b.size.cmp(&a.size),
        SortKey::Type => extension_of(&a.original_name)
            .unwrap_or_default()
            .cmp(&extension_of(&b.original_name).unwrap_or_default()),
        SortKey::Date => compare_deleted_at(a, b),
    }
}

/// Returns `true` when `file` passes the category filter and the search text.
pub fn matches_query(file: &FileItem, category: FileCategory, search: &str) -> bool {
    if !category.admits(classify(&file.filename)) {
        return false;
    }
    let needle = search.trim();
    needle.is_empty()
        || file
            .original_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
}

/// Filters, searches, and sorts `files` into the visible ordering.
pub fn apply_view(files: &[FileItem], query: &ViewQuery) -> Vec<FileItem> {
    let mut visible: Vec<FileItem> = files
        .iter()
        .filter(|file| matches_query(file, query.category, &query.search))
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare_by(query.sort, a, b));
    visible
}
