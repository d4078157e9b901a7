//! Aggregate storage statistics for the statistics page.

use super::category::{classify, FileCategory};
use super::types::FileItem;

/// Storage quota shown on the statistics page (10 GiB).
pub const DEFAULT_STORAGE_QUOTA_BYTES: u64 = 10 * 1024 * 1024 * 1024;

const TOP_CATEGORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Count and byte total for one category.
pub struct CategoryStats {
    /// Category the totals belong to.
    pub category: FileCategory,
    /// Number of files.
    pub count: usize,
    /// Sum of file sizes in bytes.
    pub size: u64,
}

impl CategoryStats {
    /// Share of `total` bytes taken by this category, in percent.
    pub fn share_of(&self, total: u64) -> f64 {
        percent(self.size, total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Quota pressure bucket used to color the usage bar.
pub enum UsageLevel {
    /// At most 70% used.
    Normal,
    /// Above 70% used.
    Active,
    /// Above 90% used.
    Exception,
}

impl UsageLevel {
    /// Buckets a usage percentage.
    pub fn from_percent(percent: f64) -> Self {
        if percent > 90.0 {
            Self::Exception
        } else if percent > 70.0 {
            Self::Active
        } else {
            Self::Normal
        }
    }

    /// Stable token used in DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Active => "active",
            Self::Exception => "exception",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Statistics derived from the active, trash, and favorites lists.
pub struct StorageStats {
    /// Number of non-trashed files.
    pub total_files: usize,
    /// Bytes used by non-trashed files.
    pub total_size: u64,
    /// Mean size of a non-trashed file.
    pub average_size: u64,
    /// Largest non-trashed file size, if any.
    pub largest: Option<u64>,
    /// Smallest non-trashed file size, if any.
    pub smallest: Option<u64>,
    /// Non-empty categories in display order.
    pub categories: Vec<CategoryStats>,
    /// Non-empty categories ordered by size, largest first, at most five.
    pub top_categories: Vec<CategoryStats>,
    /// Number of trashed files.
    pub trash_count: usize,
    /// Bytes held in the trash.
    pub trash_size: u64,
    /// Number of favorite files.
    pub favorites_count: usize,
    /// Bytes held by favorites.
    pub favorites_size: u64,
    /// Storage quota in bytes.
    pub quota: u64,
}

impl StorageStats {
    /// Computes statistics; trashed entries in `all` are ignored for the active totals.
    pub fn compute(all: &[FileItem], trash: &[FileItem], favorites: &[FileItem], quota: u64) -> Self {
        let active: Vec<&FileItem> = all.iter().filter(|file| !file.is_trashed()).collect();
        let total_files = active.len();
        let total_size: u64 = active.iter().map(|file| file.size).sum();
        let average_size = if total_files == 0 {
            0
        } else {
            total_size / total_files as u64
        };

        let categories: Vec<CategoryStats> = FileCategory::CONCRETE
            .iter()
            .map(|category| {
                let members = active
                    .iter()
                    .filter(|file| classify(&file.filename) == *category);
                let (count, size) =
                    members.fold((0, 0), |(count, size), file| (count + 1, size + file.size));
                CategoryStats {
                    category: *category,
                    count,
                    size,
                }
            })
            .filter(|stats| stats.count > 0)
            .collect();

        let mut top_categories = categories.clone();
        top_categories.sort_by(|a, b| b.size.cmp(&a.size));
        top_categories.truncate(TOP_CATEGORY_LIMIT);

        Self {
            total_files,
            total_size,
            average_size,
            largest: active.iter().map(|file| file.size).max(),
            smallest: active.iter().map(|file| file.size).min(),
            categories,
            top_categories,
            trash_count: trash.len(),
            trash_size: trash.iter().map(|file| file.size).sum(),
            favorites_count: favorites.len(),
            favorites_size: favorites.iter().map(|file| file.size).sum(),
            quota,
        }
    }

    /// Active plus trashed bytes.
    pub fn combined_size(&self) -> u64 {
        self.total_size + self.trash_size
    }

    /// Active bytes over the quota, in percent, uncapped.
    pub fn usage_percent(&self) -> f64 {
        percent(self.total_size, self.quota)
    }

    /// Remaining quota in bytes.
    pub fn free_bytes(&self) -> u64 {
        self.quota.saturating_sub(self.total_size)
    }

    /// Usage bucket for the quota bar.
    pub fn usage_level(&self) -> UsageLevel {
        UsageLevel::from_percent(self.usage_percent())
    }

    /// Returns `true` when there are no active files to report on.
    pub fn is_empty(&self) -> bool {
        self.total_files == 0
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
