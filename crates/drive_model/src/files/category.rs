//! Extension-based file category classification.

use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];
const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "rtf", "odt", "ods", "odp", "pages",
    "numbers", "key",
];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "m4v", "3gp", "mpg", "mpeg", "vob", "ogv",
];
const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "flac", "aac", "ogg", "wma", "m4a", "opus", "amr", "aiff", "au",
];
const ARCHIVE_EXTENSIONS: &[&str] = &[
    "zip", "rar", "7z", "tar", "gz", "bz2", "xz", "iso", "dmg", "cab", "arj", "lzh",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Category a file falls into by extension; `All` is only meaningful as a filter.
pub enum FileCategory {
    /// Filter value that passes every file.
    #[default]
    All,
    /// Raster and vector images.
    Image,
    /// Office documents and plain text.
    Document,
    /// Video containers.
    Video,
    /// Audio formats.
    Audio,
    /// Archives and disk images.
    Archive,
    /// Anything unrecognized or without an extension.
    Other,
}

impl FileCategory {
    /// Every category in display order, `All` first.
    pub const ALL: [FileCategory; 7] = [
        Self::All,
        Self::Image,
        Self::Document,
        Self::Video,
        Self::Audio,
        Self::Archive,
        Self::Other,
    ];

    /// Categories a concrete file can be classified into.
    pub const CONCRETE: [FileCategory; 6] = [
        Self::Image,
        Self::Document,
        Self::Video,
        Self::Audio,
        Self::Archive,
        Self::Other,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All files",
            Self::Image => "Images",
            Self::Document => "Documents",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archive => "Archives",
            Self::Other => "Other",
        }
    }

    /// Stable token used in DOM attributes and CSS hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Image => "image",
            Self::Document => "document",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Archive => "archive",
            Self::Other => "other",
        }
    }

    /// Returns `true` when a file of category `file_category` passes this filter.
    pub fn admits(self, file_category: FileCategory) -> bool {
        self == Self::All || self == file_category
    }
}

/// Returns the lowercase extension of `filename`, if it has one.
///
/// Dotfiles without a further dot (for example `.env`) have no extension.
pub fn extension_of(filename: &str) -> Option<String> {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, ext) = base.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Classifies a file name into exactly one concrete category.
pub fn classify(filename: &str) -> FileCategory {
    let Some(ext) = extension_of(filename) else {
        return FileCategory::Other;
    };
    let ext = ext.as_str();
    if IMAGE_EXTENSIONS.contains(&ext) {
        FileCategory::Image
    } else if DOCUMENT_EXTENSIONS.contains(&ext) {
        FileCategory::Document
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        FileCategory::Video
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        FileCategory::Audio
    } else if ARCHIVE_EXTENSIONS.contains(&ext) {
        FileCategory::Archive
    } else {
        FileCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("Holiday.JPG"), FileCategory::Image);
        assert_eq!(classify("notes.Txt"), FileCategory::Document);
        assert_eq!(classify("clip.mkv"), FileCategory::Video);
        assert_eq!(classify("song.FLAC"), FileCategory::Audio);
        assert_eq!(classify("backup.tar.gz"), FileCategory::Archive);
    }

    #[test]
    fn names_without_known_extension_are_other() {
        assert_eq!(classify("Makefile"), FileCategory::Other);
        assert_eq!(classify(".env"), FileCategory::Other);
        assert_eq!(classify("trailing."), FileCategory::Other);
        assert_eq!(classify("binary.exe"), FileCategory::Other);
    }

    #[test]
    fn every_known_extension_maps_to_exactly_one_category() {
        let tables = [
            (FileCategory::Image, IMAGE_EXTENSIONS),
            (FileCategory::Document, DOCUMENT_EXTENSIONS),
            (FileCategory::Video, VIDEO_EXTENSIONS),
            (FileCategory::Audio, AUDIO_EXTENSIONS),
            (FileCategory::Archive, ARCHIVE_EXTENSIONS),
        ];
        for (category, table) in tables {
            for ext in table {
                let owners = tables
                    .iter()
                    .filter(|(_, other)| other.contains(ext))
                    .count();
                assert_eq!(owners, 1, "extension {ext} listed more than once");
                assert_eq!(classify(&format!("file.{ext}")), category);
            }
        }
    }

    #[test]
    fn extension_ignores_directories_in_path() {
        assert_eq!(extension_of("dir.v2/readme"), None);
        assert_eq!(extension_of("dir/readme.MD"), Some("md".to_string()));
    }

    #[test]
    fn all_filter_admits_every_category() {
        for category in FileCategory::CONCRETE {
            assert!(FileCategory::All.admits(category));
        }
        assert!(!FileCategory::Image.admits(FileCategory::Video));
    }
}
