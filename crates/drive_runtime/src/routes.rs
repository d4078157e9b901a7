//! Dashboard route paths and the sidebar navigation table.

use drive_model::{FileCategory, FileKind};
use drive_ui::IconName;

pub use drive_model::{AUTH_ROUTE, DASHBOARD_ROUTE};

/// Images by MIME type.
pub const PHOTOS_ROUTE: &str = "/dashboard/photos";
/// Documents by extension.
pub const DOCUMENTS_ROUTE: &str = "/dashboard/documents";
/// Videos by extension.
pub const VIDEOS_ROUTE: &str = "/dashboard/videos";
/// Audio by extension.
pub const AUDIO_ROUTE: &str = "/dashboard/audio";
/// Archives by extension.
pub const ARCHIVES_ROUTE: &str = "/dashboard/archives";
/// Favorites.
pub const FAVORITES_ROUTE: &str = "/dashboard/favorites";
/// Trash.
pub const TRASH_ROUTE: &str = "/dashboard/trash";
/// Storage statistics.
pub const STATISTICS_ROUTE: &str = "/dashboard/statistics";
/// Profile.
pub const PROFILE_ROUTE: &str = "/dashboard/profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One sidebar link.
pub struct NavEntry {
    /// Target path.
    pub path: &'static str,
    /// Link text.
    pub label: &'static str,
    /// Leading icon.
    pub icon: IconName,
}

/// Sidebar links in display order.
pub const NAV_ENTRIES: [NavEntry; 9] = [
    NavEntry {
        path: DASHBOARD_ROUTE,
        label: "My files",
        icon: IconName::File,
    },
    NavEntry {
        path: PHOTOS_ROUTE,
        label: "Photos",
        icon: IconName::Image,
    },
    NavEntry {
        path: DOCUMENTS_ROUTE,
        label: "Documents",
        icon: IconName::Document,
    },
    NavEntry {
        path: VIDEOS_ROUTE,
        label: "Videos",
        icon: IconName::Video,
    },
    NavEntry {
        path: AUDIO_ROUTE,
        label: "Audio",
        icon: IconName::Audio,
    },
    NavEntry {
        path: ARCHIVES_ROUTE,
        label: "Archives",
        icon: IconName::Archive,
    },
    NavEntry {
        path: FAVORITES_ROUTE,
        label: "Favorites",
        icon: IconName::Star,
    },
    NavEntry {
        path: STATISTICS_ROUTE,
        label: "Statistics",
        icon: IconName::Chart,
    },
    NavEntry {
        path: TRASH_ROUTE,
        label: "Trash",
        icon: IconName::Trash,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a files page lists and how it starts filtered.
pub struct FilesRoute {
    /// Page heading.
    pub title: &'static str,
    /// Cache view listed by the page.
    pub kind: FileKind,
    /// Category filter applied when the page opens.
    pub filter: FileCategory,
}

/// Files pages served from the shared cache, keyed by path.
pub const FILES_ROUTES: [(&str, FilesRoute); 7] = [
    (
        DASHBOARD_ROUTE,
        FilesRoute {
            title: "My files",
            kind: FileKind::All,
            filter: FileCategory::All,
        },
    ),
    (
        PHOTOS_ROUTE,
        FilesRoute {
            title: "Photos",
            kind: FileKind::Photo,
            filter: FileCategory::All,
        },
    ),
    (
        DOCUMENTS_ROUTE,
        FilesRoute {
            title: "Documents",
            kind: FileKind::All,
            filter: FileCategory::Document,
        },
    ),
    (
        VIDEOS_ROUTE,
        FilesRoute {
            title: "Videos",
            kind: FileKind::All,
            filter: FileCategory::Video,
        },
    ),
    (
        AUDIO_ROUTE,
        FilesRoute {
            title: "Audio",
            kind: FileKind::All,
            filter: FileCategory::Audio,
        },
    ),
    (
        ARCHIVES_ROUTE,
        FilesRoute {
            title: "Archives",
            kind: FileKind::All,
            filter: FileCategory::Archive,
        },
    ),
    (
        TRASH_ROUTE,
        FilesRoute {
            title: "Trash",
            kind: FileKind::Trash,
            filter: FileCategory::All,
        },
    ),
];

/// Looks up the files page served at `path`.
pub fn files_route(path: &str) -> Option<FilesRoute> {
    FILES_ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, route)| *route)
}

/// Returns `true` when `pathname` shows `route`; a trailing slash is ignored.
pub fn is_current(pathname: &str, route: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    trimmed == route || (trimmed.is_empty() && route == "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_route_ignores_trailing_slash_only() {
        assert!(is_current("/dashboard/", DASHBOARD_ROUTE));
        assert!(is_current("/dashboard/trash", TRASH_ROUTE));
        assert!(!is_current("/dashboard/trash", DASHBOARD_ROUTE));
    }

    #[test]
    fn category_pages_list_active_files_with_a_default_filter() {
        let videos = files_route(VIDEOS_ROUTE).expect("videos route");
        assert_eq!(videos.kind, FileKind::All);
        assert_eq!(videos.filter, FileCategory::Video);

        let trash = files_route(TRASH_ROUTE).expect("trash route");
        assert_eq!(trash.kind, FileKind::Trash);
        assert_eq!(files_route(FAVORITES_ROUTE), None);
    }

    #[test]
    fn every_files_page_has_a_sidebar_entry() {
        for (path, _) in FILES_ROUTES {
            assert!(NAV_ENTRIES.iter().any(|entry| entry.path == path), "{path}");
        }
    }
}
