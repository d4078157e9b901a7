//! Dashboard UI composition: layout chrome, the files view, and the pages.

mod auth;
mod file_card;
mod files_view;
mod header;
mod pages;
mod profile;
mod sidebar;
mod statistics;
mod toasts;
mod toolbar;
mod upload;

use drive_model::FileCategory;
use drive_ui::IconName;

pub use self::{
    files_view::FilesView,
    pages::{AuthPage, DashboardLayout, FavoritesPage, FilesPage, ProfilePage, StatisticsPage},
    toasts::ToastViewport,
};

fn category_icon(category: FileCategory) -> IconName {
    match category {
        FileCategory::Image => IconName::Image,
        FileCategory::Document => IconName::Document,
        FileCategory::Video => IconName::Video,
        FileCategory::Audio => IconName::Audio,
        FileCategory::Archive => IconName::Archive,
        FileCategory::All | FileCategory::Other => IconName::File,
    }
}
