//! CloudDrive dashboard runtime: stores, reducers, selection engine, async actions, and pages.

pub mod actions;
pub mod components;
mod effect_executor;
pub mod keyboard;
pub mod model;
pub mod reducer;
pub mod routes;
mod runtime_context;
pub mod selection;
pub mod selection_binding;

pub use actions::ActionHost;
pub use components::{
    AuthPage, DashboardLayout, FavoritesPage, FilesPage, FilesView, ProfilePage, StatisticsPage,
    ToastViewport,
};
pub use model::*;
pub use reducer::{
    reduce_files, reduce_toasts, reduce_ui, FilesAction, RuntimeEffect, StoreError, ToastAction,
    UiAction,
};
pub use runtime_context::{use_drive_runtime, DriveProvider, DriveRuntimeContext};
pub use selection_binding::SelectionBinding;
