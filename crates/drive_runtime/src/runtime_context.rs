//! Runtime provider and context wiring for the dashboard.
//!
//! The provider owns the store signals, the reducer dispatch callbacks, the effect queue, and the
//! backend handle. It also implements [`ActionHost`] so async actions can write back into the
//! stores and reach the browser.

use std::{future::Future, rc::Rc};

use drive_model::{DownloadedFile, DriveApi, DriveApiFuture, FileKind};
use leptos::*;

use crate::{
    actions::ActionHost,
    effect_executor,
    model::{FilesState, ToastLevel, ToastState, UiState},
    reducer::{
        reduce_files, reduce_toasts, reduce_ui, FilesAction, RuntimeEffect, ToastAction, UiAction,
    },
};

#[derive(Clone, Copy)]
/// Leptos context for reading dashboard state and dispatching store actions.
pub struct DriveRuntimeContext {
    /// Backend the actions talk to.
    pub api: StoredValue<Rc<dyn DriveApi>>,
    /// Files cache for the current page.
    pub files: RwSignal<FilesState>,
    /// Selection and view preferences.
    pub ui: RwSignal<UiState>,
    /// Visible toasts.
    pub toasts: RwSignal<ToastState>,
    /// Queue of reducer-emitted effects.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Cache kind of the mounted page, refreshed after uploads.
    pub active_kind: RwSignal<Option<FileKind>>,
    /// Files-cache dispatch.
    pub dispatch_files: Callback<FilesAction>,
    /// Selection-store dispatch.
    pub dispatch_ui: Callback<UiAction>,
    /// Toast dispatch.
    pub dispatch_toast: Callback<ToastAction>,
}

impl DriveRuntimeContext {
    /// Dispatches a selection-store action.
    pub fn dispatch_ui_action(&self, action: UiAction) {
        self.dispatch_ui.call(action);
    }

    /// Shows a toast.
    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        self.dispatch_toast.call(ToastAction::Push {
            level,
            message: message.into(),
        });
    }

    /// Runs an async action on the local executor with the backend and this context as host.
    pub fn spawn_action<F, Fut>(self, action: F)
    where
        F: FnOnce(Rc<dyn DriveApi>, DriveRuntimeContext) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.api.get_value(), self));
    }
}

impl ActionHost for DriveRuntimeContext {
    fn files(&self, action: FilesAction) {
        self.dispatch_files.call(action);
    }

    fn ui(&self, action: UiAction) {
        self.dispatch_ui.call(action);
    }

    fn toast(&self, level: ToastLevel, message: String) {
        self.notify(level, message);
    }

    fn save_file(&self, file_name: &str, file: &DownloadedFile) -> Result<(), String> {
        drive_web::save_download(file_name, file)
    }

    fn pause(&self, ms: u32) -> DriveApiFuture<'_, ()> {
        Box::pin(drive_web::pause(ms))
    }

    fn store_token(&self, token: &str) -> Result<(), String> {
        drive_web::store_token(token)
    }

    fn clear_token(&self) -> Result<(), String> {
        drive_web::clear_token()
    }

    fn navigate(&self, path: &str) -> Result<(), String> {
        drive_web::redirect_to(path)
    }
}

#[component]
/// Provides [`DriveRuntimeContext`] to descendant components.
pub fn DriveProvider(
    /// Backend adapter assembled by the entry layer.
    api: Rc<dyn DriveApi>,
    children: Children,
) -> impl IntoView {
    let api = store_value(api);
    let files = create_rw_signal(FilesState::default());
    let ui = create_rw_signal(UiState::default());
    let toasts = create_rw_signal(ToastState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let active_kind = create_rw_signal(None::<FileKind>);

    let dispatch_files = Callback::new(move |action: FilesAction| {
        let mut next = files.get_untracked();
        match reduce_files(&mut next, action) {
            Ok(()) => {
                if files.with_untracked(|current| *current != next) {
                    files.set(next);
                }
            }
            Err(err) => logging::warn!("files reducer error: {err}"),
        }
    });

    let dispatch_ui = Callback::new(move |action: UiAction| {
        let mut next = ui.get_untracked();
        reduce_ui(&mut next, action);
        if ui.with_untracked(|current| *current != next) {
            ui.set(next);
        }
    });

    let dispatch_toast = Callback::new(move |action: ToastAction| {
        let mut next = toasts.get_untracked();
        let new_effects = reduce_toasts(&mut next, action);
        toasts.set(next);
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DriveRuntimeContext {
        api,
        files,
        ui,
        toasts,
        effects,
        active_kind,
        dispatch_files,
        dispatch_ui,
        dispatch_toast,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DriveRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DriveProvider`].
pub fn use_drive_runtime() -> DriveRuntimeContext {
    use_context::<DriveRuntimeContext>().expect("DriveRuntimeContext not provided")
}
