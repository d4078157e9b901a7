use drive_model::{FileCategory, FileId, FileItem, FileKind};
use drive_ui::{Heading, Stack};
use leptos::*;

use super::{
    auth::AuthPanel, files_view::FilesView, header::DashboardHeader, profile::ProfilePanel,
    sidebar::Sidebar, statistics::StatisticsPanel,
};
use crate::{actions, reducer::UiAction, routes::FilesRoute, runtime_context::use_drive_runtime};

/// Drops `removed` ids from a page-owned list and selection.
fn drop_ids(items: RwSignal<Vec<FileItem>>, selected: RwSignal<Vec<FileId>>, removed: &[FileId]) {
    items.update(|items| items.retain(|file| !removed.contains(&file.id)));
    selected.update(|selected| selected.retain(|id| !removed.contains(id)));
}

#[component]
/// Header, sidebar, and the page content.
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="drive-shell">
            <DashboardHeader />
            <div class="drive-body">
                <Sidebar />
                <main class="drive-main">{children()}</main>
            </div>
        </div>
    }
}

#[component]
/// Cache-backed files page for one [`FilesRoute`].
pub fn FilesPage(route: FilesRoute) -> impl IntoView {
    let runtime = use_drive_runtime();
    let FilesRoute {
        title,
        kind,
        filter,
    } = route;

    runtime.dispatch_ui_action(UiAction::ResetForPage { filter });
    runtime.active_kind.set(Some(kind));
    runtime.spawn_action(move |api, host| async move {
        actions::load_files(api.as_ref(), &host, kind).await;
    });

    let empty_title = match (kind, filter) {
        (FileKind::Trash, _) => "The trash is empty".to_string(),
        (_, FileCategory::All) => "No files yet".to_string(),
        (_, category) => format!("No {} yet", category.label().to_lowercase()),
    };

    view! {
        <Stack layout_class="drive-page">
            <Heading level=1>{title}</Heading>
            <FilesView kind empty_title />
        </Stack>
    }
}

#[component]
/// Favorites list kept by the page; files leave it when unfavorited or removed.
pub fn FavoritesPage() -> impl IntoView {
    let runtime = use_drive_runtime();
    let items = create_rw_signal(Vec::<FileItem>::new());
    let selected = create_rw_signal(Vec::<FileId>::new());

    runtime.dispatch_ui_action(UiAction::ResetForPage {
        filter: FileCategory::All,
    });
    runtime.active_kind.set(None);
    runtime.spawn_action(move |api, host| async move {
        let favorites = actions::load_local_list(api.as_ref(), &host, FileKind::Favorites).await;
        items.set(favorites);
    });

    let on_toggle_favorite = Callback::new(move |file: FileItem| {
        runtime.spawn_action(move |api, host| async move {
            let Some(updated) = actions::toggle_favorite(api.as_ref(), &host, &file, false).await
            else {
                return;
            };
            if updated.is_favorite {
                items.update(|items| {
                    if let Some(slot) = items.iter_mut().find(|item| item.id == updated.id) {
                        *slot = updated;
                    }
                });
            } else {
                drop_ids(items, selected, &[updated.id]);
            }
        });
    });

    let on_removed = Callback::new(move |removed: Vec<FileId>| {
        drop_ids(items, selected, &removed);
    });

    view! {
        <Stack layout_class="drive-page">
            <Heading level=1>"Favorites"</Heading>
            <FilesView
                kind=FileKind::Favorites
                items=items
                selected_ids=selected
                on_select=Callback::new(move |ids| selected.set(ids))
                on_toggle_favorite
                on_removed
                empty_title="No favorites yet"
            />
        </Stack>
    }
}

#[component]
/// Storage statistics page.
pub fn StatisticsPage() -> impl IntoView {
    use_drive_runtime().active_kind.set(None);
    view! { <StatisticsPanel /> }
}

#[component]
/// Profile page.
pub fn ProfilePage() -> impl IntoView {
    use_drive_runtime().active_kind.set(None);
    view! { <ProfilePanel /> }
}

#[component]
/// Login and registration page; rendered outside [`DashboardLayout`].
pub fn AuthPage() -> impl IntoView {
    view! { <AuthPanel /> }
}
