use std::rc::Rc;

use drive_model::DriveApi;
use drive_runtime::{
    routes::{
        files_route, ARCHIVES_ROUTE, AUDIO_ROUTE, AUTH_ROUTE, DASHBOARD_ROUTE, DOCUMENTS_ROUTE,
        FAVORITES_ROUTE, PHOTOS_ROUTE, PROFILE_ROUTE, STATISTICS_ROUTE, TRASH_ROUTE,
        VIDEOS_ROUTE,
    },
    AuthPage, DashboardLayout, DriveProvider, FavoritesPage, FilesPage, ProfilePage,
    StatisticsPage, ToastViewport,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let api: Rc<dyn DriveApi> = Rc::new(drive_web::drive_api());

    view! {
        <Title text="CloudDrive" />
        <Meta name="description" content="Upload, browse, and manage your files in the cloud." />

        <DriveProvider api>
            <Router>
                <Routes>
                    <Route path=AUTH_ROUTE view=AuthPage />
                    <Route path=DASHBOARD_ROUTE view=|| files_page(DASHBOARD_ROUTE) />
                    <Route path=PHOTOS_ROUTE view=|| files_page(PHOTOS_ROUTE) />
                    <Route path=DOCUMENTS_ROUTE view=|| files_page(DOCUMENTS_ROUTE) />
                    <Route path=VIDEOS_ROUTE view=|| files_page(VIDEOS_ROUTE) />
                    <Route path=AUDIO_ROUTE view=|| files_page(AUDIO_ROUTE) />
                    <Route path=ARCHIVES_ROUTE view=|| files_page(ARCHIVES_ROUTE) />
                    <Route path=TRASH_ROUTE view=|| files_page(TRASH_ROUTE) />
                    <Route
                        path=FAVORITES_ROUTE
                        view=|| view! { <Dashboard><FavoritesPage /></Dashboard> }
                    />
                    <Route
                        path=STATISTICS_ROUTE
                        view=|| view! { <Dashboard><StatisticsPage /></Dashboard> }
                    />
                    <Route
                        path=PROFILE_ROUTE
                        view=|| view! { <Dashboard><ProfilePage /></Dashboard> }
                    />
                    <Route path="/*any" view=|| view! { <Redirect path=DASHBOARD_ROUTE /> } />
                </Routes>
            </Router>
            <ToastViewport />
        </DriveProvider>
    }
}

fn files_page(path: &'static str) -> View {
    match files_route(path) {
        Some(route) => view! { <Dashboard><FilesPage route /></Dashboard> }.into_view(),
        None => view! { <Redirect path=DASHBOARD_ROUTE /> }.into_view(),
    }
}

#[component]
/// Dashboard chrome for signed-in users; sends everyone else to the sign-in page.
fn Dashboard(children: ChildrenFn) -> impl IntoView {
    let signed_in = drive_web::current_token().is_some();
    let children = store_value(children);

    view! {
        <Show when=move || signed_in fallback=|| view! { <Redirect path=AUTH_ROUTE /> }>
            <DashboardLayout>{children.with_value(|children| children())}</DashboardLayout>
        </Show>
    }
}
