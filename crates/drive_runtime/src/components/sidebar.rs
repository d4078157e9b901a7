use drive_ui::{NavItem, NavList};
use leptos::*;
use leptos_router::use_location;

use super::upload::UploadButton;
use crate::routes::{is_current, NAV_ENTRIES};

#[component]
/// Upload button and section navigation.
pub(super) fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="drive-sidebar">
            <UploadButton />
            <NavList layout_class="drive-nav" aria_label="Sections">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| {
                        let (path, label, icon) = (entry.path, entry.label, entry.icon);
                        view! {
                            <NavItem
                                href=path
                                icon
                                selected=Signal::derive(move || pathname.with(|current| is_current(current, path)))
                            >
                                {label}
                            </NavItem>
                        }
                    })
                    .collect_view()}
            </NavList>
        </aside>
    }
}
