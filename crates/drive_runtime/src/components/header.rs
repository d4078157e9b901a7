use drive_ui::{ButtonVariant, Cluster, ConfirmButton, Icon, IconName, IconSize, LayoutGap, LayoutJustify};
use leptos::*;

use crate::{
    actions,
    routes::{DASHBOARD_ROUTE, PROFILE_ROUTE},
    runtime_context::use_drive_runtime,
};

#[component]
/// Top bar with the logo, the profile link, and logout.
pub(super) fn DashboardHeader() -> impl IntoView {
    let runtime = use_drive_runtime();

    view! {
        <header class="drive-header">
            <a class="drive-logo" href=DASHBOARD_ROUTE>
                <Icon icon=IconName::Cloud size=IconSize::Lg />
                <span class="drive-logo-text">"CloudDrive"</span>
            </a>
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                <a class="drive-header-profile" href=PROFILE_ROUTE aria-label="Profile" title="Profile">
                    <Icon icon=IconName::User />
                </a>
                <ConfirmButton
                    label="Log out".to_string()
                    prompt="Log out of CloudDrive?".to_string()
                    variant=ButtonVariant::Quiet
                    leading_icon=IconName::Logout
                    on_confirm=Callback::new(move |()| actions::logout(&runtime))
                />
            </Cluster>
        </header>
    }
}
