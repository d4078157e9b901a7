use drive_ui::{IconName, Notice, TextTone};
use leptos::*;

use crate::{
    model::{Toast, ToastLevel},
    reducer::ToastAction,
    runtime_context::use_drive_runtime,
};

fn tone_for(level: ToastLevel) -> TextTone {
    match level {
        ToastLevel::Success => TextTone::Success,
        ToastLevel::Info => TextTone::Accent,
        ToastLevel::Warning => TextTone::Warning,
        ToastLevel::Error => TextTone::Danger,
    }
}

fn icon_for(level: ToastLevel) -> IconName {
    match level {
        ToastLevel::Success => IconName::Check,
        ToastLevel::Info => IconName::Info,
        ToastLevel::Warning | ToastLevel::Error => IconName::Warning,
    }
}

#[component]
/// Stack of live toasts; clicking one dismisses it.
pub fn ToastViewport() -> impl IntoView {
    let runtime = use_drive_runtime();

    view! {
        <div class="drive-toasts" aria-live="polite">
            <For
                each=move || runtime.toasts.with(|state| state.toasts.clone())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let Toast { id, level, message } = toast;
                    view! {
                        <Notice
                            tone=tone_for(level)
                            icon=icon_for(level)
                            layout_class=level.token()
                            on_dismiss=Callback::new(move |_| {
                                runtime.dispatch_toast.call(ToastAction::Dismiss(id));
                            })
                        >
                            {message}
                        </Notice>
                    }
                }
            />
        </div>
    }
}
