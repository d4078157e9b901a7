use super::*;

#[component]
/// Inline notice used for toasts and form errors.
pub fn Notice(
    #[prop(default = TextTone::Accent)] tone: TextTone,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let dismissable = on_dismiss.is_some();
    let role = if matches!(tone, TextTone::Danger) {
        "alert"
    } else {
        "status"
    };

    view! {
        <div
            class=merge_layout_class("ui-notice", layout_class)
            role=role
            data-ui-primitive="true"
            data-ui-kind="notice"
            data-ui-tone=tone.token()
            data-ui-dismissable=bool_token(dismissable)
            on:click=move |ev| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <span class="ui-notice-message">{children()}</span>
        </div>
    }
}
