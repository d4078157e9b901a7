use super::*;

#[component]
/// Shared toolbar primitive.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tablist primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tablist", layout_class)
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tablist"
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab button rendered through [`Button`].
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="tab".to_string()
            aria_pressed=selected.clone()
            selected=selected
            title=title
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Vertical navigation list.
pub fn NavList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-nav-list", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="nav-list"
        >
            <ul role="list">{children()}</ul>
        </nav>
    }
}

#[component]
/// Navigation link that marks itself as the current page when `selected`.
pub fn NavItem(
    #[prop(into)] href: String,
    icon: IconName,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] badge: MaybeSignal<Option<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let current = selected.clone();

    view! {
        <li
            class=merge_layout_class("ui-nav-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="nav-item"
            data-ui-selected=move || bool_token(selected.get())
        >
            <a
                href=href
                aria-current=move || current.get().then_some("page")
            >
                <Icon icon size=IconSize::Sm />
                <span class="ui-nav-item-label">{children()}</span>
                {move || badge.get().map(|badge| view! { <Badge>{badge}</Badge> })}
            </a>
        </li>
    }
}
