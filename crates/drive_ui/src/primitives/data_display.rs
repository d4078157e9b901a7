use super::*;

#[component]
/// Shared card surface for file tiles, summaries, and form regions.
pub fn Card(
    #[prop(optional, into)] variant: MaybeSignal<SurfaceVariant>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=move || variant.get().token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Typography primitive for body text, labels, and captions.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            title=title
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading. `level` picks the element, clamped to `h1..=h4`.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let body = children();
    let heading = match level {
        0 | 1 => view! { <h1 class=class>{body}</h1> }.into_view(),
        2 => view! { <h2 class=class>{body}</h2> }.into_view(),
        3 => view! { <h3 class=class>{body}</h3> }.into_view(),
        _ => view! { <h4 class=class>{body}</h4> }.into_view(),
    };

    view! {
        <div
            class="ui-heading-frame"
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=TextRole::Title.token()
            data-ui-tone=tone.token()
        >
            {heading}
        </div>
    }
}

#[component]
/// Small status badge.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            title=title
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown when a list has nothing to render.
pub fn EmptyState(
    #[prop(default = IconName::Cloud)] icon: IconName,
    #[prop(into)] title: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            <Icon icon size=IconSize::Xl />
            <Text role=TextRole::Title>{title}</Text>
            {hint.map(|hint| view! { <Text tone=TextTone::Secondary>{hint}</Text> })}
        </div>
    }
}

#[component]
/// Labelled headline figure used on the statistics page.
pub fn Statistic(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] detail: MaybeSignal<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statistic", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statistic"
            data-ui-tone=tone.token()
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            <Text role=TextRole::Label tone=TextTone::Secondary>{label}</Text>
            <strong class="ui-statistic-value" data-ui-slot="value">{move || value.get()}</strong>
            <Text role=TextRole::Caption tone=TextTone::Secondary>{move || detail.get()}</Text>
        </div>
    }
}
