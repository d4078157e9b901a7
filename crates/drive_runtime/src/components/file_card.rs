use drive_model::{classify, format_bytes, FileId, FileItem};
use drive_ui::{
    Badge, CheckboxField, Icon, IconButton, IconName, IconSize, Text, TextRole, TextTone,
};
use drive_web::{endpoints, ApiConfig};
use leptos::{ev::MouseEvent, *};

use super::category_icon;
use crate::selection::Modifiers;

fn preview_url(file: &FileItem) -> Option<String> {
    file.is_image_mime()
        .then(|| ApiConfig::from_env().url(&endpoints::download_fallback(&file.filename)))
}

#[component]
/// One file rendered as a grid tile or a list row, depending on the parent's view mode.
pub(super) fn FileEntry(
    file: FileItem,
    #[prop(into)] selected: Signal<bool>,
    show_favorite: bool,
    on_pick: Callback<(FileId, Modifiers)>,
    on_toggle_favorite: Callback<FileItem>,
) -> impl IntoView {
    let id = file.id;
    let category = classify(&file.filename);
    let name = file.original_name.clone();
    let is_favorite = file.is_favorite;
    let size = format_bytes(file.size);
    let check_label = format!("Select {name}");
    let title = name.clone();
    let preview = match preview_url(&file) {
        Some(src) => view! { <img class="drive-file-thumb" src=src alt=name.clone() loading="lazy" /> }
            .into_view(),
        None => view! { <Icon icon=category_icon(category) size=IconSize::Xl /> }.into_view(),
    };
    let favorite_button = show_favorite.then(|| {
        let file = file.clone();
        let label = if is_favorite {
            "Remove from favorites"
        } else {
            "Add to favorites"
        };
        view! {
            <IconButton
                icon=if is_favorite { IconName::StarFilled } else { IconName::Star }
                layout_class="drive-file-favorite"
                aria_label=label.to_string()
                title=label.to_string()
                pressed=is_favorite
                on_click=Callback::new(move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_toggle_favorite.call(file.clone());
                })
            />
        }
    });

    view! {
        <div
            class="drive-file"
            role="option"
            data-file-id=id.to_string()
            data-category=category.token()
            aria-selected=move || selected.get().to_string()
            data-ui-selected=move || if selected.get() { "true" } else { "false" }
            on:pointerdown=|ev: ev::PointerEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                on_pick.call((id, Modifiers::from_mouse(&ev)));
            }
        >
            <CheckboxField
                layout_class="drive-file-check"
                checked=selected
                aria_label=check_label
                on_click=Callback::new(move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_pick.call((id, Modifiers::checkbox()));
                })
            />
            <div class="drive-file-preview">{preview}</div>
            <div class="drive-file-meta">
                <Text layout_class="drive-file-name" title>{name}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{size}</Text>
                <Badge>{category.label()}</Badge>
            </div>
            {favorite_button}
        </div>
    }
}
