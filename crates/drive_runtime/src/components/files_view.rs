use drive_model::{apply_view, FileId, FileItem, FileKind};
use drive_ui::{EmptyState, IconName, Notice, TextTone};
use leptos::{ev, html, *};
use wasm_bindgen::JsCast;

use super::{file_card::FileEntry, toolbar::FileToolbar};
use crate::{
    actions,
    keyboard::{command_for, KeyCommand, KeyInput},
    runtime_context::use_drive_runtime,
    selection::{MarqueeSession, Modifiers, Rect},
    selection_binding::SelectionBinding,
};

fn client_point(ev: &web_sys::MouseEvent) -> (f64, f64) {
    (f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn item_rects(container: &web_sys::Element) -> Vec<(FileId, Rect)> {
    let Ok(nodes) = container.query_selector_all("[data-file-id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|element| {
            let id = element.get_attribute("data-file-id")?.parse::<FileId>().ok()?;
            let bounds = element.get_bounding_client_rect();
            Some((
                id,
                Rect {
                    left: bounds.left(),
                    top: bounds.top(),
                    right: bounds.right(),
                    bottom: bounds.bottom(),
                },
            ))
        })
        .collect()
}

fn marquee_style(rect: &Rect) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px;",
        rect.left,
        rect.top,
        rect.width(),
        rect.height()
    )
}

#[component]
/// Selectable grid/list of files with the selection toolbar.
///
/// Items come from the files cache filtered by `kind` unless `items` is passed. The selection is
/// read from `selected_ids` and written to `on_select` when those are passed, and from/to the UI
/// store otherwise.
pub fn FilesView(
    /// Cache view listed when `items` is absent; also the list refetched after mutations.
    kind: FileKind,
    /// Page-owned list replacing the cache view.
    #[prop(optional, into)]
    items: Option<Signal<Vec<FileItem>>>,
    /// Controlled selection.
    #[prop(optional, into)]
    selected_ids: Option<Signal<Vec<FileId>>>,
    /// Receives selection changes instead of the UI store.
    #[prop(optional)]
    on_select: Option<Callback<Vec<FileId>>>,
    /// Replaces the cache-patching favorite toggle.
    #[prop(optional)]
    on_toggle_favorite: Option<Callback<FileItem>>,
    /// Told which ids the toolbar removed.
    #[prop(optional)]
    on_removed: Option<Callback<Vec<FileId>>>,
    /// Empty-state heading.
    #[prop(optional, into)]
    empty_title: Option<String>,
) -> impl IntoView {
    let runtime = use_drive_runtime();
    let is_trash = kind == FileKind::Trash;
    let empty_title = empty_title.unwrap_or_else(|| "No files yet".to_string());
    let binding =
        SelectionBinding::new(runtime.ui, runtime.dispatch_ui, selected_ids, on_select);

    let visible = create_memo(move |_| {
        let query = runtime.ui.with(|ui| ui.view_query());
        match items {
            Some(items) => items.with(|files| apply_view(files, &query)),
            None => runtime
                .files
                .with(|cache| apply_view(&cache.files_of_kind(kind), &query)),
        }
    });
    let visible_ids =
        create_memo(move |_| visible.with(|files| files.iter().map(|file| file.id).collect::<Vec<_>>()));

    let selection = Signal::derive(move || binding.selected());
    let selected_files = move || {
        let ids = selection.get_untracked();
        let pool = match items {
            Some(items) => items.get_untracked(),
            None => runtime.files.with_untracked(|cache| cache.files_for_ids(&ids)),
        };
        pool.into_iter()
            .filter(|file| ids.contains(&file.id))
            .collect::<Vec<_>>()
    };

    let on_pick = Callback::new(move |(id, modifiers): (FileId, Modifiers)| {
        binding.pick(&visible_ids.get_untracked(), id, modifiers);
    });

    let toggle_favorite = on_toggle_favorite.unwrap_or_else(|| {
        Callback::new(move |file: FileItem| {
            runtime.spawn_action(move |api, host| async move {
                actions::toggle_favorite(api.as_ref(), &host, &file, true).await;
            });
        })
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let Some(command) = command_for(&KeyInput::from_event(&ev)) else {
            return;
        };
        if command == KeyCommand::SelectAll {
            ev.prevent_default();
        }
        binding.apply_key(command, &visible_ids.get_untracked());
    });
    on_cleanup(move || keydown.remove());

    let surface = create_node_ref::<html::Div>();
    let marquee = create_rw_signal(None::<MarqueeSession>);
    let marquee_rect = create_rw_signal(None::<Rect>);

    let pointer_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = client_point(&ev);
        let Some((rect, next)) = marquee.with_untracked(|session| {
            let session = session.as_ref()?;
            if marquee_rect.get_untracked().is_none() && !session.is_drag(pointer) {
                return None;
            }
            let items = surface
                .get_untracked()
                .map(|surface| item_rects(&surface))
                .unwrap_or_default();
            Some((session.rect_to(pointer), session.selection_at(pointer, &items)))
        }) else {
            return;
        };
        marquee_rect.set(Some(rect));
        binding.commit(next, binding.anchor());
    });
    on_cleanup(move || pointer_move.remove());

    let pointer_up = window_event_listener(ev::pointerup, move |ev| {
        if marquee.with_untracked(Option::is_none) {
            return;
        }
        let dragged = marquee_rect.get_untracked().is_some();
        marquee.set(None);
        marquee_rect.set(None);
        binding.release_background(dragged, Modifiers::from_mouse(&ev));
    });
    on_cleanup(move || pointer_up.remove());

    let on_remove = Callback::new(move |()| {
        let ids = selection.get_untracked();
        runtime.spawn_action(move |api, host| async move {
            let removed =
                actions::remove_files(api.as_ref(), &host, ids.clone(), kind, is_trash).await;
            if removed {
                binding.commit(Vec::new(), None);
                if let Some(on_removed) = on_removed {
                    on_removed.call(ids);
                }
            }
        });
    });
    let on_restore = Callback::new(move |()| {
        let ids = selection.get_untracked();
        runtime.spawn_action(move |api, host| async move {
            if actions::restore_files(api.as_ref(), &host, ids.clone()).await {
                binding.commit(Vec::new(), None);
                if let Some(on_removed) = on_removed {
                    on_removed.call(ids);
                }
            }
        });
    });
    let on_download = Callback::new(move |()| {
        let files = selected_files();
        runtime.spawn_action(move |api, host| async move {
            actions::download_files(api.as_ref(), &host, &files).await;
        });
    });

    let load_error = move || {
        if items.is_some() {
            return None;
        }
        runtime.files.with(|cache| cache.error.clone())
    };
    let is_loading = move || items.is_none() && runtime.files.with(|cache| cache.is_loading);

    view! {
        <section
            class="drive-files"
            data-view=move || runtime.ui.with(|ui| ui.view_mode.token())
            data-kind=kind.as_query()
        >
            <FileToolbar
                kind
                selected_count=Signal::derive(move || selection.with(Vec::len))
                total_count=Signal::derive(move || visible_ids.with(Vec::len))
                on_select_all=Callback::new(move |()| {
                    binding.apply_key(KeyCommand::SelectAll, &visible_ids.get_untracked());
                })
                on_deselect_all=Callback::new(move |()| binding.commit(Vec::new(), None))
                on_download
                on_remove
                on_restore
            />
            {move || {
                load_error()
                    .map(|error| {
                        view! {
                            <Notice tone=TextTone::Danger icon=IconName::Warning>
                                {error}
                            </Notice>
                        }
                    })
            }}
            <div
                class="drive-files-surface"
                node_ref=surface
                role="listbox"
                aria-multiselectable="true"
                aria-busy=move || is_loading().to_string()
                on:pointerdown=move |ev: ev::PointerEvent| {
                    if ev.button() != 0 {
                        return;
                    }
                    marquee.set(Some(MarqueeSession::begin(
                        client_point(&ev),
                        &selection.get_untracked(),
                        Modifiers::from_mouse(&ev),
                    )));
                }
            >
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=move || {
                        let hint = if is_loading() {
                            "Loading files..."
                        } else {
                            "Upload files or change the search and filter."
                        };
                        view! {
                            <EmptyState
                                icon=IconName::Cloud
                                title=empty_title.clone()
                                hint=hint.to_string()
                            />
                        }
                    }
                >
                    <For
                        each=move || visible.get()
                        key=|file| (file.id, file.is_favorite, file.original_name.clone())
                        children=move |file: FileItem| {
                            let id = file.id;
                            view! {
                                <FileEntry
                                    file
                                    selected=Signal::derive(move || selection.with(|ids| ids.contains(&id)))
                                    show_favorite=!is_trash
                                    on_pick
                                    on_toggle_favorite=toggle_favorite
                                />
                            }
                        }
                    />
                </Show>
                {move || {
                    marquee_rect
                        .get()
                        .map(|rect| {
                            view! {
                                <div
                                    class="drive-marquee"
                                    aria-hidden="true"
                                    style=marquee_style(&rect)
                                ></div>
                            }
                        })
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_overlay_is_positioned_in_client_space() {
        let rect = Rect::from_corners((30.0, 40.0), (10.0, 15.0));
        assert_eq!(
            marquee_style(&rect),
            "position: fixed; left: 10px; top: 15px; width: 20px; height: 25px;"
        );
    }
}
