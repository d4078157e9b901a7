use drive_model::{FileCategory, FileKind, SortKey};
use drive_ui::{
    Button, ButtonVariant, Cluster, ConfirmButton, Icon, IconName, IconSize, LayoutGap,
    LayoutJustify, SelectField, Tab, TabList, Text, TextField, TextRole, ToolBar,
};
use leptos::*;

use crate::{model::ViewMode, reducer::UiAction, runtime_context::use_drive_runtime};

fn delete_prompt(is_trash: bool, count: usize) -> String {
    if is_trash {
        format!("Delete {count} file(s) forever? This cannot be undone.")
    } else {
        format!("Move {count} file(s) to the trash?")
    }
}

#[component]
/// Selection actions on the left, search/sort/filter/view controls on the right.
pub(super) fn FileToolbar(
    kind: FileKind,
    #[prop(into)] selected_count: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    on_select_all: Callback<()>,
    on_deselect_all: Callback<()>,
    on_download: Callback<()>,
    on_remove: Callback<()>,
    on_restore: Callback<()>,
) -> impl IntoView {
    let runtime = use_drive_runtime();
    let ui = runtime.ui;
    let is_trash = kind == FileKind::Trash;
    let has_selection = move || selected_count.get() > 0;

    let idle_actions = move || {
        view! {
            <Show when=move || total_count.get() != 0>
                <Button
                    variant=ButtonVariant::Quiet
                    leading_icon=IconName::Check
                    title="Select all (Ctrl+A)".to_string()
                    on_click=Callback::new(move |_| on_select_all.call(()))
                >
                    "Select all"
                </Button>
            </Show>
            <TextField
                layout_class="drive-search"
                input_type="search"
                placeholder="Search files..."
                aria_label="Search files"
                value=Signal::derive(move || ui.with(|ui| ui.search_query.clone()))
                on_input=Callback::new(move |query: String| {
                    runtime.dispatch_ui_action(UiAction::SetSearchQuery(query));
                })
            />
        }
    };

    view! {
        <ToolBar layout_class="drive-toolbar" aria_label="File actions">
            <Cluster gap=LayoutGap::Sm layout_class="drive-toolbar-selection">
                <Show when=has_selection fallback=idle_actions>
                    <Text role=TextRole::Label>
                        {move || format!("Selected: {} of {}", selected_count.get(), total_count.get())}
                    </Text>
                    <Button
                        variant=ButtonVariant::Quiet
                        leading_icon=IconName::Close
                        on_click=Callback::new(move |_| on_deselect_all.call(()))
                    >
                        "Clear selection"
                    </Button>
                    {is_trash.then(|| view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            leading_icon=IconName::Restore
                            on_click=Callback::new(move |_| on_restore.call(()))
                        >
                            "Restore"
                        </Button>
                    })}
                    {(!is_trash).then(|| view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            leading_icon=IconName::Download
                            on_click=Callback::new(move |_| on_download.call(()))
                        >
                            "Download"
                        </Button>
                    })}
                    <ConfirmButton
                        label=if is_trash { "Delete forever" } else { "Delete" }.to_string()
                        prompt=Signal::derive(move || delete_prompt(is_trash, selected_count.get()))
                        leading_icon=IconName::Trash
                        on_confirm=on_remove
                    />
                </Show>
            </Cluster>
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End layout_class="drive-toolbar-view">
                <SelectField
                    aria_label="Sort files"
                    value=Signal::derive(move || ui.with(|ui| ui.sort_key.token().to_string()))
                    on_change=Callback::new(move |raw: String| {
                        if let Some(key) = SortKey::ALL.into_iter().find(|key| key.token() == raw) {
                            runtime.dispatch_ui_action(UiAction::SetSortKey(key));
                        }
                    })
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| view! { <option value=key.token()>{key.label()}</option> })
                        .collect_view()}
                </SelectField>
                <SelectField
                    aria_label="Filter by type"
                    value=Signal::derive(move || ui.with(|ui| ui.filter.token().to_string()))
                    on_change=Callback::new(move |raw: String| {
                        if let Some(filter) = FileCategory::ALL
                            .into_iter()
                            .find(|category| category.token() == raw)
                        {
                            runtime.dispatch_ui_action(UiAction::SetFilter(filter));
                        }
                    })
                >
                    {FileCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! { <option value=category.token()>{category.label()}</option> }
                        })
                        .collect_view()}
                </SelectField>
                <TabList aria_label="View mode">
                    {[(ViewMode::Grid, IconName::Grid, "Grid"), (ViewMode::List, IconName::List, "List")]
                        .into_iter()
                        .map(|(mode, icon, label)| {
                            view! {
                                <Tab
                                    selected=Signal::derive(move || ui.with(|ui| ui.view_mode == mode))
                                    title=label.to_string()
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_ui_action(UiAction::SetViewMode(mode));
                                    })
                                >
                                    <Icon icon size=IconSize::Sm />
                                </Tab>
                            }
                        })
                        .collect_view()}
                </TabList>
            </Cluster>
        </ToolBar>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trash_prompt_warns_about_permanence() {
        assert_eq!(delete_prompt(false, 2), "Move 2 file(s) to the trash?");
        assert!(delete_prompt(true, 1).contains("cannot be undone"));
    }
}
