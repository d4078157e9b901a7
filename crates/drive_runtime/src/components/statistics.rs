use drive_model::{format_bytes, CategoryStats, StorageStats};
use drive_ui::prelude::*;
use leptos::*;

use super::category_icon;
use crate::{actions, runtime_context::use_drive_runtime};

fn usage_line(stats: &StorageStats) -> String {
    format!(
        "{} of {} used ({:.1}%)",
        format_bytes(stats.total_size),
        format_bytes(stats.quota),
        stats.usage_percent()
    )
}

fn size_range(stats: &StorageStats) -> String {
    match (stats.smallest, stats.largest) {
        (Some(smallest), Some(largest)) => {
            format!("{} to {}", format_bytes(smallest), format_bytes(largest))
        }
        _ => "No files".to_string(),
    }
}

#[component]
fn StorageOverview(stats: StorageStats) -> impl IntoView {
    let level = stats.usage_level().token();
    let percent = stats.usage_percent();
    let usage = usage_line(&stats);
    let free = format!("{} free", format_bytes(stats.free_bytes()));
    let combined = format!("Including trash: {}", format_bytes(stats.combined_size()));

    view! {
        <Card layout_class="drive-stats-usage" aria_label="Storage usage">
            <Stack>
                <Heading level=3>"Storage"</Heading>
                <ProgressBar percent=percent status=level />
                <Cluster justify=LayoutJustify::Between>
                    <Text>{usage}</Text>
                    <Text tone=TextTone::Secondary>{free}</Text>
                </Cluster>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{combined}</Text>
            </Stack>
        </Card>
    }
}

fn category_line(entry: &CategoryStats, share: f64) -> String {
    format!(
        "{} in {} files ({:.1}%)",
        format_bytes(entry.size),
        entry.count,
        share
    )
}

#[component]
fn CategoryBreakdown(stats: StorageStats) -> impl IntoView {
    let total = stats.total_size;
    let rows = stats
        .top_categories
        .into_iter()
        .map(|entry| {
            let share = entry.share_of(total);
            let label = entry.category.label();
            let line = category_line(&entry, share);
            view! {
                <Stack gap=LayoutGap::Sm layout_class="drive-stats-category">
                    <Cluster justify=LayoutJustify::Between>
                        <Text>{label}</Text>
                        <Text tone=TextTone::Secondary>{line}</Text>
                    </Cluster>
                    <ProgressBar percent=share />
                </Stack>
            }
        })
        .collect_view();

    view! {
        <Card layout_class="drive-stats-categories" aria_label="Largest categories">
            <Stack>
                <Heading level=3>"Largest categories"</Heading>
                {rows}
            </Stack>
        </Card>
    }
}

fn render_stats(stats: StorageStats) -> View {
    let tiles = stats
        .categories
        .iter()
        .map(|entry| {
            view! {
                <Statistic
                    label=entry.category.label().to_string()
                    value=entry.count.to_string()
                    detail=format_bytes(entry.size)
                    icon=category_icon(entry.category)
                />
            }
        })
        .collect_view();
    let files_value = stats.total_files.to_string();
    let files_detail = format_bytes(stats.total_size);
    let average_value = format_bytes(stats.average_size);
    let average_detail = size_range(&stats);
    let favorites_value = stats.favorites_count.to_string();
    let favorites_detail = format_bytes(stats.favorites_size);
    let trash_value = stats.trash_count.to_string();
    let trash_detail = format_bytes(stats.trash_size);
    let overview = stats.clone();

    view! {
        <Stack>
            <Grid min_column=200>
                <Statistic
                    label="Files".to_string()
                    value=files_value
                    detail=files_detail
                    icon=IconName::File
                />
                <Statistic
                    label="Average size".to_string()
                    value=average_value
                    detail=average_detail
                    icon=IconName::Chart
                />
                <Statistic
                    label="Favorites".to_string()
                    value=favorites_value
                    detail=favorites_detail
                    icon=IconName::StarFilled
                    tone=TextTone::Accent
                />
                <Statistic
                    label="Trash".to_string()
                    value=trash_value
                    detail=trash_detail
                    icon=IconName::Trash
                    tone=TextTone::Warning
                />
            </Grid>
            <StorageOverview stats=overview />
            <Grid min_column=160 layout_class="drive-stats-tiles">
                {tiles}
            </Grid>
            <CategoryBreakdown stats />
        </Stack>
    }
    .into_view()
}

#[component]
/// Storage totals, quota usage, and per-category breakdown.
pub(super) fn StatisticsPanel() -> impl IntoView {
    let runtime = use_drive_runtime();
    let stats = create_rw_signal(None::<StorageStats>);
    let loading = create_rw_signal(true);

    runtime.spawn_action(move |api, host| async move {
        let loaded = actions::load_statistics(api.as_ref(), &host).await;
        stats.set(loaded);
        loading.set(false);
    });

    let body = move || {
        if loading.get() {
            return view! { <Text tone=TextTone::Secondary>"Loading statistics..."</Text> }
                .into_view();
        }
        match stats.get() {
            None => view! {
                <EmptyState
                    icon=IconName::Warning
                    title="Statistics are unavailable"
                    hint="Try reloading the page."
                />
            }
            .into_view(),
            Some(stats) if stats.is_empty() && stats.trash_count == 0 => view! {
                <EmptyState
                    icon=IconName::Chart
                    title="Nothing to measure yet"
                    hint="Upload files to see how your storage is used."
                />
            }
            .into_view(),
            Some(stats) => render_stats(stats),
        }
    };

    view! {
        <section class="drive-statistics">
            <Heading level=1>"Statistics"</Heading>
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use drive_model::{FileCategory, FileId, FileItem};
    use pretty_assertions::assert_eq;

    use super::*;

    fn file(id: u64, name: &str, size: u64) -> FileItem {
        FileItem {
            id: FileId(id),
            filename: format!("stored-{id}"),
            original_name: name.to_string(),
            size,
            mimetype: None,
            is_favorite: false,
            deleted_at: None,
        }
    }

    #[test]
    fn size_range_spans_smallest_to_largest() {
        let stats = StorageStats::compute(
            &[file(1, "a.txt", 1024), file(2, "b.txt", 2048)],
            &[],
            &[],
            10 * 1024,
        );

        assert_eq!(size_range(&stats), "1 KB to 2 KB");
        assert_eq!(usage_line(&stats), "3 KB of 10 KB used (30.0%)");
    }

    #[test]
    fn size_range_without_files() {
        let stats = StorageStats::compute(&[], &[], &[], 1024);
        assert_eq!(size_range(&stats), "No files");
    }

    #[test]
    fn category_line_shows_size_count_and_share() {
        let entry = CategoryStats {
            category: FileCategory::Image,
            count: 3,
            size: 2048,
        };
        assert_eq!(category_line(&entry, 25.0), "2 KB in 3 files (25.0%)");
    }
}
