use crate::shared::icons::icon;
use contracts::shared::list::ListMeta;
use leptos::prelude::*;

/// Last page for the given meta; never below 1
pub fn page_count(meta: &ListMeta) -> u32 {
    let by_total = if meta.per_page == 0 {
        1
    } else {
        meta.total.div_ceil(meta.per_page as u64) as u32
    };
    meta.last_page.max(by_total).max(1)
}

/// PaginationControls component - server-side pagination (pages are 1-based)
#[component]
pub fn PaginationControls(
    #[prop(into)] meta: Signal<ListMeta>,

    /// Callback with `(page, per_page)`
    on_change: Callback<(u32, u32)>,

    /// Available page size options (optional, defaults to [10, 20, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);
    let current = move || meta.with(|m| m.current_page.max(1));
    let last = move || meta.with(page_count);
    let per_page = move || meta.with(|m| m.per_page);
    let go = move |page: u32| on_change.run((page, per_page()));

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(1)
                disabled=move || current() <= 1
                title="first"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(current().saturating_sub(1).max(1))
                disabled=move || current() <= 1
                title="previous"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current(), last(), meta.with(|m| m.total))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go((current() + 1).min(last()))
                disabled=move || current() >= last()
                title="next"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(last())
                disabled=move || current() >= last()
                title="last"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(10);
                    on_change.run((1, size));
                }
                prop:value=move || per_page().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || per_page() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let meta = ListMeta {
            current_page: 1,
            last_page: 1,
            per_page: 10,
            total: 25,
        };
        assert_eq!(page_count(&meta), 3);
        assert_eq!(page_count(&ListMeta::default()), 1);
    }
}
