use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page navigation and page-size selector for grids.
///
/// Pages are 0-indexed; `on_change` receives `(page, page_size)`. Changing
/// the page size jumps back to the first page.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    #[prop(into)] page_size_options: Signal<Vec<usize>>,
    on_change: Callback<(usize, usize)>,
) -> impl IntoView {
    let go_to = move |page: usize| on_change.run((page, page_size.get_untracked()));
    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_to(0)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 0 {
                        go_to(page - 1);
                    }
                }
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page + 1 < total_pages.get_untracked() {
                        go_to(page + 1);
                    }
                }
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get_untracked();
                    if total > 0 {
                        go_to(total - 1);
                    }
                }
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_change.run((0, size));
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {move || {
                    page_size_options
                        .get()
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
