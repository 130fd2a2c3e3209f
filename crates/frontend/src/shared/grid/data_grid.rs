//! Standard table renderer for [`ScopedGrid`](super::binding::ScopedGrid).
//!
//! Stateless with respect to the grid: everything it shows comes from the
//! injected [`GridBinding`] and every interaction goes back through it.

use contracts::shared::grid::{FilterItem, FilterModel, FilterOperator, GridRow, RowId};
use leptos::prelude::*;
use thaw::*;

use super::binding::{GridBinding, GridProps};
use super::view::{apply_view, sort_indicator, toggle_sort};
use crate::shared::components::PaginationControls;

pub fn render_data_grid(props: GridProps, binding: GridBinding) -> AnyView {
    let GridProps {
        columns,
        buttons,
        height,
    } = props;
    let first_field = columns.first().map(|c| c.field.clone()).unwrap_or_default();
    let columns = StoredValue::new(columns);

    let page = Memo::new(move |_| {
        let state = binding.state.get();
        binding.data.with(|d| apply_view(&d.rows, &state))
    });
    let selected = Signal::derive(move || binding.state.with(|s| s.selected_row_ids.clone()));

    let toggle_row = move |id: RowId, checked: bool| {
        let mut selection = selected.get_untracked();
        if checked {
            selection.insert(id);
        } else {
            selection.remove(&id);
        }
        binding.on_selection_change.run(selection);
    };

    let page_ids = move || -> Vec<RowId> {
        page.with(|p| p.rows.iter().map(|r| r.id.clone()).collect())
    };
    let all_on_page_selected = move || {
        let ids = page_ids();
        !ids.is_empty() && selected.with(|s| ids.iter().all(|id| s.contains(id)))
    };
    let toggle_page = move |checked: bool| {
        let mut selection = selected.get_untracked();
        for id in page.with_untracked(|p| p.rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>()) {
            if checked {
                selection.insert(id);
            } else {
                selection.remove(&id);
            }
        }
        binding.on_selection_change.run(selection);
    };

    let sort_by = move |field: String| {
        let model = binding
            .state
            .with_untracked(|s| toggle_sort(&s.sort_model, &field));
        binding.on_sort_change.run(model);
    };

    // Filter editor inputs; the applied filter lives in the store.
    let filter_field = RwSignal::new(first_field);
    let filter_operator = RwSignal::new(FilterOperator::Contains);
    let filter_value = RwSignal::new(String::new());

    let apply_filter = move || {
        let operator = filter_operator.get_untracked();
        let field = filter_field.get_untracked();
        let item = if operator.is_unary() {
            FilterItem::unary(field, operator)
        } else {
            FilterItem::new(field, operator, filter_value.get_untracked())
        };
        binding
            .on_filter_change
            .run(FilterModel::default().with_item(item));
        let page_size = binding.state.with_untracked(|s| s.page_size);
        binding.on_pagination_change.run((0, page_size));
    };

    let reset = move || {
        filter_value.set(String::new());
        filter_operator.set(FilterOperator::Contains);
        binding.on_reset.run(());
    };

    let has_filter = move || binding.state.with(|s| !s.filter_model.is_empty());

    view! {
        <div class="data-grid" style=format!("height: {};", height)>
            <div class="data-grid__toolbar">
                <div class="data-grid__buttons">
                    {buttons
                        .into_iter()
                        .map(|button| {
                            let label = button.label.clone();
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| binding.run_button(&button)
                                >
                                    {label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="data-grid__filter" class:data-grid__filter--active=has_filter>
                    <select
                        class="data-grid__filter-field"
                        on:change=move |ev| filter_field.set(event_target_value(&ev))
                        prop:value=move || filter_field.get()
                    >
                        {columns
                            .get_value()
                            .into_iter()
                            .map(|c| view! { <option value=c.field.clone()>{c.header_name}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class="data-grid__filter-operator"
                        on:change=move |ev| {
                            let index = event_target_value(&ev).parse::<usize>().unwrap_or(0);
                            if let Some(op) = FilterOperator::all().get(index) {
                                filter_operator.set(*op);
                            }
                        }
                    >
                        {FilterOperator::all()
                            .into_iter()
                            .enumerate()
                            .map(|(i, op)| {
                                view! {
                                    <option value=i.to_string() selected=move || filter_operator.get() == op>
                                        {op.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        class="data-grid__filter-value"
                        placeholder="Value"
                        disabled=move || filter_operator.get().is_unary()
                        prop:value=move || filter_value.get()
                        on:input=move |ev| filter_value.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                apply_filter();
                            }
                        }
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filter()>
                        "Filter"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset()>
                        "Reset"
                    </Button>
                </div>
            </div>

            <div class="data-grid__body">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="fixed-checkbox-column">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=all_on_page_selected
                                    on:change=move |ev| toggle_page(event_target_checked(&ev))
                                />
                            </th>
                            {columns
                                .get_value()
                                .into_iter()
                                .map(|column| {
                                    let field = column.field.clone();
                                    let field_for_indicator = column.field.clone();
                                    let sortable = column.sortable;
                                    let width = column
                                        .width
                                        .map(|w| format!("width: {}px;", w))
                                        .unwrap_or_default();
                                    view! {
                                        <th
                                            class="table__header-cell"
                                            class:table__header-cell--sortable=sortable
                                            style=width
                                            on:click=move |_| {
                                                if sortable {
                                                    sort_by(field.clone());
                                                }
                                            }
                                        >
                                            {column.header_name}
                                            {move || {
                                                if sortable {
                                                    binding
                                                        .state
                                                        .with(|s| sort_indicator(&s.sort_model, &field_for_indicator))
                                                } else {
                                                    ""
                                                }
                                            }}
                                        </th>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page.get().rows
                            key=|row: &GridRow| row.id.clone()
                            children=move |row: GridRow| {
                                let id = row.id.clone();
                                let id_for_check = row.id.clone();
                                let is_selected = Memo::new(move |_| selected.with(|s| s.contains(&id_for_check)));
                                view! {
                                    <tr class="table__row" class:table__row--selected=move || is_selected.get()>
                                        <td class="fixed-checkbox-column">
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || is_selected.get()
                                                on:change=move |ev| toggle_row(id.clone(), event_target_checked(&ev))
                                            />
                                        </td>
                                        {columns
                                            .get_value()
                                            .iter()
                                            .map(|column| view! { <td class="table__cell">{row.text(&column.field)}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || page.with(|p| p.rows.is_empty())>
                    <div class="data-grid__empty">"No rows"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.page))
                total_pages=Signal::derive(move || page.with(|p| p.page_count))
                total_count=Signal::derive(move || page.with(|p| p.total))
                page_size=Signal::derive(move || binding.state.with(|s| s.page_size))
                page_size_options=binding.page_size_options
                on_change=binding.on_pagination_change
            />
        </div>
    }
    .into_any()
}
