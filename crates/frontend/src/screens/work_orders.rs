use contracts::shared::grid::{GridRow, RowId};
use leptos::prelude::*;
use std::collections::HashSet;

use super::{fixtures, on_first_render};
use crate::shared::grid::{GridHandlers, TabGrid};

pub const SCREEN_ID: &str = "wo-work-order";

/// Work orders with their production results. Two grids in one tab, each with
/// its own scoped state; selecting orders narrows the results grid.
#[component]
pub fn WorkOrders(tab_id: String) -> impl IntoView {
    let orders = RwSignal::new(Vec::<GridRow>::new());
    let results = RwSignal::new(Vec::<GridRow>::new());
    on_first_render(&tab_id, move || {
        orders.set(fixtures::work_orders());
        results.set(fixtures::production_results());
    });

    let selected_orders = RwSignal::new(HashSet::<RowId>::new());
    let order_handlers = GridHandlers {
        on_selection_change: Some(Callback::new(move |selection: HashSet<RowId>| {
            selected_orders.set(selection);
        })),
        ..Default::default()
    };

    let visible_results = Signal::derive(move || {
        let selection = selected_orders.get();
        results.with(|rows| {
            rows.iter()
                .filter(|row| selection.is_empty() || selection.contains(&row.text("order_no")))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Work orders"</h2>
            </div>
            <TabGrid
                tab_id=tab_id.clone()
                grid_id="orders"
                rows=orders
                columns=fixtures::work_order_columns()
                handlers=order_handlers
                height="calc(50vh - 100px)"
            />
            <h3 class="page__subheader">"Production results"</h3>
            <TabGrid
                tab_id=tab_id
                grid_id="results"
                rows=visible_results
                columns=fixtures::result_columns()
                height="calc(50vh - 100px)"
            />
        </div>
    }
}
