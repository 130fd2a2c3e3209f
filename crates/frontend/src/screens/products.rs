use contracts::shared::grid::GridRow;
use contracts::shared::tabs::TabDescriptor;
use leptos::prelude::*;

use super::{fixtures, next_instance_id, on_first_render};
use crate::layout::global_context::use_app_context;
use crate::shared::grid::{GridButton, TabGrid};

pub const SCREEN_ID: &str = "pi-product";

#[component]
pub fn ProductList(tab_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let rows = RwSignal::new(Vec::<GridRow>::new());
    on_first_render(&tab_id, move || rows.set(fixtures::products()));

    let buttons = vec![
        GridButton::new("Refresh", move |_| rows.set(fixtures::products())),
        GridButton::new("New view", move |_| {
            let (id, n) = next_instance_id(ctx, SCREEN_ID);
            ctx.open_tab(
                &TabDescriptor::new(id, format!("Product #{}", n)).with_group("master"),
            );
        }),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Products"</h2>
            </div>
            <TabGrid
                tab_id=tab_id
                rows=rows
                columns=fixtures::product_columns()
                buttons=buttons
                height="calc(100vh - 180px)"
            />
        </div>
    }
}
