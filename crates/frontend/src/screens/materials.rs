use contracts::shared::grid::GridRow;
use leptos::prelude::*;

use super::{fixtures, on_first_render};
use crate::shared::grid::TabGrid;

pub const SCREEN_ID: &str = "pi-material";

#[component]
pub fn MaterialList(tab_id: String) -> impl IntoView {
    let rows = RwSignal::new(Vec::<GridRow>::new());
    on_first_render(&tab_id, move || rows.set(fixtures::materials()));

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Materials"</h2>
            </div>
            <TabGrid
                tab_id=tab_id
                rows=rows
                columns=fixtures::material_columns()
                height="calc(100vh - 180px)"
            />
        </div>
    }
}
