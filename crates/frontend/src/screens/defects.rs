use contracts::shared::grid::GridRow;
use leptos::prelude::*;

use super::{fixtures, on_first_render};
use crate::shared::grid::{GridButton, TabGrid};

pub const SCREEN_ID: &str = "qm-defect";

#[component]
pub fn DefectList(tab_id: String) -> impl IntoView {
    let rows = RwSignal::new(Vec::<GridRow>::new());
    on_first_render(&tab_id, move || rows.set(fixtures::defects()));

    let buttons = vec![GridButton::new("Dismiss selected", move |selection| {
        log::debug!("dismissing {} defect record(s)", selection.len());
        rows.update(|rows| rows.retain(|row| !selection.contains(&row.id)));
    })
    .resetting()];

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Defects"</h2>
            </div>
            <TabGrid
                tab_id=tab_id
                rows=rows
                columns=fixtures::defect_columns()
                buttons=buttons
                height="calc(100vh - 180px)"
            />
        </div>
    }
}
