//! Top bar: application title, sidebar toggle and the open tab count.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();
    let tab_count = move || ctx.tab_ids().len();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Shop Floor Workspace"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__counter">{move || format!("Tabs: {}", tab_count())}</span>
            </div>
        </div>
    }
}
