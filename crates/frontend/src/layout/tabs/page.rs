//! TabPage component - wrapper around the body of one tab
//!
//! Responsible for:
//! - showing/hiding the body depending on whether the tab is active
//! - lifecycle logging of tab bodies
//! - resolving the body through `screens::render_screen`

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::registry::Tab as TabData;
use crate::screens::render_screen;
use leptos::prelude::*;

/// Body of a single tab. Mounted once per open; hidden, not unmounted, while inactive.
#[component]
pub fn TabPage(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();
    let tab_id = tab.id.clone();

    let id_for_active = tab_id.clone();
    let is_active = Memo::new(move |_| ctx.active() == id_for_active);

    log::debug!("TabPage created for '{}'", tab_id);
    let id_for_cleanup = tab_id.clone();
    on_cleanup(move || {
        log::debug!("TabPage destroyed for '{}'", id_for_cleanup);
    });

    let content = render_screen(&tab_id);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active.get()
            data-tab-key=tab_id
        >
            {content}
        </div>
    }
}
