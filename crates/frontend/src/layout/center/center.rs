use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Content zone. The tab strip and the tab bodies scroll on their own, so the
/// zone itself never does; `min-width: 0` lets the strip shrink and overflow.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div
            data-zone="center"
            class="app-center"
            data-active-tab=move || ctx.active()
            style="flex: 1; display: flex; flex-direction: column; min-width: 0; overflow: hidden;"
        >
            {children()}
        </div>
    }
}
