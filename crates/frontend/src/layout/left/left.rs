use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Navigation zone; visibility follows the persisted sidebar flag.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let is_hidden = move || !ctx.left_open.get();

    view! {
        <nav data-zone="left" class="left" class:hidden=is_hidden aria-hidden=move || is_hidden().to_string()>
            {children()}
        </nav>
    }
}
