//! Screen bodies hosted in tabs, keyed by tab id.
//!
//! A tab id is `<screen>` or `<screen>:<n>` for additional instances of the
//! same screen; every instance gets its own grid state.

pub mod defects;
pub mod fixtures;
pub mod home;
pub mod materials;
pub mod products;
pub mod work_orders;

use contracts::shared::tabs::MAIN_TAB_ID;
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, AppGlobalContext};

/// Screen part of a tab id.
pub fn screen_kind(tab_id: &str) -> &str {
    tab_id.split_once(':').map(|(kind, _)| kind).unwrap_or(tab_id)
}

/// First free `<base>:<n>` id, starting at 2.
pub fn next_instance_id(ctx: AppGlobalContext, base: &str) -> (String, usize) {
    (2..)
        .map(|n| (format!("{}:{}", base, n), n))
        .find(|(id, _)| !ctx.is_open(id))
        .unwrap_or_else(|| (base.to_string(), 1))
}

/// Runs `seed` on the first render of `tab_id` and marks the tab loaded.
pub(crate) fn on_first_render(tab_id: &str, seed: impl Fn() + 'static) {
    let ctx = use_app_context();
    let tab_id = tab_id.to_string();
    Effect::new(move |_| {
        if !ctx.is_loaded(&tab_id) {
            seed();
            ctx.mark_loaded(&tab_id);
        }
    });
}

/// Renders the body of a tab by its id.
pub fn render_screen(tab_id: &str) -> AnyView {
    let tab_id = tab_id.to_string();
    match screen_kind(&tab_id) {
        MAIN_TAB_ID => view! { <home::Home /> }.into_any(),
        products::SCREEN_ID => view! { <products::ProductList tab_id=tab_id /> }.into_any(),
        materials::SCREEN_ID => view! { <materials::MaterialList tab_id=tab_id /> }.into_any(),
        work_orders::SCREEN_ID => {
            view! { <work_orders::WorkOrders tab_id=tab_id /> }.into_any()
        }
        defects::SCREEN_ID => view! { <defects::DefectList tab_id=tab_id /> }.into_any(),
        _ => {
            log::warn!("Unknown tab type: {}", tab_id);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::tabs::TabDescriptor;

    #[test]
    fn test_screen_kind() {
        assert_eq!(screen_kind("pi-product"), "pi-product");
        assert_eq!(screen_kind("pi-product:3"), "pi-product");
        assert_eq!(screen_kind("main"), "main");
    }

    #[test]
    fn test_next_instance_id_skips_open_ids() {
        let ctx = AppGlobalContext::new("Home", true);
        ctx.open_tab(&TabDescriptor::new("pi-product", "Product"));
        assert_eq!(next_instance_id(ctx, "pi-product"), ("pi-product:2".to_string(), 2));

        ctx.open_tab(&TabDescriptor::new("pi-product:2", "Product #2"));
        ctx.open_tab(&TabDescriptor::new("pi-product:3", "Product #3"));
        ctx.close_tab("pi-product:2");
        assert_eq!(next_instance_id(ctx, "pi-product"), ("pi-product:2".to_string(), 2));
    }
}
