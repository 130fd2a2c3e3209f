use crate::config::use_workspace_config;
use crate::layout::center::tabs::scroll::ScrollCoordinator;
use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::registry::Tab as TabData;
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// Step of the overflow scroll buttons, in pixels.
const SCROLL_STEP: f64 = 240.0;

/// Tab strip plus the bodies of all open tabs.
///
/// Bodies of inactive tabs stay mounted and are only hidden, so their grid
/// state survives tab switches.
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_workspace_config();

    let strip_ref = NodeRef::<leptos::html::Div>::new();
    let coordinator = ScrollCoordinator::new(
        strip_ref,
        config.scroll_debounce_ms,
        config.scroll_animation_ms,
    );
    let indicators = coordinator.indicators();

    let active = Memo::new(move |_| ctx.active());
    let tab_ids = Memo::new(move |_| ctx.tab_ids());

    Effect::new(move |_| {
        tab_ids.track();
        coordinator.request_scroll(active.get());
    });

    Effect::new(move |_| {
        if let Some(request) = ctx.scroll_request() {
            coordinator.request_scroll(request.tab_id);
        }
    });

    // Let the strip lay out before the first measurement.
    spawn_local(async move {
        TimeoutFuture::new(50).await;
        coordinator.refresh_indicators();
    });

    let resize = window_event_listener(ev::resize, move |_| coordinator.refresh_indicators());
    on_cleanup(move || resize.remove());

    if config.layout_refresh_ms > 0 {
        match set_interval_with_handle(
            move || coordinator.refresh_indicators(),
            Duration::from_millis(config.layout_refresh_ms as u64),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("tabs: failed to start layout refresh: {:?}", e),
        }
    }

    on_cleanup(move || coordinator.cancel());

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <Show when=move || indicators.get().can_scroll_left>
                    <button
                        class="tabs__scroll tabs__scroll--left"
                        on:click=move |_| coordinator.scroll_by(-SCROLL_STEP)
                        title="Scroll left"
                    >
                        {icon("chevron-left")}
                    </button>
                </Show>
                <div
                    class="tabs__strip"
                    style="position: relative; overflow-x: auto; white-space: nowrap; flex: 1;"
                    node_ref=strip_ref
                    on:scroll=move |_| coordinator.refresh_indicators()
                >
                    <For
                        each=move || ctx.tabs()
                        key=|tab: &TabData| tab.id.clone()
                        children=move |tab: TabData| view! { <TabComponent tab=tab /> }
                    />
                </div>
                <Show when=move || indicators.get().can_scroll_right>
                    <button
                        class="tabs__scroll tabs__scroll--right"
                        on:click=move |_| coordinator.scroll_by(SCROLL_STEP)
                        title="Scroll right"
                    >
                        {icon("chevron-right")}
                    </button>
                </Show>
                <button
                    class="tabs__close-all"
                    on:click=move |_| ctx.close_all_tabs()
                    disabled=move || tab_ids.with(|ids| ids.len() <= 1)
                    title="Close all tabs"
                >
                    {icon("x")}
                </button>
            </div>
            <div class="tabs__content">
                <For
                    each=move || ctx.tabs()
                    key=|tab: &TabData| tab.id.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab /> }
                />
            </div>
        </div>
    }
}
