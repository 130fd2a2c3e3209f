use crate::config::load_config;
use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::grid::{GridOptions, GridStoreRegistry};
use crate::shared::storage::{load_flag, SIDEBAR_OPEN_KEY};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Tab registry and grid stores are shared by the whole workspace.
    provide_context(AppGlobalContext::new(
        &config.main_tab_title,
        load_flag(SIDEBAR_OPEN_KEY).unwrap_or(true),
    ));
    provide_context(GridStoreRegistry::new(GridOptions::from(&config)));
    provide_context(config);

    view! {
        <ConfigProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Tabs /> }.into_any()
            />
        </ConfigProvider>
    }
}
