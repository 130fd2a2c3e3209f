use crate::layout::global_context::use_app_context;
use crate::layout::tabs::registry::Tab as TabData;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// One label in the tab strip. `data-tab-id` is what the scroll coordinator looks up.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();

    let id_for_active = tab.id.clone();
    let is_active = Memo::new(move |_| ctx.active() == id_for_active);

    let id_for_click = tab.id.clone();
    let on_click = move |_| ctx.set_active_tab(&id_for_click);

    let id_for_close = tab.id.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&id_for_close);
    };

    let closable = !tab.is_main();
    let title = tab.name.clone();

    view! {
        <div
            class="tabs__tab"
            class:tabs__tab--active=move || is_active.get()
            data-tab-id=tab.id.clone()
            title=title
            on:click=on_click
        >
            {(!closable).then(|| icon("home"))}
            <span class="tabs__tab-title">{tab.name}</span>
            {closable.then(|| view! {
                <button class="tabs__tab-close" on:click=on_close title="Close">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::global_context::AppGlobalContext;

    #[test]
    fn test_tab_label_builds_for_closable_and_main_tabs() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppGlobalContext::new("Home", true));
            for (id, name) in [("main", "Home"), ("pi-product", "Products")] {
                let tab = TabData {
                    id: id.to_string(),
                    name: name.to_string(),
                    group: None,
                };
                let _label = Tab(TabProps::builder().tab(tab).build());
            }
        });
    }
}
