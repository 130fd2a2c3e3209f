use contracts::shared::tabs::TabDescriptor;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::menu_groups;
use crate::shared::icons::icon;

/// Body of the main tab: quick access to every screen and the open tabs.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let open_count = move || ctx.tab_ids().len();

    view! {
        <div class="page page--home">
            <div class="page__header">
                <h2>"Manufacturing operations"</h2>
                <span class="page__hint">{move || format!("{} open tab(s)", open_count())}</span>
            </div>
            <div class="home__cards">
                {menu_groups()
                    .into_iter()
                    .flat_map(|group| {
                        group.items.into_iter().map(move |item| (group.id, item))
                    })
                    .map(|(group_id, item)| {
                        let descriptor = TabDescriptor::new(item.id, item.label).with_group(group_id);
                        view! {
                            <div class="home__card" on:click=move |_| ctx.open_tab(&descriptor)>
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
