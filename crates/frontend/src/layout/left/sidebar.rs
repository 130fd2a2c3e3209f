//! Sidebar with collapsible menu groups.
//!
//! Every item opens (or re-activates) a tab tagged with its group, so the
//! group of the active tab can be expanded automatically.

use contracts::shared::tabs::TabDescriptor;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::screens::{defects, materials, products, work_orders};
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<MenuItem>,
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "master",
            label: "Master data",
            icon: "package",
            items: vec![
                MenuItem { id: products::SCREEN_ID, label: "Products", icon: "package" },
                MenuItem { id: materials::SCREEN_ID, label: "Materials", icon: "factory" },
            ],
        },
        MenuGroup {
            id: "production",
            label: "Production",
            icon: "factory",
            items: vec![MenuItem {
                id: work_orders::SCREEN_ID,
                label: "Work orders",
                icon: "clipboard",
            }],
        },
        MenuGroup {
            id: "quality",
            label: "Quality",
            icon: "alert-triangle",
            items: vec![MenuItem {
                id: defects::SCREEN_ID,
                label: "Defects",
                icon: "alert-triangle",
            }],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(Vec::<String>::new());

    Effect::new(move |_| {
        if let Some(group) = ctx.active_group() {
            expanded_groups.update(|groups| {
                if !groups.contains(&group) {
                    groups.push(group);
                }
            });
        }
    });

    view! {
        <div class="app-sidebar__content">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id.to_string();
                    let gid_click = group_id.clone();
                    let gid_chevron = group_id.clone();
                    let gid_show = group_id;
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |groups| {
                                        if let Some(pos) = groups.iter().position(|g| g == &gid) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&gid_chevron)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.get().contains(&gid_show)>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|item| {
                                            let descriptor = TabDescriptor::new(item.id, item.label)
                                                .with_group(group.id);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active() == item.id
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(&descriptor)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(item.icon)}
                                                        <span>{item.label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_ids_are_unique() {
        let mut ids: Vec<&str> = menu_groups()
            .into_iter()
            .flat_map(|group| group.items.into_iter().map(|item| item.id))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
