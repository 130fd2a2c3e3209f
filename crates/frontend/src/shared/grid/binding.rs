//! Binding layer: wires a generic grid renderer to the store scoped to its tab.
//!
//! Screens render [`ScopedGrid`] (or [`TabGrid`]) with their rows, columns and
//! the tab id; selection, paging, sort and filter live in the scoped store and
//! never in the screen. Screen handlers still fire, after the store update.

use contracts::shared::grid::{FilterModel, GridColumn, GridRow, RowId, SortItem};
use leptos::prelude::*;
use std::collections::HashSet;

use super::data_grid::render_data_grid;
use super::state::{GridData, GridDataPatch, GridState, GridStatePatch};
use super::store::{use_grid_registry, GridKey, GridStateStore};

/// Optional screen handlers, invoked in addition to the store update.
#[derive(Clone, Copy, Default)]
pub struct GridHandlers {
    pub on_selection_change: Option<Callback<HashSet<RowId>>>,
    /// `(page, page_size)`
    pub on_pagination_change: Option<Callback<(usize, usize)>>,
    pub on_sort_change: Option<Callback<Vec<SortItem>>>,
    pub on_filter_change: Option<Callback<FilterModel>>,
}

/// Toolbar button of a grid. The click receives the current selection.
#[derive(Clone)]
pub struct GridButton {
    pub label: String,
    pub on_click: Callback<HashSet<RowId>>,
    /// Reset the grid state after the click, so removed rows do not stay selected.
    pub resets_state: bool,
}

impl GridButton {
    pub fn new(
        label: impl Into<String>,
        on_click: impl Fn(HashSet<RowId>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            on_click: Callback::new(on_click),
            resets_state: false,
        }
    }

    pub fn resetting(mut self) -> Self {
        self.resets_state = true;
        self
    }
}

/// Screen-owned presentation props handed through to the renderer.
#[derive(Clone)]
pub struct GridProps {
    pub columns: Vec<GridColumn>,
    pub buttons: Vec<GridButton>,
    pub height: String,
}

/// Scoped state and mutation callbacks injected into a renderer.
#[derive(Clone, Copy)]
pub struct GridBinding {
    pub state: Signal<GridState>,
    pub data: Signal<GridData>,
    pub page_size_options: Signal<Vec<usize>>,
    pub on_selection_change: Callback<HashSet<RowId>>,
    pub on_pagination_change: Callback<(usize, usize)>,
    pub on_sort_change: Callback<Vec<SortItem>>,
    pub on_filter_change: Callback<FilterModel>,
    pub on_reset: Callback<()>,
}

impl GridBinding {
    pub fn new(store: GridStateStore, handlers: GridHandlers) -> Self {
        let options = store.options().page_size_options;
        Self {
            state: store.state().into(),
            data: store.data().into(),
            page_size_options: Signal::stored(options),
            on_selection_change: Callback::new(move |selection: HashSet<RowId>| {
                store.update_selection(selection.clone());
                if let Some(handler) = handlers.on_selection_change {
                    handler.run(selection);
                }
            }),
            on_pagination_change: Callback::new(move |(page, page_size): (usize, usize)| {
                store.update_grid_state(GridStatePatch::default().page(page).page_size(page_size));
                if let Some(handler) = handlers.on_pagination_change {
                    handler.run((page, page_size));
                }
            }),
            on_sort_change: Callback::new(move |sort_model: Vec<SortItem>| {
                store.update_grid_state(GridStatePatch::default().sort_model(sort_model.clone()));
                if let Some(handler) = handlers.on_sort_change {
                    handler.run(sort_model);
                }
            }),
            on_filter_change: Callback::new(move |filter_model: FilterModel| {
                store.update_grid_state(
                    GridStatePatch::default().filter_model(filter_model.clone()),
                );
                if let Some(handler) = handlers.on_filter_change {
                    handler.run(filter_model);
                }
            }),
            on_reset: Callback::new(move |_| store.reset_grid_state()),
        }
    }

    /// Runs a toolbar button with the current selection.
    pub fn run_button(&self, button: &GridButton) {
        let selection = self.state.with_untracked(|s| s.selected_row_ids.clone());
        button.on_click.run(selection);
        if button.resets_state {
            self.on_reset.run(());
        }
    }
}

/// Composes a renderer with a store: the result only needs the screen props.
pub fn bind_grid<F>(
    render: F,
    store: GridStateStore,
    handlers: GridHandlers,
) -> impl Fn(GridProps) -> AnyView
where
    F: Fn(GridProps, GridBinding) -> AnyView,
{
    let binding = GridBinding::new(store, handlers);
    move |props| render(props, binding)
}

/// Mounts `render` against the store scoped to `(tab_id, grid_id)`.
///
/// The store is acquired on mount and released on cleanup, so closing the tab
/// discards it.
#[component]
pub fn ScopedGrid<F>(
    #[prop(into)] tab_id: String,
    /// Discriminator for screens with more than one grid; empty for none
    #[prop(optional, into)]
    grid_id: String,
    #[prop(into)] rows: Signal<Vec<GridRow>>,
    columns: Vec<GridColumn>,
    #[prop(optional)] buttons: Vec<GridButton>,
    #[prop(optional, into)] height: String,
    #[prop(optional)] handlers: GridHandlers,
    render: F,
) -> impl IntoView
where
    F: Fn(GridProps, GridBinding) -> AnyView + 'static,
{
    let registry = use_grid_registry();
    let grid_id = Some(grid_id.as_str()).filter(|g| !g.is_empty());
    let key = GridKey::new(tab_id, grid_id);
    let store = registry.acquire(&key);
    log::debug!(
        "grid '{}' mounted with store {} ({} holder(s))",
        key,
        store.instance_id(),
        registry.holders(&key)
    );

    on_cleanup(move || {
        registry.release(&key);
    });

    // Row refreshes go to the data cache only; interaction state is untouched.
    Effect::new(move |_| {
        let rows = rows.get();
        let total = rows.len();
        store.update_grid_data(GridDataPatch::default().rows(rows).total_rows(total));
    });

    let bound = bind_grid(render, store, handlers);
    bound(GridProps {
        columns,
        buttons,
        height: if height.is_empty() {
            "100%".to_string()
        } else {
            height
        },
    })
}

/// [`ScopedGrid`] pre-wired to the standard table renderer.
#[component]
pub fn TabGrid(
    #[prop(into)] tab_id: String,
    #[prop(optional, into)] grid_id: String,
    #[prop(into)] rows: Signal<Vec<GridRow>>,
    columns: Vec<GridColumn>,
    #[prop(optional)] buttons: Vec<GridButton>,
    #[prop(optional, into)] height: String,
    #[prop(optional)] handlers: GridHandlers,
) -> impl IntoView {
    view! {
        <ScopedGrid
            tab_id=tab_id
            grid_id=grid_id
            rows=rows
            columns=columns
            buttons=buttons
            height=height
            handlers=handlers
            render=render_data_grid
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::state::GridOptions;
    use crate::shared::grid::store::GridStoreRegistry;
    use contracts::shared::grid::{FilterItem, FilterOperator};
    use std::sync::{Arc, Mutex};

    fn selection(values: &[&str]) -> HashSet<RowId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_binding_updates_store_then_screen_handler() {
        let registry = GridStoreRegistry::new(GridOptions::default());
        let store = registry.acquire(&GridKey::new("pi-product", None));
        let seen: Arc<Mutex<Vec<HashSet<RowId>>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_in_handler = seen.clone();
        let handlers = GridHandlers {
            on_selection_change: Some(Callback::new(move |sel: HashSet<RowId>| {
                seen_in_handler.lock().unwrap().push(sel);
            })),
            ..Default::default()
        };

        let binding = GridBinding::new(store, handlers);
        binding.on_selection_change.run(selection(&["r1"]));

        assert_eq!(store.snapshot().selected_row_ids, selection(&["r1"]));
        assert_eq!(seen.lock().unwrap().as_slice(), &[selection(&["r1"])]);
    }

    #[test]
    fn test_binding_merges_partial_updates() {
        let registry = GridStoreRegistry::new(GridOptions::default());
        let store = registry.acquire(&GridKey::new("A", None));
        let binding = GridBinding::new(store, GridHandlers::default());

        binding.on_pagination_change.run((2, 200));
        binding.on_sort_change.run(vec![SortItem::desc("qty")]);
        binding.on_filter_change.run(
            FilterModel::default().with_item(FilterItem::new("name", FilterOperator::Contains, "m8")),
        );

        let state = store.snapshot();
        assert_eq!(state.page, 2);
        assert_eq!(state.page_size, 200);
        assert_eq!(state.sort_model, vec![SortItem::desc("qty")]);
        assert_eq!(state.filter_model.items.len(), 1);

        binding.on_reset.run(());
        assert_eq!(store.snapshot(), GridState::new(&GridOptions::default()));
    }

    #[test]
    fn test_resetting_button_clears_selection_after_click() {
        let registry = GridStoreRegistry::new(GridOptions::default());
        let store = registry.acquire(&GridKey::new("qm-defect", None));
        let binding = GridBinding::new(store, GridHandlers::default());
        binding.on_selection_change.run(selection(&["D-1", "D-2"]));

        let received: Arc<Mutex<Option<HashSet<RowId>>>> = Arc::new(Mutex::new(None));
        let received_in_click = received.clone();
        let dismiss = GridButton::new("Dismiss selected", move |sel| {
            *received_in_click.lock().unwrap() = Some(sel);
        })
        .resetting();
        binding.run_button(&dismiss);

        assert_eq!(*received.lock().unwrap(), Some(selection(&["D-1", "D-2"])));
        assert!(store.snapshot().selected_row_ids.is_empty());

        binding.on_selection_change.run(selection(&["D-3"]));
        binding.run_button(&GridButton::new("Export", |_| {}));
        assert_eq!(store.snapshot().selected_row_ids, selection(&["D-3"]));
    }

    #[test]
    fn test_scoped_grid_store_follows_mount_and_cleanup() {
        let _ = any_spawner::Executor::init_futures_executor();
        let root = Owner::new();
        root.set();
        let registry = GridStoreRegistry::new(GridOptions::default());
        provide_context(registry);
        let key = GridKey::new("pi-product", None);

        let mount = |owner: &Owner| {
            owner.with(|| {
                ScopedGrid(
                    ScopedGridProps::builder()
                        .tab_id("pi-product")
                        .rows(Signal::stored(Vec::<GridRow>::new()))
                        .columns(Vec::new())
                        .render(|_: GridProps, _: GridBinding| ().into_any())
                        .build(),
                )
            })
        };

        let first_owner = root.child();
        let _first_view = mount(&first_owner);
        assert_eq!(registry.len(), 1);
        let first = registry.get(&key).unwrap();
        first.update_selection(selection(&["P-1001"]));

        first_owner.cleanup();
        assert_eq!(registry.len(), 0);

        let second_owner = root.child();
        let _second_view = mount(&second_owner);
        let second = registry.get(&key).unwrap();
        assert_ne!(second.instance_id(), first.instance_id());
        assert!(second.snapshot().selected_row_ids.is_empty());
    }

    #[test]
    fn test_bindings_of_two_tabs_do_not_leak() {
        let registry = GridStoreRegistry::new(GridOptions::default());
        let a = GridBinding::new(
            registry.acquire(&GridKey::new("A", None)),
            GridHandlers::default(),
        );
        let b_store = registry.acquire(&GridKey::new("B", None));
        let _b = GridBinding::new(b_store, GridHandlers::default());

        a.on_selection_change.run(selection(&["1", "2"]));
        a.on_pagination_change.run((1, 50));
        assert!(b_store.snapshot().selected_row_ids.is_empty());
        assert_eq!(b_store.snapshot().page, 0);
    }
}
