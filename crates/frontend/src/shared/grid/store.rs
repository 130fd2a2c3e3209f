//! Per-tab grid state stores and the keyed registry that hands them out.
//!
//! A store is identified by a [`GridKey`]: the owning tab id plus an optional
//! grid discriminator for screens that render several grids. Two keys never
//! share a store. Stores are acquired when a grid subtree mounts and released
//! when it unmounts; the last release drops the store, so reopening a tab
//! starts from defaults.

use contracts::shared::grid::RowId;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

use super::state::{GridData, GridDataPatch, GridOptions, GridState, GridStatePatch};
use crate::shared::error::expect_provided;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub tab_id: String,
    pub grid_id: Option<String>,
}

impl GridKey {
    pub fn new(tab_id: impl Into<String>, grid_id: Option<&str>) -> Self {
        Self {
            tab_id: tab_id.into(),
            grid_id: grid_id.map(str::to_string),
        }
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.grid_id {
            Some(grid_id) => write!(f, "{}::{}", self.tab_id, grid_id),
            None => write!(f, "{}", self.tab_id),
        }
    }
}

/// Reactive state of one grid instance.
#[derive(Clone, Copy)]
pub struct GridStateStore {
    instance_id: Uuid,
    state: RwSignal<GridState>,
    data: RwSignal<GridData>,
    options: StoredValue<GridOptions>,
}

impl GridStateStore {
    pub fn new(options: &GridOptions) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            state: RwSignal::new(GridState::new(options)),
            data: RwSignal::new(GridData::default()),
            options: StoredValue::new(options.clone()),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn state(&self) -> ReadSignal<GridState> {
        self.state.read_only()
    }

    pub fn data(&self) -> ReadSignal<GridData> {
        self.data.read_only()
    }

    pub fn options(&self) -> GridOptions {
        self.options.get_value()
    }

    pub fn snapshot(&self) -> GridState {
        self.state.get_untracked()
    }

    pub fn data_snapshot(&self) -> GridData {
        self.data.get_untracked()
    }

    pub fn update_selection(&self, selection: HashSet<RowId>) {
        self.state.update(|s| s.update_selection(selection));
    }

    pub fn update_grid_state(&self, patch: GridStatePatch) {
        let options = self.options.get_value();
        let mut accepted = true;
        self.state.update(|s| accepted = s.apply(patch, &options));
        if !accepted {
            log::warn!(
                "grid {}: page size outside {:?} ignored",
                self.instance_id,
                options.page_size_options
            );
        }
    }

    pub fn update_grid_data(&self, patch: GridDataPatch) {
        self.data.update(|d| d.apply(patch));
    }

    pub fn reset_grid_state(&self) {
        let options = self.options.get_value();
        self.state.update(|s| s.reset(&options));
    }
}

struct Slot {
    store: GridStateStore,
    holders: usize,
}

/// Keyed registry of live grid stores, provided once at the application root.
#[derive(Clone, Copy)]
pub struct GridStoreRegistry {
    slots: StoredValue<HashMap<GridKey, Slot>>,
    options: StoredValue<GridOptions>,
}

impl GridStoreRegistry {
    pub fn new(options: GridOptions) -> Self {
        Self {
            slots: StoredValue::new(HashMap::new()),
            options: StoredValue::new(options),
        }
    }

    /// Returns the store for `key`, creating it on first acquisition.
    pub fn acquire(&self, key: &GridKey) -> GridStateStore {
        let existing = self
            .slots
            .with_value(|slots| slots.get(key).map(|slot| slot.store));
        let store = match existing {
            Some(store) => store,
            None => {
                let store = GridStateStore::new(&self.options.get_value());
                log::debug!("grid store {} created for '{}'", store.instance_id(), key);
                store
            }
        };
        self.slots.update_value(|slots| {
            slots
                .entry(key.clone())
                .or_insert(Slot { store, holders: 0 })
                .holders += 1;
        });
        store
    }

    /// Drops one hold on `key`; the store is discarded when nobody holds it.
    pub fn release(&self, key: &GridKey) {
        let mut dropped = None;
        let mut known = false;
        self.slots.update_value(|slots| {
            if let Some(slot) = slots.get_mut(key) {
                known = true;
                slot.holders = slot.holders.saturating_sub(1);
                if slot.holders == 0 {
                    dropped = slots.remove(key).map(|slot| slot.store.instance_id());
                }
            }
        });
        if !known {
            log::debug!("grid store release for unknown key '{}'", key);
        } else if let Some(instance_id) = dropped {
            log::debug!("grid store {} for '{}' discarded", instance_id, key);
        }
    }

    pub fn get(&self, key: &GridKey) -> Option<GridStateStore> {
        self.slots
            .with_value(|slots| slots.get(key).map(|slot| slot.store))
    }

    pub fn holders(&self, key: &GridKey) -> usize {
        self.slots
            .with_value(|slots| slots.get(key).map(|slot| slot.holders).unwrap_or(0))
    }

    /// Number of live stores.
    pub fn len(&self) -> usize {
        self.slots.with_value(|slots| slots.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn use_grid_registry() -> GridStoreRegistry {
    expect_provided::<GridStoreRegistry>("GridStoreRegistry")
}
