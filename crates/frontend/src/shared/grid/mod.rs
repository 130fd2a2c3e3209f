//! Data grid with per-tab scoped interaction state.

pub mod binding;
pub mod data_grid;
pub mod state;
pub mod store;
pub mod view;

pub use binding::{GridButton, GridHandlers, ScopedGrid, TabGrid};
pub use state::{GridOptions, GridState, GridStatePatch};
pub use store::{use_grid_registry, GridKey, GridStateStore, GridStoreRegistry};
