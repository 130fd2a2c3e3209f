//! Interaction state of one data grid and its merge rules.

use contracts::shared::grid::{FilterModel, GridRow, RowId, SortItem};
use std::collections::HashSet;

use crate::config::WorkspaceConfig;

/// Page-size rules shared by every grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

impl GridOptions {
    pub fn allows(&self, page_size: usize) -> bool {
        self.page_size_options.contains(&page_size)
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions::from(&WorkspaceConfig::default())
    }
}

impl From<&WorkspaceConfig> for GridOptions {
    fn from(config: &WorkspaceConfig) -> Self {
        Self {
            page_size_options: config.page_size_options.clone(),
            default_page_size: config.default_page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub selected_row_ids: HashSet<RowId>,
    /// Zero-based.
    pub page: usize,
    pub page_size: usize,
    pub sort_model: Vec<SortItem>,
    pub filter_model: FilterModel,
}

/// Partial update of [`GridState`]. Only `Some` fields are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridStatePatch {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort_model: Option<Vec<SortItem>>,
    pub filter_model: Option<FilterModel>,
}

impl GridStatePatch {
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn sort_model(mut self, sort_model: Vec<SortItem>) -> Self {
        self.sort_model = Some(sort_model);
        self
    }

    pub fn filter_model(mut self, filter_model: FilterModel) -> Self {
        self.filter_model = Some(filter_model);
        self
    }
}

impl GridState {
    pub fn new(options: &GridOptions) -> Self {
        Self {
            selected_row_ids: HashSet::new(),
            page: 0,
            page_size: options.default_page_size,
            sort_model: Vec::new(),
            filter_model: FilterModel::default(),
        }
    }

    /// Selection is replaced, never merged: the grid always reports the full set.
    pub fn update_selection(&mut self, selection: HashSet<RowId>) {
        self.selected_row_ids = selection;
    }

    /// Shallow-merges the supplied keys.
    ///
    /// A page size outside the allowed set is dropped; the rest of the patch still applies.
    /// Returns false if something was dropped.
    pub fn apply(&mut self, patch: GridStatePatch, options: &GridOptions) -> bool {
        let mut accepted = true;
        if let Some(page) = patch.page {
            self.page = page;
        }
        if let Some(page_size) = patch.page_size {
            if options.allows(page_size) {
                self.page_size = page_size;
            } else {
                accepted = false;
            }
        }
        if let Some(sort_model) = patch.sort_model {
            self.sort_model = sort_model;
        }
        if let Some(filter_model) = patch.filter_model {
            self.filter_model = filter_model;
        }
        accepted
    }

    pub fn reset(&mut self, options: &GridOptions) {
        *self = GridState::new(options);
    }
}

/// Row cache of a grid, kept apart from interaction state so a refresh does
/// not reset selection, paging, sort or filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridData {
    pub rows: Vec<GridRow>,
    pub total_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridDataPatch {
    pub rows: Option<Vec<GridRow>>,
    pub total_rows: Option<usize>,
}

impl GridDataPatch {
    pub fn rows(mut self, rows: Vec<GridRow>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn total_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = Some(total_rows);
        self
    }
}

impl GridData {
    pub fn apply(&mut self, patch: GridDataPatch) {
        if let Some(rows) = patch.rows {
            self.rows = rows;
        }
        if let Some(total_rows) = patch.total_rows {
            self.total_rows = total_rows;
        }
    }
}
