//! Client-side filter, sort and paging of grid rows.

use contracts::shared::grid::{
    FilterItem, FilterLogic, FilterModel, FilterOperator, GridRow, SortDirection, SortItem,
};
use serde_json::Value;
use std::cmp::Ordering;

use super::state::GridState;

/// One page of rows plus the counts the pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage {
    pub rows: Vec<GridRow>,
    /// Rows left after filtering.
    pub total: usize,
    /// Page actually shown, clamped into range.
    pub page: usize,
    pub page_count: usize,
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

pub fn apply_view(rows: &[GridRow], state: &GridState) -> GridPage {
    let mut visible: Vec<&GridRow> = rows
        .iter()
        .filter(|row| matches_filter(row, &state.filter_model))
        .collect();

    if !state.sort_model.is_empty() {
        // stable: rows equal under the sort model keep their delivery order
        visible.sort_by(|a, b| compare_rows(a, b, &state.sort_model));
    }

    let total = visible.len();
    let page_count = page_count(total, state.page_size);
    let page = state.page.min(page_count - 1);
    let start = page * state.page_size;
    let end = (start + state.page_size).min(total);

    GridPage {
        rows: visible
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|row| (*row).clone())
            .collect(),
        total,
        page,
        page_count,
    }
}

pub fn matches_filter(row: &GridRow, model: &FilterModel) -> bool {
    let mut active = model.items.iter().filter(|item| is_complete(item)).peekable();
    if active.peek().is_none() {
        return true;
    }
    match model.logic {
        FilterLogic::And => active.all(|item| matches_item(row, item)),
        FilterLogic::Or => active.any(|item| matches_item(row, item)),
    }
}

/// Items still being edited (no value yet) do not filter anything.
fn is_complete(item: &FilterItem) -> bool {
    item.operator.is_unary()
        || item
            .value
            .as_deref()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
}

fn matches_item(row: &GridRow, item: &FilterItem) -> bool {
    let text = row.text(&item.field);
    let cell = text.to_lowercase();
    let needle = item.value.as_deref().unwrap_or("").trim().to_lowercase();

    match item.operator {
        FilterOperator::Contains => cell.contains(&needle),
        FilterOperator::Equals => match (as_number(&text), needle.parse::<f64>().ok()) {
            (Some(a), Some(b)) => a == b,
            _ => cell == needle,
        },
        FilterOperator::StartsWith => cell.starts_with(&needle),
        FilterOperator::EndsWith => cell.ends_with(&needle),
        FilterOperator::IsEmpty => text.trim().is_empty(),
        FilterOperator::IsNotEmpty => !text.trim().is_empty(),
        FilterOperator::GreaterThan => compare_text(&text, &needle) == Ordering::Greater,
        FilterOperator::LessThan => compare_text(&text, &needle) == Ordering::Less,
    }
}

fn as_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

fn compare_text(a: &str, b: &str) -> Ordering {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => compare_text(&display(x), &display(y)),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn compare_rows(a: &GridRow, b: &GridRow, sort_model: &[SortItem]) -> Ordering {
    for item in sort_model {
        let ord = compare_values(a.value(&item.field), b.value(&item.field));
        let ord = match item.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Header click: flips direction of the current primary field, otherwise sorts by `field` ascending.
pub fn toggle_sort(sort_model: &[SortItem], field: &str) -> Vec<SortItem> {
    match sort_model.first() {
        Some(first) if first.field == field => vec![SortItem {
            field: field.to_string(),
            direction: first.direction.toggled(),
        }],
        _ => vec![SortItem::asc(field)],
    }
}

pub fn sort_indicator(sort_model: &[SortItem], field: &str) -> &'static str {
    match sort_model.iter().find(|item| item.field == field) {
        Some(item) if item.direction == SortDirection::Asc => " ▲",
        Some(_) => " ▼",
        None => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::state::{GridOptions, GridStatePatch};

    fn rows() -> Vec<GridRow> {
        vec![
            GridRow::new("1").with("name", "Bolt M8").with("qty", 120).with("line", "A"),
            GridRow::new("2").with("name", "nut M8").with("qty", 15).with("line", "B"),
            GridRow::new("3").with("name", "Washer").with("qty", 900).with("line", Value::Null),
            GridRow::new("4").with("name", "Bolt M10").with("qty", 15).with("line", "A"),
        ]
    }

    fn state_with(patch: GridStatePatch) -> GridState {
        let options = GridOptions {
            page_size_options: vec![2, 50],
            default_page_size: 50,
        };
        let mut state = GridState::new(&options);
        state.apply(patch, &options);
        state
    }

    fn ids(page: &GridPage) -> Vec<&str> {
        page.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_model_keeps_order() {
        let page = apply_view(&rows(), &state_with(GridStatePatch::default()));
        assert_eq!(ids(&page), vec!["1", "2", "3", "4"]);
        assert_eq!(page.total, 4);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_numeric_sort_then_tiebreak() {
        let state = state_with(
            GridStatePatch::default()
                .sort_model(vec![SortItem::asc("qty"), SortItem::desc("name")]),
        );
        let page = apply_view(&rows(), &state);
        assert_eq!(ids(&page), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let state = state_with(GridStatePatch::default().sort_model(vec![SortItem::asc("name")]));
        let page = apply_view(&rows(), &state);
        assert_eq!(ids(&page), vec!["4", "1", "2", "3"]);
    }

    #[test]
    fn test_filter_and_or() {
        let and = FilterModel::default()
            .with_item(FilterItem::new("name", FilterOperator::Contains, "bolt"))
            .with_item(FilterItem::new("qty", FilterOperator::GreaterThan, "100"));
        let page = apply_view(&rows(), &state_with(GridStatePatch::default().filter_model(and)));
        assert_eq!(ids(&page), vec!["1"]);

        let or = FilterModel {
            items: vec![
                FilterItem::new("qty", FilterOperator::Equals, "15"),
                FilterItem::unary("line", FilterOperator::IsEmpty),
            ],
            logic: FilterLogic::Or,
        };
        let page = apply_view(&rows(), &state_with(GridStatePatch::default().filter_model(or)));
        assert_eq!(ids(&page), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_incomplete_filter_is_ignored() {
        let model = FilterModel::default()
            .with_item(FilterItem::new("name", FilterOperator::StartsWith, "  "));
        let page = apply_view(&rows(), &state_with(GridStatePatch::default().filter_model(model)));
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_paging_and_clamp() {
        let state = state_with(GridStatePatch::default().page_size(2).page(1));
        let page = apply_view(&rows(), &state);
        assert_eq!(ids(&page), vec!["3", "4"]);
        assert_eq!(page.page_count, 2);

        let state = state_with(GridStatePatch::default().page_size(2).page(9));
        let page = apply_view(&rows(), &state);
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page), vec!["3", "4"]);
    }

    #[test]
    fn test_empty_rows() {
        let page = apply_view(&[], &state_with(GridStatePatch::default().page(3)));
        assert!(page.rows.is_empty());
        assert_eq!(page.page, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!(page_count(101, 50), 3);
    }

    #[test]
    fn test_toggle_sort() {
        let model = toggle_sort(&[], "qty");
        assert_eq!(model, vec![SortItem::asc("qty")]);
        let model = toggle_sort(&model, "qty");
        assert_eq!(model, vec![SortItem::desc("qty")]);
        let model = toggle_sort(&model, "name");
        assert_eq!(model, vec![SortItem::asc("name")]);
        assert_eq!(sort_indicator(&model, "name"), " ▲");
        assert_eq!(sort_indicator(&model, "qty"), " ⇅");
    }
}
