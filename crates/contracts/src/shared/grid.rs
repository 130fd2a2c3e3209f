//! Data contracts of the data grid: rows, columns and the sort/filter models a
//! grid reports when the user interacts with it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type RowId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// One entry of a sort model. Earlier entries take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortItem {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortItem {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    GreaterThan,
    LessThan,
}

impl FilterOperator {
    /// Operators that do not look at `FilterItem::value`.
    pub fn is_unary(self) -> bool {
        matches!(self, FilterOperator::IsEmpty | FilterOperator::IsNotEmpty)
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::Equals => "equals",
            FilterOperator::StartsWith => "starts with",
            FilterOperator::EndsWith => "ends with",
            FilterOperator::IsEmpty => "is empty",
            FilterOperator::IsNotEmpty => "is not empty",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
        }
    }

    pub fn all() -> [FilterOperator; 8] {
        [
            FilterOperator::Contains,
            FilterOperator::Equals,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
            FilterOperator::IsEmpty,
            FilterOperator::IsNotEmpty,
            FilterOperator::GreaterThan,
            FilterOperator::LessThan,
        ]
    }
}

/// A single predicate over one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub field: String,
    pub operator: FilterOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FilterItem {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: Some(value.into()),
        }
    }

    pub fn unary(field: impl Into<String>, operator: FilterOperator) -> Self {
        Self {
            field: field.into(),
            operator,
            value: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLogic {
    #[default]
    And,
    Or,
}

/// Structured predicate list applied to grid rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterModel {
    #[serde(default)]
    pub items: Vec<FilterItem>,
    #[serde(default)]
    pub logic: FilterLogic,
}

impl FilterModel {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn with_item(mut self, item: FilterItem) -> Self {
        self.items.push(item);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridColumn {
    pub field: String,
    pub header_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default = "default_sortable")]
    pub sortable: bool,
}

fn default_sortable() -> bool {
    true
}

impl GridColumn {
    pub fn new(field: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header_name: header_name.into(),
            width: None,
            sortable: true,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

/// A row as delivered by the query layer: an id plus loosely typed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub id: RowId,
    #[serde(default)]
    pub values: Map<String, Value>,
}

impl GridRow {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            values: Map::new(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Display text of a field. Missing and null values render as "".
    pub fn text(&self, field: &str) -> String {
        match self.values.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_text() {
        let row = GridRow::new("1")
            .with("name", "Bolt M8")
            .with("qty", 120)
            .with("note", Value::Null);
        assert_eq!(row.text("name"), "Bolt M8");
        assert_eq!(row.text("qty"), "120");
        assert_eq!(row.text("note"), "");
        assert_eq!(row.text("missing"), "");
    }

    #[test]
    fn test_filter_model_wire_format() {
        let json = r#"{"items":[{"field":"status","operator":"isNotEmpty"}],"logic":"or"}"#;
        let model: FilterModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.logic, FilterLogic::Or);
        assert_eq!(model.items[0].operator, FilterOperator::IsNotEmpty);
        assert!(model.items[0].value.is_none());

        let empty: FilterModel = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.logic, FilterLogic::And);
    }

    #[test]
    fn test_sort_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortItem::desc("qty").direction.toggled(), SortDirection::Asc);
    }
}
