//! Data table descriptor types.
//!
//! These types describe an admin table screen: its columns (and which of
//! them sort), its filters and its empty state. Front ends render from them,
//! the table controller uses them to decide which columns accept a sort, and
//! the CLI checks option filters against them.

use serde::{Deserialize, Serialize};

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether clicking the header sorts the loaded page.
    pub sortable: bool,
    /// Whether the column is visible by default.
    pub default_visible: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
            default_visible: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            default_visible: true,
        }
    }

    /// Set whether the column is visible by default.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }
}

/// Filter type for data tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Text input filter.
    Text,
    /// Single-select dropdown.
    Select,
    /// Multi-select checkboxes (sent comma-separated).
    MultiSelect,
    /// Date range picker.
    DateRange,
    /// Number range (min/max).
    NumberRange,
}

impl FilterType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::DateRange => "date_range",
            Self::NumberRange => "number_range",
        }
    }
}

/// Filter definition for a data table.
///
/// `key` names the [`Filters`](crate::shopify::Filters) field it feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFilter {
    /// Filter parameter key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Filter type.
    pub filter_type: FilterType,
    /// Placeholder text (for text inputs).
    pub placeholder: Option<String>,
    /// Available options (for select/multiselect).
    pub options: Vec<FilterOption>,
}

/// Option for select/multiselect filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl TableFilter {
    fn build(key: &str, label: &str, filter_type: FilterType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type,
            placeholder: None,
            options: vec![],
        }
    }

    /// Create a text filter.
    #[must_use]
    pub fn text(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            placeholder: Some(placeholder.to_string()),
            ..Self::build(key, label, FilterType::Text)
        }
    }

    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            options,
            ..Self::build(key, label, FilterType::Select)
        }
    }

    /// Create a multi-select filter.
    #[must_use]
    pub fn multi_select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            options,
            ..Self::build(key, label, FilterType::MultiSelect)
        }
    }

    /// Create a date range filter.
    #[must_use]
    pub fn date_range(key: &str, label: &str) -> Self {
        Self::build(key, label, FilterType::DateRange)
    }

    /// Create a number range filter.
    #[must_use]
    pub fn number_range(key: &str, label: &str) -> Self {
        Self::build(key, label, FilterType::NumberRange)
    }

    /// Whether `value` is one of the filter's options (case-insensitive).
    /// Filters without options accept anything.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.options.is_empty()
            || self
                .options
                .iter()
                .any(|o| o.value.eq_ignore_ascii_case(value.trim()))
    }

    /// Option values in declaration order.
    #[must_use]
    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            filters: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// The filter feeding `key`, if the table has one.
    #[must_use]
    pub fn find_filter(&self, key: &str) -> Option<&TableFilter> {
        self.filters.iter().find(|f| f.key == key)
    }

    /// Keys of the sortable columns.
    #[must_use]
    pub fn sortable_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key.as_str())
            .collect()
    }

    /// Whether `key` names a sortable column.
    #[must_use]
    pub fn is_sortable(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.sortable && c.key == key)
    }
}
