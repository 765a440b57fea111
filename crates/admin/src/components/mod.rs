//! Descriptor types shared by the admin table screens.

pub mod data_table;

pub use data_table::{DataTableConfig, FilterOption, FilterType, TableColumn, TableFilter};
