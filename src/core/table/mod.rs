//! 可排序分页数据表
//!
//! 调用方提供行与列定义；表格负责三态排序、分页，并通过 [`TableView`] 输出快照，
//! 分页窗口由 [`window::page_window`] 计算。

pub mod collate;
pub mod column;
pub mod control;
pub mod data_table;
pub mod state;
pub mod value;
pub mod view;
pub mod window;

pub use column::{Cell, Column};
pub use data_table::{DataTable, DEFAULT_PAGE_SIZE};
pub use state::{SortDirection, TableEvent};
pub use value::FieldValue;
pub use view::{SortIndicator, TableBody, TableView};
pub use window::PageMarker;
