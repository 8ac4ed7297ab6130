//! 表格渲染模型
//!
//! [`TableView`] 是某一时刻表格的完整快照，渲染器只读取它，不接触行数据。

use super::column::Cell;
use super::window::PageMarker;

/// 表头上的排序图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// 表头
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView<'a> {
    pub label: &'a str,
    /// 不可排序的列为 `None`
    pub indicator: Option<SortIndicator>,
}

/// 表体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<Vec<Cell>>),
    /// 没有可见行时的占位行，横跨所有列
    Empty { colspan: usize },
}

/// 分页控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: usize,
    pub total: usize,
    pub markers: Vec<PageMarker>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// 表格快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub title: Option<&'a str>,
    pub headers: Vec<HeaderView<'a>>,
    pub body: TableBody,
    /// 只有多于一页时才有分页控件
    pub pagination: Option<PaginationView>,
    pub total_rows: usize,
    /// 当前页显示的行号范围（从 1 开始，闭区间）
    pub shown: Option<(usize, usize)>,
}
