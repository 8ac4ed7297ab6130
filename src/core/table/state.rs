//! 表格状态与状态转换
//!
//! 排序状态和当前页合并成一个不可变的 [`TableState`]，
//! 由纯函数 [`TableState::apply`] 根据事件推进，不依赖任何渲染。

use super::column::FieldKey;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// 排序状态：未排序，或按某个字段以某个方向排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        field: FieldKey,
        direction: SortDirection,
    },
}

impl SortState {
    /// 点击某列表头后的下一个状态：升序 → 降序 → 未排序
    pub fn cycle(self, field: FieldKey) -> Self {
        match self {
            SortState::Sorted {
                field: current,
                direction: SortDirection::Ascending,
            } if current == field => SortState::Sorted {
                field,
                direction: SortDirection::Descending,
            },
            SortState::Sorted {
                field: current,
                direction: SortDirection::Descending,
            } if current == field => SortState::Unsorted,
            _ => SortState::Sorted {
                field,
                direction: SortDirection::Ascending,
            },
        }
    }

    /// 指定字段当前的排序方向
    pub fn direction_of(&self, field: FieldKey) -> Option<SortDirection> {
        match *self {
            SortState::Sorted {
                field: current,
                direction,
            } if current == field => Some(direction),
            _ => None,
        }
    }
}

/// 表格事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// 点击表头
    SelectHeader { field: FieldKey, sortable: bool },
    /// 跳转到指定页
    GoToPage(usize),
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
}

/// 表格状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    pub sort: SortState,
    /// 当前页（从 1 开始）
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: SortState::Unsorted,
            page: 1,
        }
    }
}

impl TableState {
    /// 根据事件计算下一个状态
    ///
    /// 所有翻页请求都被钳制到 `[1, max(1, total_pages)]`；排序变化不改变当前页。
    pub fn apply(self, event: TableEvent, total_pages: usize) -> Self {
        match event {
            TableEvent::SelectHeader { field, sortable } => {
                if !sortable {
                    return self;
                }
                Self {
                    sort: self.sort.cycle(field),
                    ..self
                }
            }
            TableEvent::GoToPage(page) => self.with_page(page, total_pages),
            TableEvent::PreviousPage => self.with_page(self.page.saturating_sub(1), total_pages),
            TableEvent::NextPage => self.with_page(self.page.saturating_add(1), total_pages),
            TableEvent::FirstPage => self.with_page(1, total_pages),
            TableEvent::LastPage => self.with_page(total_pages, total_pages),
        }
    }

    /// 把当前页钳制到有效范围
    pub fn clamped(self, total_pages: usize) -> Self {
        self.with_page(self.page, total_pages)
    }

    fn with_page(self, page: usize, total_pages: usize) -> Self {
        Self {
            page: clamp_page(page, total_pages),
            ..self
        }
    }
}

/// 把页码钳制到 `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
