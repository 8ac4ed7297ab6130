//! 可排序、可分页的数据表

use std::cmp::Ordering;

use crate::app::error::types::TableError;

use super::collate::CollationKey;
use super::column::{Column, FieldKey};
use super::state::{clamp_page, SortDirection, SortState, TableEvent, TableState};
use super::view::{HeaderView, PaginationView, SortIndicator, TableBody, TableView};
use super::window::{has_next, has_previous, page_window};

/// 默认每页行数
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 数据表
///
/// 持有行、列和 [`TableState`]。排序后的行顺序会被缓存，
/// 只有排序状态或行集合变化时才重新计算。
pub struct DataTable<T> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    page_size: usize,
    title: Option<String>,
    state: TableState,
    // 排序后的行下标
    order: Vec<usize>,
}

impl<T> DataTable<T> {
    /// 创建数据表，每页行数必须大于 0
    pub fn new(
        rows: Vec<T>,
        columns: Vec<Column<T>>,
        page_size: usize,
    ) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidConfiguration(
                "page size must be greater than 0".to_string(),
            ));
        }

        let order = (0..rows.len()).collect();
        Ok(Self {
            rows,
            columns,
            page_size,
            title: None,
            state: TableState::default(),
            order,
        })
    }

    /// 设置标题
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    #[cfg(test)]
    pub fn state(&self) -> TableState {
        self.state
    }

    /// 总页数，没有数据时为 0
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    /// 当前页（从 1 开始）
    pub fn current_page(&self) -> usize {
        self.state.page
    }

    /// 外部指定当前页（越界时钳制）
    pub fn set_page(&mut self, page: usize) {
        self.handle(TableEvent::GoToPage(page));
    }

    /// 替换全部行，重新排序并把当前页钳制到有效范围
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.resort();
        let before = self.state.page;
        self.state = self.state.clamped(self.total_pages());
        if before != self.state.page {
            tracing::debug!(
                from = before,
                to = self.state.page,
                "page clamped after row change"
            );
        }
    }

    /// 点击第 `index` 列表头；越界或不可排序时无变化
    pub fn select_column(&mut self, index: usize) -> bool {
        let Some(column) = self.columns.get(index) else {
            return false;
        };
        let event = TableEvent::SelectHeader {
            field: column.field(),
            sortable: column.is_sortable(),
        };
        self.handle(event)
    }

    /// 直接设置排序；字段不属于任何可排序列时返回 `false`
    pub fn sort_by(&mut self, field: &str, direction: SortDirection) -> bool {
        let Some(column) = self
            .columns
            .iter()
            .find(|c| c.is_sortable() && c.field() == field)
        else {
            return false;
        };
        self.state.sort = SortState::Sorted {
            field: column.field(),
            direction,
        };
        self.resort();
        true
    }

    /// 应用事件，返回状态是否发生变化
    pub fn handle(&mut self, event: TableEvent) -> bool {
        let next = self.state.apply(event, self.total_pages());
        if next == self.state {
            return false;
        }

        let sort_changed = next.sort != self.state.sort;
        self.state = next;
        if sort_changed {
            tracing::debug!(sort = ?self.state.sort, "sort changed");
            self.resort();
        }
        true
    }

    /// 排序后的全部行
    #[cfg(test)]
    pub fn sorted_rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().map(move |&i| &self.rows[i])
    }

    /// 当前页可见行在 `rows()` 中的下标
    pub fn page_rows(&self) -> &[usize] {
        let start = (self.state.page - 1)
            .saturating_mul(self.page_size)
            .min(self.order.len());
        let end = start.saturating_add(self.page_size).min(self.order.len());
        &self.order[start..end]
    }

    /// 生成当前快照
    pub fn view(&self) -> TableView<'_> {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderView {
                label: column.header(),
                indicator: column.is_sortable().then(|| self.indicator(column.field())),
            })
            .collect();

        let visible = self.page_rows();
        let body = if visible.is_empty() {
            TableBody::Empty {
                colspan: self.columns.len(),
            }
        } else {
            TableBody::Rows(
                visible
                    .iter()
                    .map(|&i| {
                        let row = &self.rows[i];
                        self.columns.iter().map(|c| c.cell(row)).collect()
                    })
                    .collect(),
            )
        };

        let total = self.total_pages();
        let current = clamp_page(self.state.page, total);
        let pagination = (total > 1).then(|| PaginationView {
            current,
            total,
            markers: page_window(current, total),
            has_previous: has_previous(current),
            has_next: has_next(current, total),
        });

        let shown = (!visible.is_empty()).then(|| {
            let first = (current - 1) * self.page_size + 1;
            (first, first + visible.len() - 1)
        });

        TableView {
            title: self.title.as_deref(),
            headers,
            body,
            pagination,
            total_rows: self.rows.len(),
            shown,
        }
    }

    /// 重新计算排序后的行顺序
    fn resort(&mut self) {
        self.order = (0..self.rows.len()).collect();

        let SortState::Sorted { field, direction } = self.state.sort else {
            return;
        };
        let Some(column) = self.sort_column(field) else {
            return;
        };

        let keys: Vec<Option<CollationKey>> = self
            .rows
            .iter()
            .map(|row| {
                column
                    .value(row)
                    .map(|v| CollationKey::new(&v.to_string()))
            })
            .collect();

        // sort_by 是稳定排序，相等的行保持原有顺序
        self.order.sort_by(|&a, &b| {
            compare_keys(keys[a].as_ref(), keys[b].as_ref(), direction)
        });
    }

    fn indicator(&self, field: FieldKey) -> SortIndicator {
        match self.state.sort.direction_of(field) {
            None => SortIndicator::Unsorted,
            Some(SortDirection::Ascending) => SortIndicator::Ascending,
            Some(SortDirection::Descending) => SortIndicator::Descending,
        }
    }

    fn sort_column(&self, field: FieldKey) -> Option<&Column<T>> {
        self.columns
            .iter()
            .find(|c| c.is_sortable() && c.field() == field)
    }
}

/// 比较两个排序键：缺失值无论升降序都排在最后
pub fn compare_keys(
    a: Option<&CollationKey>,
    b: Option<&CollationKey>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = a.cmp(b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}
