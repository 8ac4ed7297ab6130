//! 与行类型无关的表格操作接口
//!
//! 交互层通过 `dyn TableControl` 驱动不同行类型的 [`DataTable`]。

use super::data_table::DataTable;
use super::state::{SortDirection, TableEvent};
use super::view::TableView;

pub trait TableControl {
    fn view(&self) -> TableView<'_>;
    fn handle(&mut self, event: TableEvent) -> bool;
    fn select_column(&mut self, index: usize) -> bool;
    fn sort_by(&mut self, field: &str, direction: SortDirection) -> bool;
    fn set_page(&mut self, page: usize);
    fn column_count(&self) -> usize;
    fn current_page(&self) -> usize;
    fn total_pages(&self) -> usize;
}

impl<T> TableControl for DataTable<T> {
    fn view(&self) -> TableView<'_> {
        DataTable::view(self)
    }

    fn handle(&mut self, event: TableEvent) -> bool {
        DataTable::handle(self, event)
    }

    fn select_column(&mut self, index: usize) -> bool {
        DataTable::select_column(self, index)
    }

    fn sort_by(&mut self, field: &str, direction: SortDirection) -> bool {
        DataTable::sort_by(self, field, direction)
    }

    fn set_page(&mut self, page: usize) {
        DataTable::set_page(self, page)
    }

    fn column_count(&self) -> usize {
        self.columns().len()
    }

    fn current_page(&self) -> usize {
        DataTable::current_page(self)
    }

    fn total_pages(&self) -> usize {
        DataTable::total_pages(self)
    }
}
