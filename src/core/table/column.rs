//! 列定义与单元格

use colored::Color;

use super::value::FieldValue;

/// 字段键，标识行记录中的一个字段
pub type FieldKey = &'static str;

type Accessor<T> = Box<dyn Fn(&T) -> Option<FieldValue>>;
type Renderer<T> = Box<dyn Fn(&T) -> Cell>;

/// 渲染好的单元格
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
}

impl Cell {
    /// 无颜色单元格
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// 带颜色单元格
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// 表格列
///
/// 列顺序即从左到右的显示顺序；多个列可以共用同一个字段键。
pub struct Column<T> {
    header: String,
    field: FieldKey,
    sortable: bool,
    accessor: Accessor<T>,
    render: Option<Renderer<T>>,
}

impl<T> Column<T> {
    /// 创建可排序的列
    pub fn new<F>(header: impl Into<String>, field: FieldKey, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<FieldValue> + 'static,
    {
        Self {
            header: header.into(),
            field,
            sortable: true,
            accessor: Box::new(accessor),
            render: None,
        }
    }

    /// 设置是否可排序
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// 设置自定义渲染函数
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> Cell + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn field(&self) -> FieldKey {
        self.field
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// 取出字段值（用于排序）
    pub fn value(&self, row: &T) -> Option<FieldValue> {
        (self.accessor)(row)
    }

    /// 渲染单元格：优先使用自定义渲染，其次是字段文本，缺失时为空串
    pub fn cell(&self, row: &T) -> Cell {
        match &self.render {
            Some(render) => render(row),
            None => Cell::plain(self.value(row).map(|v| v.to_string()).unwrap_or_default()),
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("field", &self.field)
            .field("sortable", &self.sortable)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}
