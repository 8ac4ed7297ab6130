//! 表格文本渲染
//!
//! 把 [`TableView`] 转成终端行。列宽按显示宽度计算，先补齐再上色，
//! 因此颜色控制码不会影响对齐。

use colored::*;

use crate::core::table::view::PaginationView;
use crate::core::table::{Cell, PageMarker, SortIndicator, TableBody, TableView};

use super::display_utils::{center_in_width, display_width, fit_to_width};

/// 空表占位文本
pub const EMPTY_STATE_TEXT: &str = "无数据可显示";

/// 列分隔符
const COLUMN_SEPARATOR: &str = " │ ";

/// 表格渲染器
pub struct TableRenderer {
    max_column_width: usize,
}

impl TableRenderer {
    /// 创建渲染器，单列最宽 `max_column_width` 列
    pub fn new(max_column_width: usize) -> Self {
        Self {
            max_column_width: max_column_width.max(4),
        }
    }

    /// 渲染整张表；`focused` 为表头光标所在列
    pub fn render(&self, view: &TableView<'_>, focused: Option<usize>) -> Vec<String> {
        let headers: Vec<String> = view
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let marker = if focused == Some(i) { "▸" } else { " " };
                match h.indicator {
                    Some(indicator) => format!("{}{} {}", marker, h.label, sort_glyph(indicator)),
                    None => format!("{}{}", marker, h.label),
                }
            })
            .collect();
        let widths = self.column_widths(&headers, &view.body);
        let table_width = widths.iter().sum::<usize>()
            + display_width(COLUMN_SEPARATOR) * widths.len().saturating_sub(1);

        let mut lines = Vec::new();

        if let Some(title) = view.title {
            lines.push(title.bright_white().bold().to_string());
        }
        lines.push("─".repeat(table_width));

        let header_line = headers
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (text, &w))| {
                let padded = fit_to_width(text, w);
                if focused == Some(i) {
                    padded.bold().underline().to_string()
                } else {
                    padded.bold().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        lines.push(header_line);
        lines.push("─".repeat(table_width));

        match &view.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    let line = row
                        .iter()
                        .zip(&widths)
                        .map(|(cell, &w)| paint(cell, w))
                        .collect::<Vec<_>>()
                        .join(COLUMN_SEPARATOR);
                    lines.push(line);
                }
            }
            TableBody::Empty { .. } => {
                lines.push(
                    center_in_width(EMPTY_STATE_TEXT, table_width)
                        .bright_black()
                        .to_string(),
                );
            }
        }

        lines.push("─".repeat(table_width));

        if let Some(pagination) = &view.pagination {
            lines.push(pagination_line(pagination));
        }
        lines.push(summary_line(view));

        lines
    }

    /// 每列宽度：表头与可见单元格中最宽者，再受最大列宽限制
    fn column_widths(&self, headers: &[String], body: &TableBody) -> Vec<usize> {
        let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();

        if let TableBody::Rows(rows) = body {
            for row in rows {
                for (w, cell) in widths.iter_mut().zip(row) {
                    *w = (*w).max(display_width(&cell.text));
                }
            }
        }

        widths
            .into_iter()
            .map(|w| w.min(self.max_column_width))
            .collect()
    }
}

/// 排序图标
pub fn sort_glyph(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Unsorted => "↕",
        SortIndicator::Ascending => "↑",
        SortIndicator::Descending => "↓",
    }
}

/// 分页控件行
pub fn pagination_line(pagination: &PaginationView) -> String {
    let previous = if pagination.has_previous {
        "‹ 上一页".normal()
    } else {
        "‹ 上一页".bright_black()
    };
    let next = if pagination.has_next {
        "下一页 ›".normal()
    } else {
        "下一页 ›".bright_black()
    };

    let pages = pagination
        .markers
        .iter()
        .map(|marker| match *marker {
            PageMarker::Page(n) if n == pagination.current => {
                format!("[{}]", n).reversed().bold().to_string()
            }
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => "…".bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}  {}  {}", previous, pages, next)
}

/// 统计行
fn summary_line(view: &TableView<'_>) -> String {
    let text = match view.shown {
        Some((first, last)) => {
            format!("显示第 {}-{} 行，共 {} 行", first, last, view.total_rows)
        }
        None => format!("共 {} 行", view.total_rows),
    };
    text.bright_black().to_string()
}

/// 补齐宽度后再上色
fn paint(cell: &Cell, width: usize) -> String {
    let padded = fit_to_width(&cell.text, width);
    match cell.color {
        Some(color) => padded.color(color).to_string(),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::view::HeaderView;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn view_with(body: TableBody, pagination: Option<PaginationView>) -> TableView<'static> {
        TableView {
            title: Some("员工列表"),
            headers: vec![
                HeaderView {
                    label: "ID",
                    indicator: Some(SortIndicator::Ascending),
                },
                HeaderView {
                    label: "操作",
                    indicator: None,
                },
            ],
            body,
            pagination,
            total_rows: 2,
            shown: Some((1, 2)),
        }
    }

    #[test]
    fn renders_headers_rows_and_summary() {
        no_color();
        let view = view_with(
            TableBody::Rows(vec![
                vec![Cell::plain("1"), Cell::plain("[编辑]")],
                vec![Cell::plain("10"), Cell::plain("[编辑]")],
            ]),
            None,
        );
        let lines = TableRenderer::new(30).render(&view, Some(0));

        assert_eq!(lines[0], "员工列表");
        assert_eq!(lines[2], "▸ID ↑ │  操作 ");
        assert_eq!(lines[4], "1     │ [编辑]");
        assert_eq!(lines[5], "10    │ [编辑]");
        assert_eq!(lines.last().unwrap(), "显示第 1-2 行，共 2 行");
    }

    #[test]
    fn empty_body_spans_the_table() {
        no_color();
        let mut view = view_with(TableBody::Empty { colspan: 2 }, None);
        view.shown = None;
        view.total_rows = 0;
        let lines = TableRenderer::new(30).render(&view, None);

        assert!(lines.iter().any(|l| l.trim() == EMPTY_STATE_TEXT));
        assert_eq!(lines.last().unwrap(), "共 0 行");
    }

    #[test]
    fn pagination_marks_current_page() {
        no_color();
        let pagination = PaginationView {
            current: 7,
            total: 12,
            markers: crate::core::table::window::page_window(7, 12),
            has_previous: true,
            has_next: true,
        };
        assert_eq!(
            pagination_line(&pagination),
            "‹ 上一页  1 … 6 [7] 8 … 12  下一页 ›"
        );
    }

    #[test]
    fn long_cells_are_truncated() {
        no_color();
        let view = view_with(
            TableBody::Rows(vec![vec![
                Cell::plain("1"),
                Cell::plain("Системный администратор"),
            ]]),
            None,
        );
        let lines = TableRenderer::new(8).render(&view, None);
        assert_eq!(lines[4], "1     │ Системн…");
    }
}
