//! 分页窗口计算

/// 页码较多时才使用省略号
const FULL_WINDOW_PAGES: usize = 7;

/// 分页控件中的一个标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// 计算分页控件要显示的页码列表
///
/// 总页数不超过 1 时返回空列表（不显示分页控件）；不超过 7 页时列出全部页码；
/// 否则始终包含首页和末页，中间根据当前页选取，并用省略号压缩。
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    if total <= 1 {
        return Vec::new();
    }
    if total <= FULL_WINDOW_PAGES {
        return (1..=total).map(Page).collect();
    }

    let current = current.clamp(1, total);
    if current <= 4 {
        vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Ellipsis,
            Page(total),
        ]
    } else if current >= total - 3 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 4),
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

/// 是否可以向前翻页
pub fn has_previous(current: usize) -> bool {
    current > 1
}

/// 是否可以向后翻页
pub fn has_next(current: usize, total: usize) -> bool {
    current < total
}
