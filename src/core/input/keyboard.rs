//! 键盘输入处理

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// 默认防抖间隔
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// 交互命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    /// 表头光标左移
    FocusPrevious,
    /// 表头光标右移
    FocusNext,
    /// 对光标所在列循环排序
    SortFocused,
    /// 对第 N 列（从 0 开始）循环排序
    SortColumn(usize),
    /// 输入页码跳转
    GoToPage,
    Redraw,
    /// 编辑筛选条件
    EditFilter,
    AddRecord,
    DeleteRecord,
}

/// 键盘输入处理器
pub struct KeyboardHandler {
    last_key_time: Instant,
    last_key_code: Option<KeyCode>,
    debounce: Duration,
}

impl KeyboardHandler {
    /// 创建新的键盘处理器
    pub fn new(debounce_duration_ms: u64) -> Self {
        Self {
            last_key_time: Instant::now(),
            last_key_code: None,
            debounce: Duration::from_millis(debounce_duration_ms),
        }
    }

    /// 判断是否应该处理按键（防抖处理）
    pub fn should_process_key(&mut self, code: &KeyCode) -> bool {
        self.should_process_key_at(code, Instant::now())
    }

    fn should_process_key_at(&mut self, code: &KeyCode, now: Instant) -> bool {
        let is_same_key = self.last_key_code.as_ref() == Some(code);

        // 同一个键必须间隔指定时间
        if is_same_key && now.duration_since(self.last_key_time) < self.debounce {
            return false;
        }

        self.last_key_code = Some(*code);
        self.last_key_time = now;
        true
    }

    /// 把按键映射为命令；释放事件和防抖期内的重复按键返回 `None`
    pub fn command_for(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let command = map_key(key.code, key.modifiers)?;
        if !self.should_process_key(&key.code) {
            return None;
        }
        Some(command)
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

/// 按键到命令的映射
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    let command = match (code, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Command::Quit,
        (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => Command::Quit,
        (KeyCode::Left, _) | (KeyCode::PageUp, _) => Command::PreviousPage,
        (KeyCode::Right, _) | (KeyCode::PageDown, _) => Command::NextPage,
        (KeyCode::Home, _) => Command::FirstPage,
        (KeyCode::End, _) => Command::LastPage,
        (KeyCode::BackTab, _) => Command::FocusPrevious,
        (KeyCode::Tab, _) => Command::FocusNext,
        (KeyCode::Enter, _) | (KeyCode::Char('s'), _) => Command::SortFocused,
        (KeyCode::Char(c @ '1'..='9'), _) => Command::SortColumn(c as usize - '1' as usize),
        (KeyCode::Char('g'), _) => Command::GoToPage,
        (KeyCode::Char('r'), _) => Command::Redraw,
        (KeyCode::Char('/'), _) => Command::EditFilter,
        (KeyCode::Char('a'), _) => Command::AddRecord,
        (KeyCode::Char('d'), _) => Command::DeleteRecord,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_and_sorting_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(map_key(KeyCode::Left, none), Some(Command::PreviousPage));
        assert_eq!(map_key(KeyCode::Right, none), Some(Command::NextPage));
        assert_eq!(
            map_key(KeyCode::Char('1'), none),
            Some(Command::SortColumn(0))
        );
        assert_eq!(
            map_key(KeyCode::Char('9'), none),
            Some(Command::SortColumn(8))
        );
        assert_eq!(map_key(KeyCode::Char('0'), none), None);
        assert_eq!(
            map_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Command::Quit)
        );
        assert_eq!(map_key(KeyCode::Char('x'), none), None);
    }

    #[test]
    fn same_key_inside_interval_is_dropped() {
        let mut handler = KeyboardHandler::new(150);
        let start = Instant::now();

        assert!(handler.should_process_key_at(&KeyCode::Right, start));
        assert!(!handler.should_process_key_at(
            &KeyCode::Right,
            start + Duration::from_millis(50)
        ));
        assert!(handler.should_process_key_at(
            &KeyCode::Left,
            start + Duration::from_millis(60)
        ));
        assert!(handler.should_process_key_at(
            &KeyCode::Left,
            start + Duration::from_millis(300)
        ));
    }
}
