//! 原始模式下的单行输入

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

use crate::app::error::types::Result;

/// 编辑结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Continue,
    Submit(String),
    Cancel,
}

/// 单行编辑器
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 处理一个按键
    pub fn apply(&mut self, code: KeyCode) -> EditOutcome {
        match code {
            KeyCode::Enter => EditOutcome::Submit(self.buffer.clone()),
            KeyCode::Esc => EditOutcome::Cancel,
            KeyCode::Backspace => {
                self.buffer.pop();
                EditOutcome::Continue
            }
            KeyCode::Char(c) => {
                self.buffer.push(c);
                EditOutcome::Continue
            }
            _ => EditOutcome::Continue,
        }
    }
}

/// 在屏幕最后一行提示输入，Enter 确认，Esc 取消
pub fn prompt_line(label: &str, initial: &str) -> Result<Option<String>> {
    let mut editor = LineEditor::new(initial);
    let (_, height) = terminal::size().unwrap_or((80, 24));
    let row = height.saturating_sub(1);
    let mut stdout = io::stdout();

    execute!(stdout, Show)?;
    let outcome = loop {
        execute!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
        write!(stdout, "{}{}", label, editor.buffer())?;
        stdout.flush()?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match editor.apply(key.code) {
                EditOutcome::Continue => {}
                EditOutcome::Submit(text) => break Some(text),
                EditOutcome::Cancel => break None,
            }
        }
    };
    execute!(stdout, Hide, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_and_submits() {
        let mut editor = LineEditor::new("ab");
        assert_eq!(editor.apply(KeyCode::Backspace), EditOutcome::Continue);
        assert_eq!(editor.apply(KeyCode::Char('я')), EditOutcome::Continue);
        assert_eq!(editor.apply(KeyCode::Left), EditOutcome::Continue);
        assert_eq!(
            editor.apply(KeyCode::Enter),
            EditOutcome::Submit("aя".to_string())
        );
    }

    #[test]
    fn escape_cancels() {
        let mut editor = LineEditor::default();
        editor.apply(KeyCode::Char('1'));
        assert_eq!(editor.apply(KeyCode::Esc), EditOutcome::Cancel);
    }
}
