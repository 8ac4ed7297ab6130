//! 交互式表格查看器

use colored::*;
use crossterm::event::{self, Event};

use crate::app::error::types::Result;
use crate::core::input::keyboard::{Command, KeyboardHandler};
use crate::core::input::prompt::prompt_line;
use crate::core::table::TableEvent;
use crate::core::viewer::table_display::TableRenderer;
use crate::core::viewer::terminal::TerminalManager;
use crate::pages::{AdminPage, Prompter};

/// 基本操作帮助
const HELP: &str =
    "导航: ←→ 翻页 | Home/End 首页/末页 | g 跳页 | Tab 选择列 | Enter/s 排序 | 1-9 按列排序 | r 刷新 | ESC/q 退出";

/// 通过终端最后一行提问
struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str, initial: &str) -> Result<Option<String>> {
        prompt_line(label, initial)
    }
}

/// 表格查看器
pub struct TableViewer {
    page: Box<dyn AdminPage>,
    // 模块化组件
    terminal_manager: TerminalManager,
    keyboard_handler: KeyboardHandler,
    // 状态管理
    focused: usize,
    status: Option<String>,
    last_size: (usize, usize),
}

impl TableViewer {
    /// 创建新的表格查看器
    pub fn new(page: Box<dyn AdminPage>, debounce_ms: u64) -> Self {
        Self {
            page,
            terminal_manager: TerminalManager::new(),
            keyboard_handler: KeyboardHandler::new(debounce_ms),
            focused: 0,
            status: None,
            last_size: (0, 0),
        }
    }

    /// 运行查看器
    pub fn run(&mut self) -> Result<()> {
        self.terminal_manager.enter_raw_mode()?;
        self.redraw()?;

        loop {
            // 终端尺寸变化时重绘
            let size = self.terminal_manager.get_size();
            if size != self.last_size {
                self.redraw()?;
            }

            // 等待用户输入
            let key = match event::read()? {
                Event::Key(key) => key,
                Event::Resize(_, _) => {
                    self.redraw()?;
                    continue;
                }
                _ => continue,
            };

            let Some(command) = self.keyboard_handler.command_for(key) else {
                continue;
            };
            tracing::debug!(?command, "command");

            if command == Command::Quit {
                break;
            }
            self.status = None;
            self.execute(command)?;
            self.redraw()?;
        }

        // 恢复终端（由 TerminalManager 的 Drop trait 自动处理）
        Ok(())
    }

    /// 执行命令
    fn execute(&mut self, command: Command) -> Result<()> {
        let column_count = self.page.table().column_count().max(1);

        match command {
            Command::Quit | Command::Redraw => {}
            Command::PreviousPage => {
                self.page.table_mut().handle(TableEvent::PreviousPage);
            }
            Command::NextPage => {
                self.page.table_mut().handle(TableEvent::NextPage);
            }
            Command::FirstPage => {
                self.page.table_mut().handle(TableEvent::FirstPage);
            }
            Command::LastPage => {
                self.page.table_mut().handle(TableEvent::LastPage);
            }
            Command::FocusPrevious => {
                self.focused = (self.focused + column_count - 1) % column_count;
            }
            Command::FocusNext => {
                self.focused = (self.focused + 1) % column_count;
            }
            Command::SortFocused => {
                self.page.table_mut().select_column(self.focused);
            }
            Command::SortColumn(index) => {
                if index < column_count {
                    self.focused = index;
                    self.page.table_mut().select_column(index);
                }
            }
            Command::GoToPage => {
                let total = self.page.table().total_pages();
                let label = format!("跳转到页码 (1-{}): ", total.max(1));
                if let Some(answer) = prompt_line(&label, "")? {
                    match answer.trim().parse::<usize>() {
                        Ok(page) => {
                            self.page.table_mut().handle(TableEvent::GoToPage(page));
                        }
                        Err(_) => {
                            self.status = Some(format!("无效的页码: {}", answer.trim()));
                        }
                    }
                }
            }
            Command::EditFilter | Command::AddRecord | Command::DeleteRecord => {
                self.status = self.page.run_action(command, &mut TerminalPrompter)?;
            }
        }

        Ok(())
    }

    /// 重绘整个屏幕
    fn redraw(&mut self) -> Result<()> {
        self.last_size = self.terminal_manager.get_size();
        let max_width = self
            .terminal_manager
            .max_column_width(self.page.table().column_count());
        let renderer = TableRenderer::new(max_width);

        let mut lines = compose_screen(self.page.as_ref(), &renderer, Some(self.focused));
        if let Some(status) = &self.status {
            lines.push(status.bright_yellow().to_string());
        }
        lines.push("=".repeat(80));
        lines.push(HELP.bright_black().to_string());
        if let Some(extra) = self.page.extra_help() {
            lines.push(extra.bright_black().to_string());
        }
        lines.push("=".repeat(80));

        self.terminal_manager.clear_screen()?;
        self.terminal_manager.draw(&lines)
    }
}

/// 组合页面标题、说明行和表格
pub fn compose_screen(
    page: &dyn AdminPage,
    renderer: &TableRenderer,
    focused: Option<usize>,
) -> Vec<String> {
    let mut lines = vec![page.heading().bright_cyan().bold().to_string()];
    lines.extend(page.summary());
    lines.push(String::new());
    lines.extend(renderer.render(&page.table().view(), focused));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::employees::EmployeesPage;
    use crate::pages::permissions::{FilterField, PermissionsPage};

    #[test]
    fn employee_screen_has_heading_summary_and_pagination() {
        colored::control::set_override(false);
        let page = EmployeesPage::new(6).unwrap();
        let lines = compose_screen(&page, &TableRenderer::new(40), None);

        assert_eq!(lines[0], "员工管理");
        assert_eq!(lines[2], "共 12 名员工");
        assert!(lines.iter().any(|l| l == "员工列表"));
        assert!(lines.iter().any(|l| l.starts_with("‹ 上一页  [1] 2")));
        assert_eq!(lines.last().unwrap(), "显示第 1-6 行，共 12 行");
    }

    #[test]
    fn filtered_out_permissions_show_empty_state() {
        colored::control::set_override(false);
        let mut page = PermissionsPage::new(10).unwrap();
        page.set_filter(FilterField::Source, "zzz");
        let lines = compose_screen(&page, &TableRenderer::new(40), None);

        assert_eq!(lines[1], "数量: 0");
        assert!(lines.iter().any(|l| l.trim() == "无数据可显示"));
        assert!(!lines.iter().any(|l| l.contains("上一页")));
    }
}
