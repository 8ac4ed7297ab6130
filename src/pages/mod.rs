//! 管理页面
//!
//! 每个页面持有自己的行数据和列定义，并把它们交给 [`DataTable`](crate::core::table::DataTable)。

pub mod employees;
pub mod permissions;

use crate::app::error::types::Result;
use crate::core::input::keyboard::Command;
use crate::core::table::control::TableControl;

/// 向用户询问一行文本；取消时返回 `None`
pub trait Prompter {
    fn ask(&mut self, label: &str, initial: &str) -> Result<Option<String>>;
}

/// 可在查看器中显示的页面
pub trait AdminPage {
    /// 页面标题
    fn heading(&self) -> String;

    /// 标题下方的说明行
    fn summary(&self) -> Vec<String>;

    /// 页面特有按键的帮助文本
    fn extra_help(&self) -> Option<&'static str> {
        None
    }

    fn table(&self) -> &dyn TableControl;

    fn table_mut(&mut self) -> &mut dyn TableControl;

    /// 处理页面特有命令，返回要显示的状态消息
    fn run_action(
        &mut self,
        _command: Command,
        _prompter: &mut dyn Prompter,
    ) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// 按顺序返回预设回答的 [`Prompter`]
    pub struct ScriptedPrompter {
        answers: VecDeque<Option<String>>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, label: &str, _initial: &str) -> Result<Option<String>> {
            self.asked.push(label.to_string());
            Ok(self.answers.pop_front().flatten())
        }
    }
}
