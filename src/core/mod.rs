//! 核心模块：数据表、输入处理与终端显示

pub mod input;
pub mod table;
pub mod viewer;
