//! 员工与权限管理终端主程序

mod app;
mod cli;
mod core;
mod pages;

use app::error::types::Result;

fn main() -> Result<()> {
    // 运行命令行界面（日志在读取配置后初始化）
    cli::run_cli()
}
