//! 日志系统初始化

use std::io::{self, IsTerminal};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志过滤规则
pub const DEFAULT_FILTER: &str = "staff_console=info";

/// 初始化日志系统
///
/// `RUST_LOG` 优先；否则 `verbose` 时使用 debug 级别，再否则使用配置文件中的规则。
/// 日志写到 stderr，避免和表格输出混在一起；交互模式下 stderr 仍是终端时不输出日志，
/// 需要时可用 `2>文件` 重定向。
pub fn init_logging(configured: Option<&str>, verbose: bool, interactive: bool) {
    let fallback = if verbose {
        "staff_console=debug".to_string()
    } else {
        configured.unwrap_or(DEFAULT_FILTER).to_string()
    };

    let fmt_layer = writes_to_stderr(interactive, io::stderr().is_terminal())
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(fmt_layer)
        .init();
}

/// 交互界面占用终端时，日志不能写到同一个终端
fn writes_to_stderr(interactive: bool, stderr_is_terminal: bool) -> bool {
    !(interactive && stderr_is_terminal)
}
