//! 命令行界面模块

pub mod args;
pub mod table_viewer;

use clap::Parser;
use colored::*;

use crate::app::config::settings::Settings;
use crate::app::error::types::{AppError, Result, TableError};
use crate::app::logging::setup::init_logging;
use crate::core::viewer::table_display::TableRenderer;
use crate::pages::employees::{self, EmployeesPage};
use crate::pages::permissions::{self, PermissionsPage};
use crate::pages::AdminPage;

use self::args::{CliArgs, PageKind};
use self::table_viewer::{compose_screen, TableViewer};

/// 非交互模式下的单列最大宽度
const PRINT_COLUMN_WIDTH: usize = 40;

/// 运行命令行界面
pub fn run_cli() -> Result<()> {
    let args = CliArgs::parse();

    // 加载配置
    let settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => fail(&e.to_string()),
    };

    // 初始化日志系统
    init_logging(settings.log.filter.as_deref(), args.verbose, !args.print);

    if args.no_color || !settings.ui.color {
        colored::control::set_override(false);
    }

    let page = match build_page(&args, &settings) {
        Ok(page) => page,
        Err(e) => fail(&e.to_string()),
    };

    if args.print {
        let renderer = TableRenderer::new(PRINT_COLUMN_WIDTH);
        for line in compose_screen(page.as_ref(), &renderer, None) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut viewer = TableViewer::new(page, settings.ui.debounce_ms);
    viewer.run()
}

/// 按参数和配置创建页面，并应用初始排序与页码
pub fn build_page(args: &CliArgs, settings: &Settings) -> Result<Box<dyn AdminPage>> {
    let mut page: Box<dyn AdminPage> = match args.page {
        PageKind::Employees => {
            let page_size = args
                .page_size
                .or(settings.employees.page_size)
                .unwrap_or(employees::DEFAULT_PAGE_SIZE);
            Box::new(EmployeesPage::new(page_size).map_err(table_error)?)
        }
        PageKind::Permissions => {
            let page_size = args
                .page_size
                .or(settings.permissions.page_size)
                .unwrap_or(permissions::DEFAULT_PAGE_SIZE);
            Box::new(PermissionsPage::new(page_size).map_err(table_error)?)
        }
    };

    if let Some(sort) = &args.sort {
        if !page.table_mut().sort_by(&sort.field, sort.direction) {
            let message = format!("'{}' is not a sortable field", sort.field);
            return Err(AppError::InvalidArgument(message).into());
        }
    }
    if let Some(start) = args.start_page {
        page.table_mut().set_page(start);
    }

    tracing::info!(
        page = ?args.page,
        current = page.table().current_page(),
        total = page.table().total_pages(),
        "page ready"
    );
    Ok(page)
}

fn table_error(e: TableError) -> anyhow::Error {
    AppError::InvalidArgument(e.to_string()).into()
}

/// 输出错误并退出
fn fail(message: &str) -> ! {
    eprintln!("{} {}", "错误".red().bold(), message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        let mut full = vec!["staff-console"];
        full.extend_from_slice(argv);
        CliArgs::try_parse_from(full).unwrap()
    }

    #[test]
    fn page_size_prefers_cli_then_config_then_default() {
        let mut settings = Settings::default();
        let page = build_page(&args(&[]), &settings).unwrap();
        assert_eq!(page.table().total_pages(), 2);

        settings.employees.page_size = Some(4);
        let page = build_page(&args(&[]), &settings).unwrap();
        assert_eq!(page.table().total_pages(), 3);

        let page = build_page(&args(&["-s", "12"]), &settings).unwrap();
        assert_eq!(page.table().total_pages(), 1);
    }

    #[test]
    fn zero_page_size_is_reported() {
        let err = build_page(&args(&["-s", "0"]), &Settings::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("page size must be greater than 0"));
    }

    #[test]
    fn start_page_is_clamped() {
        let page = build_page(&args(&["--page", "9"]), &Settings::default()).unwrap();
        assert_eq!(page.table().current_page(), 2);
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = build_page(
            &args(&["permissions", "--sort", "salary"]),
            &Settings::default(),
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("salary"));
    }

    #[test]
    fn initial_sort_is_applied() {
        let page = build_page(&args(&["--sort", "age:desc"]), &Settings::default()).unwrap();
        let view = page.table().view();
        let indicator = view.headers[4].indicator;
        assert_eq!(
            indicator,
            Some(crate::core::table::SortIndicator::Descending)
        );
    }
}
