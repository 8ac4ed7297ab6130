//! 命令行参数定义

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::core::table::SortDirection;

/// 要打开的页面
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    /// 员工列表
    #[default]
    Employees,
    /// 权限转移登记
    Permissions,
}

/// 初始排序：`字段` 或 `字段:asc` / `字段:desc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// 解析 `--sort` 参数
pub fn parse_sort(text: &str) -> Result<SortSpec, String> {
    let (field, direction) = match text.split_once(':') {
        Some((field, "asc")) => (field, SortDirection::Ascending),
        Some((field, "desc")) => (field, SortDirection::Descending),
        Some((_, other)) => {
            return Err(format!("unknown direction '{}', expected asc or desc", other))
        }
        None => (text, SortDirection::Ascending),
    };
    if field.is_empty() {
        return Err("field name is empty".to_string());
    }
    Ok(SortSpec {
        field: field.to_string(),
        direction,
    })
}

/// 员工与权限管理终端 - 可排序、可分页的数据表
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 要打开的页面
    #[arg(value_enum, default_value_t = PageKind::Employees)]
    pub page: PageKind,

    /// 每页行数 (覆盖配置文件)
    #[arg(short = 's', long = "page-size")]
    pub page_size: Option<usize>,

    /// 初始页码 (越界时自动钳制)
    #[arg(short = 'p', long = "page")]
    pub start_page: Option<usize>,

    /// 初始排序，例如 `age:desc`
    #[arg(long = "sort", value_name = "FIELD[:asc|desc]", value_parser = parse_sort)]
    pub sort: Option<SortSpec>,

    /// 配置文件路径
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 只输出一页到标准输出，不进入交互模式
    #[arg(long)]
    pub print: bool,

    /// 禁用颜色输出
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// 详细模式 - 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("age", "age", SortDirection::Ascending)]
    #[case("age:asc", "age", SortDirection::Ascending)]
    #[case("join_date:desc", "join_date", SortDirection::Descending)]
    fn parses_sort_specs(
        #[case] text: &str,
        #[case] field: &str,
        #[case] direction: SortDirection,
    ) {
        let spec = parse_sort(text).unwrap();
        assert_eq!(spec.field, field);
        assert_eq!(spec.direction, direction);
    }

    #[rstest]
    #[case("age:up")]
    #[case(":desc")]
    #[case("")]
    fn rejects_bad_sort_specs(#[case] text: &str) {
        assert!(parse_sort(text).is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let args = CliArgs::try_parse_from([
            "staff-console",
            "permissions",
            "-s",
            "3",
            "--page",
            "2",
            "--sort",
            "date:desc",
            "--print",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(args.page, PageKind::Permissions);
        assert_eq!(args.page_size, Some(3));
        assert_eq!(args.start_page, Some(2));
        assert_eq!(
            args.sort,
            Some(SortSpec {
                field: "date".to_string(),
                direction: SortDirection::Descending,
            })
        );
        assert!(args.print);
        assert!(args.no_color);
        assert!(!args.verbose);
    }

    #[test]
    fn defaults_to_employees() {
        let args = CliArgs::try_parse_from(["staff-console"]).unwrap();
        assert_eq!(args.page, PageKind::Employees);
        assert_eq!(args.page_size, None);
        assert!(args.config.is_none());
    }

    #[test]
    fn verifies_clap_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
