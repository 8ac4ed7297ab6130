//! 权限转移登记页面
//!
//! 记录从转出用户（ОКС）到转入用户（ЗКС）的权限转移。支持按四个条件筛选、
//! 新增和删除，所有修改只保存在内存中。

use chrono::{Local, NaiveDateTime};

use crate::app::error::types::{Result, TableError};
use crate::core::input::keyboard::Command;
use crate::core::table::control::TableControl;
use crate::core::table::{Cell, Column, DataTable, DEFAULT_PAGE_SIZE as TABLE_PAGE_SIZE};

use super::{AdminPage, Prompter};

/// 权限表默认每页行数
pub const DEFAULT_PAGE_SIZE: usize = TABLE_PAGE_SIZE;

/// 日期的输入/显示格式
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 缺失值的显示文本
const MISSING: &str = "-";

/// 权限转移记录
#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    pub id: u32,
    pub date: Option<NaiveDateTime>,
    pub source_user: String,
    pub source_email: String,
    pub target_user: String,
    pub target_email: String,
    pub request_number: Option<String>,
}

/// 新记录（尚未分配编号）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPermission {
    pub date: Option<NaiveDateTime>,
    pub source_user: String,
    pub source_email: String,
    pub target_user: String,
    pub target_email: String,
    pub request_number: Option<String>,
}

/// 筛选字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Date,
    Source,
    Target,
    RequestNumber,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Date,
        FilterField::Source,
        FilterField::Target,
        FilterField::RequestNumber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Date => "日期",
            FilterField::Source => "转出用户",
            FilterField::Target => "转入用户",
            FilterField::RequestNumber => "申请编号",
        }
    }
}

/// 筛选条件，全部为不区分大小写的子串匹配，空串匹配所有记录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionFilter {
    pub date: String,
    pub source: String,
    pub target: String,
    pub request_number: String,
}

impl PermissionFilter {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Date => &self.date,
            FilterField::Source => &self.source,
            FilterField::Target => &self.target,
            FilterField::RequestNumber => &self.request_number,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Date => &mut self.date,
            FilterField::Source => &mut self.source,
            FilterField::Target => &mut self.target,
            FilterField::RequestNumber => &mut self.request_number,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// 用户条件同时匹配姓名和邮箱
    pub fn matches(&self, p: &Permission) -> bool {
        contains(&date_text(p.date), &self.date)
            && (contains(&p.source_user, &self.source)
                || contains(&p.source_email, &self.source))
            && (contains(&p.target_user, &self.target)
                || contains(&p.target_email, &self.target))
            && contains(
                p.request_number.as_deref().unwrap_or(MISSING),
                &self.request_number,
            )
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn date_text(date: Option<NaiveDateTime>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// 权限登记簿
#[derive(Debug, Clone, Default)]
pub struct PermissionRegistry {
    records: Vec<Permission>,
    filter: PermissionFilter,
}

impl PermissionRegistry {
    pub fn new(records: Vec<Permission>) -> Self {
        Self {
            records,
            filter: PermissionFilter::default(),
        }
    }

    #[cfg(test)]
    pub fn records(&self) -> &[Permission] {
        &self.records
    }

    pub fn filter(&self) -> &PermissionFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filter.set(field, value);
    }

    /// 符合筛选条件的记录（保持原有顺序）
    pub fn filtered(&self) -> Vec<Permission> {
        self.records
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect()
    }

    /// 新增记录，编号为现有最大编号加一
    pub fn add(&mut self, new: NewPermission) -> u32 {
        let id = self.records.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.records.push(Permission {
            id,
            date: new.date,
            source_user: new.source_user,
            source_email: new.source_email,
            target_user: new.target_user,
            target_email: new.target_email,
            request_number: new.request_number,
        });
        tracing::debug!(id, "permission added");
        id
    }

    /// 删除指定编号的记录，不存在时返回 `false`
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|p| p.id != id);
        let removed = self.records.len() != before;
        if removed {
            tracing::debug!(id, "permission deleted");
        }
        removed
    }
}

/// 权限表的列
pub fn permission_columns() -> Vec<Column<Permission>> {
    vec![
        Column::new("№", "id", |p: &Permission| Some(p.id.into())),
        Column::new("日期", "date", |p: &Permission| p.date.map(Into::into))
            .render(|p: &Permission| Cell::plain(date_text(p.date))),
        Column::new("转出用户", "source_user", |p: &Permission| {
            Some(p.source_user.as_str().into())
        })
        .render(|p: &Permission| {
            Cell::plain(user_text(&p.source_user, &p.source_email))
        }),
        Column::new("转入用户", "target_user", |p: &Permission| {
            Some(p.target_user.as_str().into())
        })
        .render(|p: &Permission| {
            Cell::plain(user_text(&p.target_user, &p.target_email))
        }),
        Column::new("申请编号", "request_number", |p: &Permission| {
            p.request_number.as_deref().map(Into::into)
        })
        .render(|p: &Permission| {
            Cell::plain(p.request_number.as_deref().unwrap_or(MISSING))
        }),
        Column::new("操作", "id", |p: &Permission| Some(p.id.into()))
            .sortable(false)
            .render(|_: &Permission| Cell::plain("[删除]")),
    ]
}

fn user_text(name: &str, email: &str) -> String {
    if email.is_empty() {
        name.to_string()
    } else {
        format!("{} <{}>", name, email)
    }
}

/// 权限登记页面
pub struct PermissionsPage {
    registry: PermissionRegistry,
    table: DataTable<Permission>,
}

impl PermissionsPage {
    /// 用演示数据创建页面
    pub fn new(page_size: usize) -> std::result::Result<Self, TableError> {
        Self::with_records(demo_permissions(), page_size)
    }

    pub fn with_records(
        records: Vec<Permission>,
        page_size: usize,
    ) -> std::result::Result<Self, TableError> {
        let registry = PermissionRegistry::new(records);
        let table = DataTable::new(registry.filtered(), permission_columns(), page_size)?
            .with_title("ОКС → ЗКС 权限转移表");
        Ok(Self { registry, table })
    }

    #[cfg(test)]
    pub fn registry(&self) -> &PermissionRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn data_table(&self) -> &DataTable<Permission> {
        &self.table
    }

    #[cfg(test)]
    pub fn data_table_mut(&mut self) -> &mut DataTable<Permission> {
        &mut self.table
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.registry.set_filter(field, value);
        self.refresh();
    }

    pub fn add(&mut self, new: NewPermission) -> u32 {
        let id = self.registry.add(new);
        self.refresh();
        id
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let removed = self.registry.delete(id);
        self.refresh();
        removed
    }

    fn refresh(&mut self) {
        self.table.set_rows(self.registry.filtered());
    }

    fn prompt_filter(&mut self, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        let choices = FilterField::ALL
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{} {}", i + 1, f.label()))
            .collect::<Vec<_>>()
            .join(" / ");
        let Some(choice) = prompter.ask(&format!("筛选字段 ({}): ", choices), "")? else {
            return Ok(Some("已取消".to_string()));
        };
        let field = match choice.trim().parse::<usize>() {
            Ok(n) if (1..=FilterField::ALL.len()).contains(&n) => FilterField::ALL[n - 1],
            _ => return Ok(Some(format!("无效的筛选字段: {}", choice.trim()))),
        };

        let current = self.registry.filter().get(field).to_string();
        let Some(value) = prompter.ask(&format!("{} 筛选: ", field.label()), &current)? else {
            return Ok(Some("已取消".to_string()));
        };
        self.set_filter(field, value.trim());
        Ok(Some(format!("数量: {}", self.table.rows().len())))
    }

    fn prompt_add(&mut self, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        let now = Local::now().format(DATE_FORMAT).to_string();
        let fields = [
            ("日期 (YYYY-MM-DD HH:MM): ", now.as_str()),
            ("转出用户: ", ""),
            ("转出邮箱: ", ""),
            ("转入用户: ", ""),
            ("转入邮箱: ", ""),
            ("申请编号: ", ""),
        ];

        let mut answers = Vec::with_capacity(fields.len());
        for (label, initial) in fields {
            match prompter.ask(label, initial)? {
                Some(answer) => answers.push(answer.trim().to_string()),
                None => return Ok(Some("已取消".to_string())),
            }
        }

        let date = match parse_date(&answers[0]) {
            Ok(date) => date,
            Err(text) => return Ok(Some(format!("日期格式无效: {}", text))),
        };
        let request_number = match answers[5].as_str() {
            "" | MISSING => None,
            text => Some(text.to_string()),
        };

        let id = self.add(NewPermission {
            date,
            source_user: answers[1].clone(),
            source_email: answers[2].clone(),
            target_user: answers[3].clone(),
            target_email: answers[4].clone(),
            request_number,
        });
        Ok(Some(format!("已添加记录 №{}", id)))
    }

    fn prompt_delete(&mut self, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        let Some(answer) = prompter.ask("删除记录 №: ", "")? else {
            return Ok(Some("已取消".to_string()));
        };
        let Ok(id) = answer.trim().parse::<u32>() else {
            return Ok(Some(format!("无效的编号: {}", answer.trim())));
        };
        if self.delete(id) {
            Ok(Some(format!("已删除记录 №{}", id)))
        } else {
            Ok(Some(format!("记录 №{} 不存在", id)))
        }
    }
}

/// 解析日期输入，空串或 `-` 表示无日期
fn parse_date(text: &str) -> std::result::Result<Option<NaiveDateTime>, String> {
    match text {
        "" | MISSING => Ok(None),
        _ => NaiveDateTime::parse_from_str(text, DATE_FORMAT)
            .map(Some)
            .map_err(|_| text.to_string()),
    }
}

impl AdminPage for PermissionsPage {
    fn heading(&self) -> String {
        "权限转移登记".to_string()
    }

    fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!("数量: {}", self.table.rows().len())];
        if !self.registry.filter().is_empty() {
            let active = FilterField::ALL
                .iter()
                .filter(|f| !self.registry.filter().get(**f).is_empty())
                .map(|f| format!("{}={}", f.label(), self.registry.filter().get(*f)))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("筛选: {}", active));
        }
        lines
    }

    fn extra_help(&self) -> Option<&'static str> {
        Some("/ 筛选 | a 新增 | d 删除")
    }

    fn table(&self) -> &dyn TableControl {
        &self.table
    }

    fn table_mut(&mut self) -> &mut dyn TableControl {
        &mut self.table
    }

    fn run_action(
        &mut self,
        command: Command,
        prompter: &mut dyn Prompter,
    ) -> Result<Option<String>> {
        match command {
            Command::EditFilter => self.prompt_filter(prompter),
            Command::AddRecord => self.prompt_add(prompter),
            Command::DeleteRecord => self.prompt_delete(prompter),
            _ => Ok(None),
        }
    }
}

fn permission(id: u32, date: Option<&str>, user: &str, email: &str) -> Permission {
    Permission {
        id,
        date: date.and_then(|d| {
            NaiveDateTime::parse_from_str(d, DATE_FORMAT).ok()
        }),
        source_user: user.to_string(),
        source_email: email.to_string(),
        target_user: user.to_string(),
        target_email: email.to_string(),
        request_number: None,
    }
}

/// 演示数据
#[rustfmt::skip]
pub fn demo_permissions() -> Vec<Permission> {
    vec![
        permission(1, None, "fesb5 fesb5", "fesb5@index.ru"),
        permission(2, None, "fesb4 fesb4", "fesb4@index.ru"),
        permission(3, None, "fesb3 fesb3", "fesb3@index.ru"),
        permission(4, Some("2025-04-27 04:37"), "fesb1 fesb1", "fesb1@index.ru"),
    ]
}
