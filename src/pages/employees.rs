//! 员工列表页面

use chrono::NaiveDate;
use colored::Color;

use crate::app::error::types::TableError;
use crate::core::table::control::TableControl;
use crate::core::table::{Cell, Column, DataTable, FieldValue};

use super::AdminPage;

/// 员工列表默认每页行数
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// 员工状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Vacation,
    Sick,
    Fired,
}

impl EmployeeStatus {
    /// 排序使用的键
    pub fn key(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Vacation => "vacation",
            EmployeeStatus::Sick => "sick",
            EmployeeStatus::Fired => "fired",
        }
    }

    /// 状态标签
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "在职",
            EmployeeStatus::Vacation => "休假",
            EmployeeStatus::Sick => "病假",
            EmployeeStatus::Fired => "离职",
        }
    }

    fn color(self) -> Color {
        match self {
            EmployeeStatus::Active => Color::Green,
            EmployeeStatus::Vacation => Color::Blue,
            EmployeeStatus::Sick => Color::Yellow,
            EmployeeStatus::Fired => Color::Red,
        }
    }
}

/// 员工记录
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub age: u32,
    pub join_date: NaiveDate,
}

/// 员工表的列
pub fn employee_columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("ID", "id", |e: &Employee| Some(e.id.into())),
        Column::new("姓名", "name", |e: &Employee| Some(e.name.as_str().into())),
        Column::new("职位", "position", |e: &Employee| {
            Some(e.position.as_str().into())
        }),
        Column::new("部门", "department", |e: &Employee| {
            Some(e.department.as_str().into())
        }),
        Column::new("年龄", "age", |e: &Employee| Some(e.age.into())),
        Column::new("入职日期", "join_date", |e: &Employee| {
            Some(e.join_date.into())
        })
        .render(|e: &Employee| {
            Cell::plain(e.join_date.format("%d.%m.%Y").to_string())
        }),
        Column::new("状态", "status", |e: &Employee| {
            Some(FieldValue::from(e.status.key()))
        })
        .render(|e: &Employee| {
            Cell::colored(format!("[{}]", e.status.label()), e.status.color())
        }),
        Column::new("操作", "id", |e: &Employee| Some(e.id.into()))
            .sortable(false)
            .render(|_: &Employee| Cell::plain("[编辑] [删除]")),
    ]
}

/// 员工列表页面
pub struct EmployeesPage {
    table: DataTable<Employee>,
}

impl EmployeesPage {
    /// 用演示数据创建页面
    pub fn new(page_size: usize) -> Result<Self, TableError> {
        Self::with_rows(demo_employees(), page_size)
    }

    pub fn with_rows(rows: Vec<Employee>, page_size: usize) -> Result<Self, TableError> {
        let table = DataTable::new(rows, employee_columns(), page_size)?
            .with_title("员工列表");
        Ok(Self { table })
    }

    #[cfg(test)]
    pub fn data_table(&self) -> &DataTable<Employee> {
        &self.table
    }

    #[cfg(test)]
    pub fn data_table_mut(&mut self) -> &mut DataTable<Employee> {
        &mut self.table
    }
}

impl AdminPage for EmployeesPage {
    fn heading(&self) -> String {
        "员工管理".to_string()
    }

    fn summary(&self) -> Vec<String> {
        vec![
            "查看和管理公司员工数据".to_string(),
            format!("共 {} 名员工", self.table.rows().len()),
        ]
    }

    fn table(&self) -> &dyn TableControl {
        &self.table
    }

    fn table_mut(&mut self) -> &mut dyn TableControl {
        &mut self.table
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn employee(
    id: u32,
    name: &str,
    position: &str,
    department: &str,
    status: EmployeeStatus,
    age: u32,
    join_date: NaiveDate,
) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        status,
        age,
        join_date,
    }
}

/// 演示数据
#[rustfmt::skip]
pub fn demo_employees() -> Vec<Employee> {
    use EmployeeStatus::{Active, Fired, Sick, Vacation};

    vec![
        employee(1, "Анна Иванова", "Frontend Developer", "Разработка", Active, 28, date(2022, 5, 12)),
        employee(2, "Петр Сидоров", "Backend Developer", "Разработка", Vacation, 32, date(2021, 3, 15)),
        employee(3, "Мария Петрова", "UI/UX Designer", "Дизайн", Active, 26, date(2023, 1, 20)),
        employee(4, "Иван Смирнов", "Project Manager", "Менеджмент", Active, 35, date(2020, 11, 5)),
        employee(5, "Екатерина Козлова", "QA Engineer", "Тестирование", Sick, 29, date(2022, 7, 18)),
        employee(6, "Алексей Николаев", "DevOps Engineer", "Инфраструктура", Active, 31, date(2021, 9, 30)),
        employee(7, "Ольга Соколова", "Content Manager", "Маркетинг", Fired, 27, date(2022, 2, 14)),
        employee(8, "Дмитрий Кузнецов", "Sales Manager", "Продажи", Active, 33, date(2021, 5, 22)),
        employee(9, "Наталья Морозова", "HR Manager", "HR", Vacation, 30, date(2022, 8, 10)),
        employee(10, "Сергей Волков", "System Administrator", "Инфраструктура", Active, 34, date(2020, 12, 15)),
        employee(11, "Юлия Королева", "Data Analyst", "Аналитика", Active, 29, date(2023, 3, 5)),
        employee(12, "Артем Лебедев", "Full Stack Developer", "Разработка", Active, 27, date(2022, 6, 20)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{SortDirection, TableBody};

    fn ids(page: &EmployeesPage) -> Vec<u32> {
        page.data_table().sorted_rows().map(|e| e.id).collect()
    }

    #[test]
    fn demo_roster_spans_two_pages() {
        let page = EmployeesPage::new(DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(page.data_table().total_pages(), 2);
        assert_eq!(page.summary()[1], "共 12 名员工");
    }

    #[test]
    fn id_column_sorts_numerically_aware() {
        let mut page = EmployeesPage::new(DEFAULT_PAGE_SIZE).unwrap();
        page.data_table_mut().select_column(0);
        page.data_table_mut().select_column(0);
        assert_eq!(ids(&page), (1..=12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn join_date_sorts_by_iso_value_not_rendered_text() {
        let mut page = EmployeesPage::new(DEFAULT_PAGE_SIZE).unwrap();
        let sorted = page
            .data_table_mut()
            .sort_by("join_date", SortDirection::Ascending);
        assert!(sorted);
        let first = page.data_table().sorted_rows().next().unwrap();
        assert_eq!(first.id, 4);

        let TableBody::Rows(rows) = page.data_table().view().body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0][5].text, "05.11.2020");
    }

    #[test]
    fn status_badge_and_actions_render() {
        let page = EmployeesPage::new(DEFAULT_PAGE_SIZE).unwrap();
        let TableBody::Rows(rows) = page.data_table().view().body else {
            panic!("expected rows");
        };
        assert_eq!(rows[1][6], Cell::colored("[休假]", Color::Blue));
        assert_eq!(rows[1][7].text, "[编辑] [删除]");
    }

    #[test]
    fn actions_column_is_not_sortable() {
        let mut page = EmployeesPage::new(DEFAULT_PAGE_SIZE).unwrap();
        assert!(!page.data_table_mut().select_column(7));
        assert_eq!(ids(&page), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn status_sorts_by_key() {
        let mut page = EmployeesPage::new(DEFAULT_PAGE_SIZE).unwrap();
        page.data_table_mut().sort_by("status", SortDirection::Ascending);
        let statuses: Vec<_> = page.data_table().sorted_rows().map(|e| e.status).collect();
        assert_eq!(statuses[0], EmployeeStatus::Active);
        assert_eq!(statuses[8], EmployeeStatus::Fired);
        assert_eq!(statuses[9], EmployeeStatus::Sick);
        assert_eq!(statuses[11], EmployeeStatus::Vacation);
    }
}
