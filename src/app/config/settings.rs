//! 配置文件加载
//!
//! 配置文件为 TOML 格式，所有字段均可省略：
//!
//! ```toml
//! [ui]
//! color = true
//! debounce_ms = 150
//!
//! [log]
//! filter = "staff_console=info"
//!
//! [employees]
//! page_size = 6
//!
//! [permissions]
//! page_size = 10
//! ```

use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;
use serde::Deserialize;

use crate::app::error::types::{AppError, Result};

/// 配置目录名
const CONFIG_DIR_NAME: &str = "staff-console";
/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.toml";

/// 应用配置
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub log: LogSettings,
    pub employees: TableSettings,
    pub permissions: TableSettings,
}

/// 界面配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    /// 是否启用颜色输出
    pub color: bool,
    /// 同一按键的防抖间隔（毫秒）
    pub debounce_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color: true,
            debounce_ms: 150,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` 规则，未设置时使用默认规则
    pub filter: Option<String>,
}

/// 单个表格页面的配置
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableSettings {
    /// 每页行数，未设置时使用页面自身的默认值
    pub page_size: Option<usize>,
}

impl Settings {
    /// 加载配置
    ///
    /// 显式指定的路径必须存在；默认路径下没有配置文件时返回默认配置。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let path = path.absolutize()?.to_path_buf();
                if !path.exists() {
                    return Err(AppError::Config {
                        path,
                        message: "file does not exist".to_string(),
                    }
                    .into());
                }
                Self::from_file(&path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// 从指定文件读取配置
    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(AppError::from)?;
        let settings = Self::from_toml(&text).map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    /// 解析 TOML 文本
    pub fn from_toml(text: &str) -> std::result::Result<Self, String> {
        let settings: Settings = toml::from_str(text).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        for (name, table) in [
            ("employees", &self.employees),
            ("permissions", &self.permissions),
        ] {
            if table.page_size == Some(0) {
                return Err(format!("[{name}] page_size must be greater than 0"));
            }
        }
        Ok(())
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
