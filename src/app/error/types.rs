//! 错误类型定义

use std::path::PathBuf;

use thiserror::Error;

/// 应用层错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;

/// 数据表配置错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
