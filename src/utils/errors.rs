// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 内容解析错误类型
///
/// 在单个任务内恢复：视为空内容区域
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("failed to decode body as {encoding}")]
    Decode { encoding: String },
}

/// 选择器编译错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("invalid CSS selector `{selector}`: {reason}")]
    InvalidCss { selector: String, reason: String },

    #[error("unsupported XPath `{xpath}`: {reason}")]
    UnsupportedXPath { xpath: String, reason: String },
}

/// 运行级错误类型
///
/// 在爬取开始前返回给调用方，运行不会启动
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// 导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
