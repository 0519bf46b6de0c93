// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 爬取请求数据传输对象
///
/// 由外部输入层（CLI、表单等）提供的原始输入
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct CrawlRequestDto {
    /// 候选页面URL，无需去重
    #[validate(length(min = 1, message = "at least one candidate URL is required"))]
    pub urls: Vec<String>,
    /// 关键词或锚文本
    #[validate(length(min = 1, message = "at least one non-blank term is required"))]
    pub terms: Vec<String>,
    /// 内容选择器（CSS 或 XPath），可为空
    #[serde(default)]
    pub selector: String,
    /// 目标URL
    #[validate(length(min = 1, message = "target URL is required"))]
    pub target_url: String,
}

impl CrawlRequestDto {
    /// 去除首尾空白并丢弃空白项
    pub fn normalized(self) -> Self {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        Self {
            urls: clean(self.urls),
            terms: clean(self.terms),
            selector: self.selector.trim().to_string(),
            target_url: self.target_url.trim().to_string(),
        }
    }
}
