// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{AnchorFilter, NoMatchPolicy, ScopingSettings};
use crate::domain::models::content_region::ContentRegion;
use crate::domain::services::selector::ContentSelector;
use scraper::{ElementRef, Html};
use std::sync::Arc;
use tracing::trace;

/// 内容范围提取器
///
/// 将HTML解析为文档树，并从选定的子树中提取文本和链接
#[derive(Debug, Clone)]
pub struct ContentScoper {
    selector: Arc<ContentSelector>,
    no_match_policy: NoMatchPolicy,
    anchor_filter: AnchorFilter,
}

impl ContentScoper {
    /// 创建新的内容范围提取器
    ///
    /// # 参数
    ///
    /// * `selector` - 已编译的选择器
    /// * `settings` - 未匹配策略与锚点过滤策略
    pub fn new(selector: Arc<ContentSelector>, settings: &ScopingSettings) -> Self {
        Self {
            selector,
            no_match_policy: settings.no_match_policy,
            anchor_filter: settings.anchor_filter,
        }
    }

    /// 提取内容区域
    ///
    /// 选择器匹配多个节点时只使用第一个；未匹配时按策略返回空内容或整个文档。
    /// 解析容忍畸形标记，不会失败。
    pub fn scope(&self, html: &str) -> ContentRegion {
        let document = Html::parse_document(html);

        let scope = match self.selector.as_ref() {
            ContentSelector::Document => Some(document.root_element()),
            ContentSelector::Css { selector, source } => {
                match (document.select(selector).next(), self.no_match_policy) {
                    (Some(element), _) => Some(element),
                    (None, NoMatchPolicy::WholeDocument) => {
                        trace!(selector = %source, "Selector matched nothing, using whole document");
                        Some(document.root_element())
                    }
                    (None, NoMatchPolicy::Empty) => {
                        trace!(selector = %source, "Selector matched nothing");
                        None
                    }
                }
            }
        };

        match scope {
            Some(element) => ContentRegion {
                text: element.text().collect(),
                links: self.extract_links(element),
            },
            None => ContentRegion::empty(),
        }
    }

    /// 按文档顺序收集范围内锚点的 href
    fn extract_links(&self, scope: ElementRef<'_>) -> Vec<String> {
        scope
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "a")
            .filter_map(|anchor| {
                let href = anchor.value().attr("href").map(str::trim);
                match (self.anchor_filter, href) {
                    (AnchorFilter::WithHref, Some(href)) if !href.is_empty() => {
                        Some(href.to_string())
                    }
                    (AnchorFilter::WithHref, _) => None,
                    (AnchorFilter::All, href) => Some(href.unwrap_or_default().to_string()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "content_scoper_test.rs"]
mod tests;
