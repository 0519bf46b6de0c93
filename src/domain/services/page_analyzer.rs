// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl_result::{CrawlResult, JobOutcome};
use crate::domain::models::target::TargetSpec;
use crate::domain::services::content_scoper::ContentScoper;
use crate::domain::services::keyword_matcher::KeywordMatcher;
use crate::domain::services::link_resolver::LinkResolver;

/// 页面分析器
///
/// 对已解码的页面依次执行内容范围提取、已链接检查和关键词匹配。
/// 纯同步计算，不持有跨 await 的状态。
#[derive(Debug, Clone)]
pub struct PageAnalyzer {
    scoper: ContentScoper,
    target: TargetSpec,
    matcher: KeywordMatcher,
}

impl PageAnalyzer {
    pub fn new(scoper: ContentScoper, target: TargetSpec, matcher: KeywordMatcher) -> Self {
        Self {
            scoper,
            target,
            matcher,
        }
    }

    /// 分析单个页面
    ///
    /// 已链接检查优先于关键词匹配
    pub fn analyze(&self, page_url: &str, html: &str) -> JobOutcome {
        let region = self.scoper.scope(html);

        if LinkResolver::already_links_to(page_url, &region.links, &self.target) {
            return JobOutcome::AlreadyLinked;
        }

        let terms = self.matcher.find_matches(&region.text);
        if terms.is_empty() {
            JobOutcome::NoMatch
        } else {
            JobOutcome::Matched(CrawlResult {
                url: page_url.to_string(),
                terms,
            })
        }
    }
}
