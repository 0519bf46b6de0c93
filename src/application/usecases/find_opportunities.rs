// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use validator::Validate;

use crate::application::dto::crawl_request::CrawlRequestDto;
use crate::config::settings::Settings;
use crate::domain::models::crawl_report::CrawlReport;
use crate::domain::models::target::TargetSpec;
use crate::domain::services::content_scoper::ContentScoper;
use crate::domain::services::keyword_matcher::KeywordMatcher;
use crate::domain::services::page_analyzer::PageAnalyzer;
use crate::domain::services::selector::ContentSelector;
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::PageFetcher;
use crate::utils::errors::CrawlError;
use crate::workers::crawl_orchestrator::CrawlOrchestrator;
use crate::workers::progress::CrawlProgress;

// === Section: Use Case Definition ===

/// 查找内链机会用例
///
/// 校验输入、构建共享的只读状态，然后交给编排器运行
pub struct FindOpportunitiesUseCase {
    settings: Settings,
    fetcher: Option<Arc<dyn PageFetcher>>,
}

/// 已通过校验、可以运行的爬取
pub struct PreparedCrawl {
    orchestrator: CrawlOrchestrator,
    urls: Vec<String>,
    target: TargetSpec,
}

// === Section: Implementation ===

impl FindOpportunitiesUseCase {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            fetcher: None,
        }
    }

    /// 使用自定义获取器（测试或嵌入场景）
    pub fn with_fetcher(settings: Settings, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            settings,
            fetcher: Some(fetcher),
        }
    }

    /// 校验输入并准备运行
    ///
    /// 输入无效时在任何网络请求之前返回 `CrawlError`
    pub fn prepare(&self, request: CrawlRequestDto) -> Result<PreparedCrawl, CrawlError> {
        let request = request.normalized();
        request
            .validate()
            .map_err(|e| CrawlError::InvalidInput(e.to_string()))?;

        let selector = Arc::new(ContentSelector::parse(&request.selector)?);
        let target = TargetSpec::new(&request.target_url);
        if target.path.is_empty() {
            tracing::warn!(
                target_url = %target.absolute,
                "Target URL could not be parsed; only exact matches count as existing links"
            );
        }

        let analyzer = PageAnalyzer::new(
            ContentScoper::new(selector, &self.settings.scoping),
            target.clone(),
            KeywordMatcher::new(&request.terms, self.settings.matching.case_sensitive),
        );

        let fetcher: Arc<dyn PageFetcher> = match &self.fetcher {
            Some(fetcher) => fetcher.clone(),
            None => Arc::new(ReqwestEngine::new(&self.settings.crawler)?),
        };

        let orchestrator =
            CrawlOrchestrator::new(fetcher, analyzer, self.settings.crawler.concurrency);
        // Progress readers may start before the run does
        orchestrator.progress().start(request.urls.len());

        Ok(PreparedCrawl {
            orchestrator,
            urls: request.urls,
            target,
        })
    }

    /// 校验并运行一次完整的爬取
    pub async fn execute(&self, request: CrawlRequestDto) -> Result<CrawlReport, CrawlError> {
        Ok(self.prepare(request)?.run().await)
    }
}

impl PreparedCrawl {
    pub fn progress(&self) -> Arc<CrawlProgress> {
        self.orchestrator.progress()
    }

    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    pub fn target(&self) -> &TargetSpec {
        &self.target
    }

    pub async fn run(self) -> CrawlReport {
        self.orchestrator.run(self.urls).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CrawlRequestDto {
        CrawlRequestDto {
            urls: vec!["https://a.com/p1".to_string()],
            terms: vec!["payday loans".to_string()],
            selector: "//*[@id='content']".to_string(),
            target_url: "https://a.com/money-guide".to_string(),
        }
    }

    #[test]
    fn test_prepare_rejects_empty_terms() {
        let use_case = FindOpportunitiesUseCase::new(Settings::default());
        let mut dto = request();
        dto.terms = vec!["".to_string()];
        assert!(matches!(
            use_case.prepare(dto),
            Err(CrawlError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_prepare_rejects_unsupported_selector() {
        let use_case = FindOpportunitiesUseCase::new(Settings::default());
        let mut dto = request();
        dto.selector = "//div/text()".to_string();
        assert!(matches!(use_case.prepare(dto), Err(CrawlError::Selector(_))));
    }

    #[test]
    fn test_prepare_rejects_boolean_xpath_predicate() {
        let use_case = FindOpportunitiesUseCase::new(Settings::default());
        let mut dto = request();
        dto.selector = "//div[@id='content' and @class='post']".to_string();
        assert!(matches!(use_case.prepare(dto), Err(CrawlError::Selector(_))));
    }

    #[test]
    fn test_prepare_accepts_valid_input() {
        let use_case = FindOpportunitiesUseCase::new(Settings::default());
        let prepared = use_case.prepare(request()).unwrap();
        assert_eq!(prepared.url_count(), 1);
        assert_eq!(prepared.target().path, "/money-guide");
    }
}
