// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::crawl_report::CrawlReport;
use crate::domain::models::crawl_result::{JobOutcome, JobState};
use crate::domain::services::page_analyzer::PageAnalyzer;
use crate::engines::traits::PageFetcher;
use crate::utils::text_encoding;
use crate::workers::progress::CrawlProgress;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, trace, warn};

/// 爬取编排器
///
/// 在有界并发池中为每个候选URL执行 获取 → 解码 → 分析 流程，
/// 等待全部任务到达终态后汇总结果
pub struct CrawlOrchestrator {
    fetcher: Arc<dyn PageFetcher>,
    analyzer: Arc<PageAnalyzer>,
    concurrency: usize,
    progress: Arc<CrawlProgress>,
}

impl CrawlOrchestrator {
    /// 创建新的爬取编排器
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面获取器
    /// * `analyzer` - 页面分析器（只读共享）
    /// * `concurrency` - 同时进行的获取数量，至少为1
    pub fn new(fetcher: Arc<dyn PageFetcher>, analyzer: PageAnalyzer, concurrency: usize) -> Self {
        Self {
            fetcher,
            analyzer: Arc::new(analyzer),
            concurrency: concurrency.max(1),
            progress: CrawlProgress::new(),
        }
    }

    /// 共享的进度计数，可在运行期间读取
    pub fn progress(&self) -> Arc<CrawlProgress> {
        self.progress.clone()
    }

    /// 运行一次爬取
    ///
    /// 单个任务的失败不会影响其他任务；结果按完成顺序排列
    pub async fn run(&self, urls: Vec<String>) -> CrawlReport {
        let started = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        self.progress.start(urls.len());

        info!(
            urls = urls.len(),
            concurrency = self.concurrency,
            fetcher = self.fetcher.name(),
            "Starting crawl"
        );

        let mut jobs = JoinSet::new();
        for url in urls {
            let semaphore = semaphore.clone();
            let fetcher = self.fetcher.clone();
            let analyzer = self.analyzer.clone();
            let progress = self.progress.clone();

            jobs.spawn(async move {
                // The semaphore is never closed, so acquiring cannot fail
                let _permit = semaphore.acquire_owned().await.ok();
                let outcome = process_job(fetcher.as_ref(), &analyzer, &url).await;
                progress.record(&outcome);
                (url, outcome)
            });
        }

        let mut report = CrawlReport::default();
        while let Some(joined) = jobs.join_next().await {
            match joined {
                Ok((url, outcome)) => {
                    record_metrics(&outcome);
                    report.record(url, outcome);
                }
                Err(e) => {
                    // A panicked job never reached `progress.record`
                    self.progress.record_aborted();
                    error!("Crawl job aborted: {}", e);
                }
            }
        }

        info!(
            total = report.stats.total,
            matched = report.stats.matched,
            already_linked = report.stats.already_linked,
            no_match = report.stats.no_match,
            failures = report.failure_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Crawl finished"
        );

        report
    }
}

/// 单个任务的状态跟踪
struct CrawlJob<'a> {
    url: &'a str,
    state: JobState,
}

impl<'a> CrawlJob<'a> {
    fn new(url: &'a str) -> Self {
        Self {
            url,
            state: JobState::Pending,
        }
    }

    fn advance(&mut self, next: JobState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid transition {} -> {}",
            self.state,
            next
        );
        trace!(url = self.url, from = %self.state, to = %next, "Job state changed");
        self.state = next;
    }

    /// 根据分析结果推进到终态
    fn finish(&mut self, outcome: &JobOutcome) {
        match outcome {
            JobOutcome::AlreadyLinked => self.advance(JobState::AlreadyLinked),
            JobOutcome::NoMatch => {
                self.advance(JobState::Checked);
                self.advance(JobState::NoMatch);
            }
            JobOutcome::Matched(_) => {
                self.advance(JobState::Checked);
                self.advance(JobState::Matched);
            }
            JobOutcome::FetchFailed(_) => self.advance(JobState::FetchFailed),
            JobOutcome::ParseFailed(_) => self.advance(JobState::ParseFailed),
        }
    }
}

#[instrument(skip(fetcher, analyzer))]
async fn process_job(fetcher: &dyn PageFetcher, analyzer: &PageAnalyzer, url: &str) -> JobOutcome {
    let mut job = CrawlJob::new(url);
    job.advance(JobState::Fetching);

    let page = match fetcher.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Fetch failed: {}", e);
            let outcome = JobOutcome::FetchFailed(e);
            job.finish(&outcome);
            return outcome;
        }
    };

    let html = match text_encoding::decode_body(&page.body, page.content_type.as_deref()) {
        Ok(html) => html,
        Err(e) => {
            warn!("Parse failed: {}", e);
            let outcome = JobOutcome::ParseFailed(e);
            job.finish(&outcome);
            return outcome;
        }
    };
    job.advance(JobState::Scoped);

    let outcome = analyzer.analyze(url, &html);
    job.finish(&outcome);

    match &outcome {
        JobOutcome::Matched(result) => debug!(terms = ?result.terms, "Page matched"),
        JobOutcome::AlreadyLinked => debug!("Page already links to target"),
        _ => trace!("No terms found"),
    }

    outcome
}

fn record_metrics(outcome: &JobOutcome) {
    metrics::counter!("linkscout_pages_total").increment(1);
    match outcome {
        JobOutcome::Matched(_) => metrics::counter!("linkscout_matches_total").increment(1),
        JobOutcome::AlreadyLinked => {
            metrics::counter!("linkscout_already_linked_total").increment(1)
        }
        JobOutcome::FetchFailed(_) => {
            metrics::counter!("linkscout_fetch_failures_total").increment(1)
        }
        JobOutcome::ParseFailed(_) => {
            metrics::counter!("linkscout_parse_failures_total").increment(1)
        }
        JobOutcome::NoMatch => {}
    }
}

#[cfg(test)]
#[path = "crawl_orchestrator_test.rs"]
mod tests;
