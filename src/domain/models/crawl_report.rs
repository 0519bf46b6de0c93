// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl_result::{CrawlResult, JobOutcome};
use serde::Serialize;

/// 失败类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Fetch,
    Parse,
}

/// 单个失败页面的诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobFailure {
    pub url: String,
    pub kind: FailureKind,
    pub reason: String,
}

/// 运行统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    pub total: usize,
    pub matched: usize,
    pub already_linked: usize,
    pub no_match: usize,
    pub fetch_failed: usize,
    pub parse_failed: usize,
}

/// 一次运行的汇总报告
///
/// `results` 按完成顺序排列，不保证跨运行可复现
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    pub results: Vec<CrawlResult>,
    pub failures: Vec<JobFailure>,
    pub stats: CrawlStats,
}

impl CrawlReport {
    /// 记录一个任务的终态
    pub fn record(&mut self, url: String, outcome: JobOutcome) {
        self.stats.total += 1;
        match outcome {
            JobOutcome::Matched(result) => {
                self.stats.matched += 1;
                self.results.push(result);
            }
            JobOutcome::AlreadyLinked => self.stats.already_linked += 1,
            JobOutcome::NoMatch => self.stats.no_match += 1,
            JobOutcome::FetchFailed(e) => {
                self.stats.fetch_failed += 1;
                self.failures.push(JobFailure {
                    url,
                    kind: FailureKind::Fetch,
                    reason: e.to_string(),
                });
            }
            JobOutcome::ParseFailed(e) => {
                self.stats.parse_failed += 1;
                self.failures.push(JobFailure {
                    url,
                    kind: FailureKind::Parse,
                    reason: e.to_string(),
                });
            }
        }
    }

    pub fn failure_count(&self) -> usize {
        self.stats.fetch_failed + self.stats.parse_failed
    }
}
