// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl_result::JobOutcome;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// 爬取进度
///
/// 唯一在并发任务间共享的可变状态，全部使用原子计数
#[derive(Debug, Default)]
pub struct CrawlProgress {
    total: AtomicUsize,
    completed: AtomicUsize,
    matched: AtomicUsize,
    failed: AtomicUsize,
}

/// 进度快照
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub total: usize,
    pub completed: usize,
    pub matched: usize,
    pub failed: usize,
}

impl ProgressSnapshot {
    /// 完成百分比（0-100）
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.completed.min(self.total) * 100) / self.total) as u8
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= self.total
    }
}

impl CrawlProgress {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 开始新一轮运行前重置计数
    pub fn start(&self, total: usize) {
        self.completed.store(0, Ordering::SeqCst);
        self.matched.store(0, Ordering::SeqCst);
        self.failed.store(0, Ordering::SeqCst);
        self.total.store(total, Ordering::SeqCst);
    }

    /// 记录一个任务到达终态，返回已完成数
    pub fn record(&self, outcome: &JobOutcome) -> usize {
        if matches!(outcome, JobOutcome::Matched(_)) {
            self.matched.fetch_add(1, Ordering::Relaxed);
        }
        if outcome.is_failure() {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        self.completed.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// 记录一个未产出结果就中止的任务
    ///
    /// 计为已完成和失败，保证报告任务能够退出
    pub fn record_aborted(&self) -> usize {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.completed.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total: self.total.load(Ordering::Acquire),
            completed: self.completed.load(Ordering::Acquire),
            matched: self.matched.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// 启动进度报告任务
///
/// 按固定间隔记录进度，全部任务完成后退出
pub fn spawn_progress_reporter(progress: Arc<CrawlProgress>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        let mut last_reported = None;
        loop {
            interval.tick().await;
            let snapshot = progress.snapshot();
            if last_reported != Some(snapshot.completed) {
                info!(
                    completed = snapshot.completed,
                    total = snapshot.total,
                    matched = snapshot.matched,
                    failed = snapshot.failed,
                    "Crawling {} out of {} ({}%)",
                    snapshot.completed,
                    snapshot.total,
                    snapshot.percent()
                );
                last_reported = Some(snapshot.completed);
            }
            if snapshot.is_finished() {
                break;
            }
        }
    })
}
