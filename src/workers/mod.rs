// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供爬取编排和进度跟踪功能
/// 包括有界并发的任务执行和原子进度计数
pub mod crawl_orchestrator;
pub mod progress;

pub use crawl_orchestrator::CrawlOrchestrator;
