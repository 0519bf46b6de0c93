// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 目标规格（target）：目标URL的可比较形式
/// - 内容区域（content_region）：页面选定子树的文本与链接
/// - 爬取结果（crawl_result）：单个任务的结果与状态
/// - 运行报告（crawl_report）：一次运行的结果、失败与统计
pub mod content_region;
pub mod crawl_report;
pub mod crawl_result;
pub mod target;
