// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含输入校验和查找内链机会的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心数据结构以及内容范围提取、链接解析和关键词匹配服务
pub mod domain;

/// 引擎模块
///
/// 实现页面获取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供指标等可观测性集成
pub mod infrastructure;

/// 表示层模块
///
/// 处理输入文件读取和结果导出
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现有界并发的爬取编排和进度跟踪
pub mod workers;
