// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：目标规格、内容区域、结果与报告
/// - 服务（services）：内容范围提取、链接解析与关键词匹配
///
/// 领域服务不访问网络，全部为同步计算。
pub mod models;
pub mod services;
