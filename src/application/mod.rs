// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含输入数据传输对象和用例实现，负责在领域服务与外部输入输出之间编排
pub mod dto;
pub mod usecases;
