// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 输入文件读取与结果导出
pub mod input_reader;
pub mod report_writer;
