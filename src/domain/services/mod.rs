// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 选择器（selector）：编译CSS选择器或XPath子集
/// - 内容范围提取（content_scoper）：提取选定子树的文本与链接
/// - 链接解析（link_resolver）：判断页面是否已链接到目标
/// - 关键词匹配（keyword_matcher）：在文本中查找词
/// - 页面分析（page_analyzer）：组合以上步骤得到任务终态
pub mod content_scoper;
pub mod keyword_matcher;
pub mod link_resolver;
pub mod page_analyzer;
pub mod selector;
