// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 内容区域
///
/// 单个页面选定子树的文本与链接，只在处理该页面期间存在
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRegion {
    /// 子树内所有文本节点按文档顺序拼接，不加分隔符
    pub text: String,
    /// 子树内锚点的原始 href，按文档顺序
    pub links: Vec<String>,
}

impl ContentRegion {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.links.is_empty()
    }
}
