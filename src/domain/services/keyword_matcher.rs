// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 关键词匹配器
///
/// 在文本中按原始子串查找每个词，不做分词、词干或词边界处理
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    /// 原始词，保持输入顺序
    terms: Vec<String>,
    /// 用于比较的词（不区分大小写时为小写形式）
    needles: Vec<String>,
    case_sensitive: bool,
}

impl KeywordMatcher {
    /// 创建关键词匹配器
    ///
    /// 空白词会被过滤掉
    pub fn new<I, S>(terms: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        let needles = terms
            .iter()
            .map(|t| {
                if case_sensitive {
                    t.clone()
                } else {
                    t.to_lowercase()
                }
            })
            .collect();

        Self {
            terms,
            needles,
            case_sensitive,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// 返回在文本中出现的词，保持输入顺序
    pub fn find_matches(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let haystack = if self.case_sensitive {
            std::borrow::Cow::Borrowed(text)
        } else {
            std::borrow::Cow::Owned(text.to_lowercase())
        };

        self.terms
            .iter()
            .zip(&self.needles)
            .filter(|(_, needle)| haystack.contains(needle.as_str()))
            .map(|(term, _)| term.clone())
            .collect()
    }
}
