// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::url_utils;
use serde::Serialize;

/// 目标URL规格
///
/// 每次运行只计算一次，所有任务只读共享。
/// `path` 为空表示目标URL无法解析，此时仅比较绝对形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSpec {
    /// 原始目标URL字符串
    pub absolute: String,
    /// 仅路径形式，例如 `/money-guide`
    pub path: String,
    /// 规范化后的绝对形式（可解析时）
    pub canonical: Option<String>,
}

impl TargetSpec {
    /// 从目标URL字符串构建规格
    ///
    /// 不访问网络；畸形URL降级为空路径而不是报错
    pub fn new(target_url: &str) -> Self {
        let absolute = target_url.trim().to_string();
        let path = url_utils::path_only(&absolute);
        let canonical = url_utils::canonical_form(&absolute).filter(|c| *c != absolute);

        Self {
            absolute,
            path,
            canonical,
        }
    }

    /// 判断候选字符串是否等于任意一种目标形式
    pub fn is_target(&self, candidate: &str) -> bool {
        candidate == self.absolute
            || (!self.path.is_empty() && candidate == self.path)
            || self.canonical.as_deref() == Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_spec_forms() {
        let target = TargetSpec::new("https://a.com/money-guide");
        assert_eq!(target.absolute, "https://a.com/money-guide");
        assert_eq!(target.path, "/money-guide");
        assert_eq!(target.canonical, None);
    }

    #[test]
    fn test_target_spec_keeps_canonical_when_different() {
        let target = TargetSpec::new("https://A.com");
        assert_eq!(target.absolute, "https://A.com");
        assert_eq!(target.path, "/");
        assert_eq!(target.canonical.as_deref(), Some("https://a.com/"));
        assert!(target.is_target("https://a.com/"));
    }

    #[test]
    fn test_malformed_target_degrades_to_absolute_only() {
        let target = TargetSpec::new("money guide");
        assert_eq!(target.path, "");
        assert!(target.is_target("money guide"));
        assert!(!target.is_target(""));
    }

    #[test]
    fn test_is_target_matches_path_form() {
        let target = TargetSpec::new("https://a.com/money-guide");
        assert!(target.is_target("/money-guide"));
        assert!(target.is_target("https://a.com/money-guide"));
        assert!(!target.is_target("/money-guide/"));
    }
}
