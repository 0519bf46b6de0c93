// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 提取URL的路径部分
///
/// 无法解析的URL返回空字符串
pub fn path_only(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(url) if !url.cannot_be_a_base() => url.path().to_string(),
        _ => String::new(),
    }
}

/// 返回URL的规范化序列化形式
///
/// 例如 `https://Site.com` 规范化为 `https://site.com/`
pub fn canonical_form(raw: &str) -> Option<String> {
    Url::parse(raw.trim())
        .ok()
        .filter(|url| !url.cannot_be_a_base())
        .map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_url() {
        let base = Url::parse("http://example.com/a/b").unwrap();
        assert_eq!(
            resolve_url(&base, "http://t.co/c").unwrap().as_str(),
            "http://t.co/c"
        );
    }

    #[test]
    fn test_resolve_protocol_relative_url() {
        let base = Url::parse("https://example.com/a/b").unwrap();
        assert_eq!(
            resolve_url(&base, "//t.co/c").unwrap().as_str(),
            "https://t.co/c"
        );
    }

    #[test]
    fn test_resolve_parent_segment() {
        let base = Url::parse("https://site.com/blog/post").unwrap();
        assert_eq!(
            resolve_url(&base, "../target").unwrap().as_str(),
            "https://site.com/target"
        );
    }

    #[test]
    fn test_resolve_empty_reference_is_base() {
        let base = Url::parse("https://site.com/blog/post").unwrap();
        assert_eq!(
            resolve_url(&base, "").unwrap().as_str(),
            "https://site.com/blog/post"
        );
    }

    #[test]
    fn test_path_only() {
        assert_eq!(path_only("https://a.com/money-guide"), "/money-guide");
        assert_eq!(path_only("https://a.com/seo/timeline?x=1#top"), "/seo/timeline");
        assert_eq!(path_only("https://a.com"), "/");
    }

    #[test]
    fn test_path_only_malformed_is_empty() {
        assert_eq!(path_only("not a url"), "");
        assert_eq!(path_only(""), "");
        assert_eq!(path_only("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(
            canonical_form("https://Site.com").as_deref(),
            Some("https://site.com/")
        );
        assert_eq!(canonical_form("::"), None);
    }
}
