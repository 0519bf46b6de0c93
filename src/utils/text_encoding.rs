// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ParseError;
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

/// 判断内容类型是否可作为HTML解析
///
/// 未声明内容类型时按HTML处理
pub fn is_markup_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.is_empty()
        || mime == "text/html"
        || mime == "application/xhtml+xml"
        || mime == "text/plain"
        || mime == "application/xml"
        || mime == "text/xml"
}

/// 从 Content-Type 中提取 charset 对应的编码
fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, value)| Encoding::for_label(value.trim().trim_matches('"').as_bytes()))
}

/// 将响应体解码为UTF-8文本
///
/// 优先使用响应头声明的 charset，其次尝试 UTF-8，最后用 chardetng 检测
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> Result<String, ParseError> {
    if !is_markup_content_type(content_type) {
        return Err(ParseError::UnsupportedContentType(
            content_type.unwrap_or_default().to_string(),
        ));
    }

    if let Some(encoding) = content_type.and_then(charset_from_content_type) {
        let (decoded, _, had_errors) = encoding.decode(body);
        if had_errors {
            debug!(encoding = encoding.name(), "Declared charset decoded with replacements");
        }
        return Ok(decoded.into_owned());
    }

    if let Ok(text) = std::str::from_utf8(body) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    debug!(encoding = encoding.name(), "Detected body encoding");

    let (decoded, _, had_errors) = encoding.decode(body);
    if had_errors && encoding == UTF_8 {
        return Err(ParseError::Decode {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_without_header() {
        let text = decode_body("<p>héllo</p>".as_bytes(), None).unwrap();
        assert_eq!(text, "<p>héllo</p>");
    }

    #[test]
    fn test_decode_declared_latin1() {
        let body = [b'<', b'p', b'>', 0xE9, b'<', b'/', b'p', b'>'];
        let text = decode_body(&body, Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(text, "<p>é</p>");
    }

    #[test]
    fn test_rejects_binary_content_type() {
        let err = decode_body(b"%PDF-1.4", Some("application/pdf")).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedContentType("application/pdf".to_string())
        );
    }

    #[test]
    fn test_markup_content_types() {
        assert!(is_markup_content_type(None));
        assert!(is_markup_content_type(Some("text/html; charset=utf-8")));
        assert!(is_markup_content_type(Some("application/xhtml+xml")));
        assert!(!is_markup_content_type(Some("image/png")));
    }
}
