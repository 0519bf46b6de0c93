// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::SelectorError;
use scraper::Selector;

/// 内容选择器
///
/// 每次运行编译一次，所有任务只读共享
#[derive(Debug, Clone)]
pub enum ContentSelector {
    /// 未提供选择器，整个文档都在范围内
    Document,
    /// 编译后的CSS选择器
    Css {
        /// 用户输入的原始表达式
        source: String,
        selector: Selector,
    },
}

impl ContentSelector {
    /// 编译选择器表达式
    ///
    /// 空白表达式表示整个文档；以 `/` 或 `(` 开头的按XPath处理并转换为CSS
    pub fn parse(expression: &str) -> Result<Self, SelectorError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Ok(ContentSelector::Document);
        }

        let css = if looks_like_xpath(expression) {
            xpath_to_css(expression)?
        } else {
            expression.to_string()
        };

        let selector = Selector::parse(&css).map_err(|e| SelectorError::InvalidCss {
            selector: css.clone(),
            reason: format!("{:?}", e),
        })?;

        Ok(ContentSelector::Css {
            source: expression.to_string(),
            selector,
        })
    }

    pub fn source(&self) -> &str {
        match self {
            ContentSelector::Document => "",
            ContentSelector::Css { source, .. } => source,
        }
    }
}

fn looks_like_xpath(expression: &str) -> bool {
    expression.starts_with('/') || expression.starts_with('(')
}

/// 将XPath子集转换为CSS选择器
///
/// 支持 `/`、`//` 步骤，元素名或 `*`，以及谓词
/// `[@a='v']`、`[@a]`、`[n]`、`[contains(@a,'v')]`
pub fn xpath_to_css(xpath: &str) -> Result<String, SelectorError> {
    let unsupported = |reason: &str| SelectorError::UnsupportedXPath {
        xpath: xpath.to_string(),
        reason: reason.to_string(),
    };

    // `(//div)[1]` selects the first match overall, which is what scoping
    // does anyway, so the wrapper can be dropped.
    let mut expr = xpath.trim();
    if let Some(inner) = expr.strip_prefix('(') {
        let close = inner
            .rfind(')')
            .ok_or_else(|| unsupported("unbalanced parenthesis"))?;
        let tail = inner[close + 1..].trim();
        if !tail.is_empty() && tail != "[1]" {
            return Err(unsupported("only [1] may follow a parenthesised path"));
        }
        expr = &inner[..close];
    }

    if expr.contains('|') {
        return Err(unsupported("unions are not supported"));
    }
    if expr.contains("::") {
        return Err(unsupported("axes are not supported"));
    }

    let mut css = String::new();
    let mut rest = expr;
    let mut first = true;

    while !rest.is_empty() {
        let descendant = if let Some(r) = rest.strip_prefix("//") {
            rest = r;
            true
        } else if let Some(r) = rest.strip_prefix('/') {
            rest = r;
            false
        } else {
            return Err(unsupported("expected `/` or `//`"));
        };

        let end = step_end(rest).ok_or_else(|| unsupported("unbalanced predicate brackets"))?;
        let step = &rest[..end];
        rest = &rest[end..];

        if step.is_empty() {
            return Err(unsupported("empty step"));
        }

        let compiled = compile_step(step).map_err(|reason| unsupported(&reason))?;
        if !first {
            css.push_str(if descendant { " " } else { " > " });
        }
        css.push_str(&compiled);
        first = false;
    }

    if css.is_empty() {
        return Err(unsupported("empty path"));
    }
    Ok(css)
}

/// 找到当前步骤的结束位置（下一个不在谓词或引号内的 `/`）
fn step_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.checked_sub(1)?,
            (None, '/') if depth == 0 => return Some(i),
            _ => {}
        }
    }
    (depth == 0 && quote.is_none()).then_some(s.len())
}

fn compile_step(step: &str) -> Result<String, String> {
    let (name, mut predicates) = match step.find('[') {
        Some(i) => (&step[..i], &step[i..]),
        None => (step, ""),
    };

    if name.contains('(') || name == "." || name == ".." || name.starts_with('@') {
        return Err(format!("step `{}` is not an element test", step));
    }
    if !name
        .chars()
        .all(|c| c == '*' || c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!("invalid element name `{}`", name));
    }

    let mut css = name.to_string();
    let mut first = true;
    while !predicates.is_empty() {
        let close = predicate_close(predicates).ok_or("unbalanced predicate")?;
        let body = predicates[1..close].trim();
        predicates = &predicates[close + 1..];
        css.push_str(&compile_predicate(name, body, first)?);
        first = false;
    }

    Ok(css)
}

fn predicate_close(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, ']') => return Some(i),
            _ => {}
        }
    }
    None
}

fn compile_predicate(name: &str, body: &str, first: bool) -> Result<String, String> {
    if has_boolean_operator(body) {
        return Err(format!("boolean predicate `{}` is not supported", body));
    }

    if let Ok(position) = body.parse::<usize>() {
        if position == 0 {
            return Err("positions start at 1".to_string());
        }
        // `div[@a='x'][2]` counts among the filtered nodes; nth-of-type cannot
        if !first {
            return Err("a position must be the first predicate of a step".to_string());
        }
        return Ok(if name == "*" {
            format!(":nth-child({})", position)
        } else {
            format!(":nth-of-type({})", position)
        });
    }

    if let Some(args) = body
        .strip_prefix("contains(")
        .and_then(|b| b.strip_suffix(')'))
    {
        let (attr, value) = args
            .split_once(',')
            .ok_or("contains() needs two arguments")?;
        let attr = attribute_name(attr.trim())?;
        let value = unquote(value.trim())?;
        return Ok(format!("[{}*=\"{}\"]", attr, escape_css_string(value)));
    }

    if let Some((attr, value)) = body.split_once('=') {
        let attr = attribute_name(attr.trim())?;
        let value = unquote(value.trim())?;
        return Ok(format!("[{}=\"{}\"]", attr, escape_css_string(value)));
    }

    let attr = attribute_name(body)?;
    Ok(format!("[{}]", attr))
}

/// 谓词中是否出现引号外的 `and` / `or`
fn has_boolean_operator(body: &str) -> bool {
    let mut outside = String::with_capacity(body.len());
    let mut quote: Option<char> = None;
    for c in body.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => {
                quote = Some(c);
                outside.push(' ');
            }
            (None, c) => outside.push(c),
        }
    }

    outside
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')' || c == ',')
        .any(|token| token == "and" || token == "or")
}

fn attribute_name(s: &str) -> Result<&str, String> {
    let name = s
        .strip_prefix('@')
        .ok_or_else(|| format!("unsupported predicate `{}`", s))?;
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
    {
        return Err(format!("invalid attribute name `{}`", name));
    }
    Ok(name)
}

fn unquote(s: &str) -> Result<&str, String> {
    let quoted = (s.starts_with('\'') && s.ends_with('\''))
        || (s.starts_with('"') && s.ends_with('"'));
    if s.len() < 2 || !quoted {
        return Err(format!("expected a quoted string, found `{}`", s));
    }
    let inner = &s[1..s.len() - 1];
    if inner.contains(&s[..1]) {
        return Err(format!("unterminated string in `{}`", s));
    }
    Ok(inner)
}

fn escape_css_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selector_is_document() {
        assert!(matches!(
            ContentSelector::parse("   ").unwrap(),
            ContentSelector::Document
        ));
    }

    #[test]
    fn test_css_selector_passthrough() {
        let selector = ContentSelector::parse("main article.post").unwrap();
        assert_eq!(selector.source(), "main article.post");
    }

    #[test]
    fn test_invalid_css_is_error() {
        let err = ContentSelector::parse("div[[").unwrap_err();
        assert!(matches!(err, SelectorError::InvalidCss { .. }));
    }

    #[test]
    fn test_xpath_id_predicate() {
        assert_eq!(
            xpath_to_css("//*[@id='content']").unwrap(),
            "*[id=\"content\"]"
        );
        assert_eq!(
            xpath_to_css(r#"//*[@id="content"]"#).unwrap(),
            "*[id=\"content\"]"
        );
    }

    #[test]
    fn test_xpath_absolute_path_with_positions() {
        assert_eq!(
            xpath_to_css("/html/body/div[2]/main/article").unwrap(),
            "html > body > div:nth-of-type(2) > main > article"
        );
    }

    #[test]
    fn test_xpath_mixed_axes_and_contains() {
        assert_eq!(
            xpath_to_css("//div[contains(@class,'entry')]//p").unwrap(),
            "div[class*=\"entry\"] p"
        );
    }

    #[test]
    fn test_xpath_parenthesised_first_match() {
        assert_eq!(xpath_to_css("(//article)[1]").unwrap(), "article");
    }

    #[test]
    fn test_xpath_value_containing_slash() {
        assert_eq!(
            xpath_to_css("//a[@href='/a/b']").unwrap(),
            "a[href=\"/a/b\"]"
        );
    }

    #[test]
    fn test_unsupported_xpath() {
        for xpath in [
            "//div/text()",
            "//div | //p",
            "//div/ancestor::main",
            "//div[last()]",
            "//div[0]",
            "//div[@id='x'",
            "//div[@id='a' and @class='b']",
            "//div[contains(@class,'a') and contains(@class,'b')]",
            "//div[@id='a' or @id='b']",
            "//div[@id='a'='b']",
        ] {
            assert!(
                matches!(
                    xpath_to_css(xpath),
                    Err(SelectorError::UnsupportedXPath { .. })
                ),
                "{xpath} should be rejected"
            );
        }
    }

    #[test]
    fn test_xpath_position_after_filter_is_rejected() {
        assert!(matches!(
            xpath_to_css("//div[@class='x'][2]"),
            Err(SelectorError::UnsupportedXPath { .. })
        ));
        assert!(ContentSelector::parse("//div[@class='x'][2]").is_err());
    }

    #[test]
    fn test_xpath_position_before_filter() {
        assert_eq!(
            xpath_to_css("//div[2][@class='x']").unwrap(),
            "div:nth-of-type(2)[class=\"x\"]"
        );
    }

    #[test]
    fn test_xpath_keywords_inside_values_are_literal() {
        assert_eq!(
            xpath_to_css("//div[@title='salt and pepper']").unwrap(),
            "div[title=\"salt and pepper\"]"
        );
        assert_eq!(
            xpath_to_css("//div[@data-order]").unwrap(),
            "div[data-order]"
        );
    }

    #[test]
    fn test_xpath_compiles_through_content_selector() {
        let selector = ContentSelector::parse("//*[@id='content']").unwrap();
        assert!(matches!(selector, ContentSelector::Css { .. }));
        assert_eq!(selector.source(), "//*[@id='content']");
    }
}
