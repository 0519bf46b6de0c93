// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::target::TargetSpec;
use crate::utils::url_utils;
use url::Url;

/// 链接解析器
///
/// 判断页面的内容区域是否已经链接到目标URL
pub struct LinkResolver;

impl LinkResolver {
    /// 判断是否已链接
    ///
    /// 任一链接原样等于目标的绝对形式或路径形式，或以页面URL为基准解析后等于其中之一，
    /// 即视为已链接。页面URL无法解析时只做原样比较。
    ///
    /// # 参数
    ///
    /// * `page_url` - 页面自身的URL
    /// * `links` - 内容区域中的原始 href
    /// * `target` - 目标规格
    pub fn already_links_to(page_url: &str, links: &[String], target: &TargetSpec) -> bool {
        let base = Url::parse(page_url).ok();

        links.iter().any(|link| {
            if target.is_target(link) {
                return true;
            }
            base.as_ref()
                .and_then(|base| url_utils::resolve_url(base, link).ok())
                .is_some_and(|resolved| target.is_target(resolved.as_str()))
        })
    }
}
