// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含爬虫、内容范围、匹配和导出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 爬虫配置
    pub crawler: CrawlerSettings,
    /// 内容范围配置
    pub scoping: ScopingSettings,
    /// 关键词匹配配置
    pub matching: MatchingSettings,
    /// 导出配置
    pub export: ExportSettings,
}

/// 爬虫配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 同时进行的获取数量
    pub concurrency: usize,
    /// 单次获取超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// 选择器未匹配任何节点时的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchPolicy {
    /// 内容为空，页面被排除
    #[default]
    Empty,
    /// 退回到整个文档
    WholeDocument,
}

/// 链接提取时的锚点过滤策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorFilter {
    /// 仅包含声明了非空 href 的锚点
    #[default]
    WithHref,
    /// 所有锚点；缺失的 href 记为空字符串
    All,
}

/// 内容范围配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopingSettings {
    /// 选择器未匹配时的策略
    pub no_match_policy: NoMatchPolicy,
    /// 锚点过滤策略
    pub anchor_filter: AnchorFilter,
}

/// 关键词匹配配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// 是否区分大小写
    pub case_sensitive: bool,
}

/// 导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// 匹配词列的表头（`Keywords Found` 或 `Anchor Texts`）
    pub terms_column: String,
    /// 匹配词之间的分隔符
    pub delimiter: String,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            concurrency: 10,
            timeout_secs: 30,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            terms_column: "Keywords Found".to_string(),
            delimiter: ", ".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crawler: CrawlerSettings::default(),
            scoping: ScopingSettings::default(),
            matching: MatchingSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

fn default_user_agent() -> String {
    format!("linkscout/{}", env!("CARGO_PKG_VERSION"))
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("LINKSCOUT_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("LINKSCOUT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 只包含默认值的配置构建器
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Crawler defaults
            .set_default("crawler.concurrency", 10)?
            .set_default("crawler.timeout_secs", 30)?
            .set_default("crawler.user_agent", default_user_agent())?
            // Scoping defaults
            .set_default("scoping.no_match_policy", "empty")?
            .set_default("scoping.anchor_filter", "with_href")?
            // Matching defaults
            .set_default("matching.case_sensitive", false)?
            // Export defaults
            .set_default("export.terms_column", "Keywords Found")?
            .set_default("export.delimiter", ", ")
    }

    /// 从指定的 TOML 文件加载配置（不读取环境变量）
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
