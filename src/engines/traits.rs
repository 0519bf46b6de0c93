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

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 页面获取错误类型
///
/// 对整次运行非致命：任务标记为 fetch-failed 并从结果中排除
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败（连接、DNS、TLS、读取响应体等）
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 超时
    #[error("request to {url} timed out")]
    Timeout { url: String },
    /// 非2xx状态码
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// 无效URL
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    /// 从 reqwest 错误构造，区分超时
    pub fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source: error,
            }
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Status { url, .. }
            | FetchError::InvalidUrl { url, .. } => url,
        }
    }
}

/// 获取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 请求的URL
    pub url: String,
    /// 重定向后的最终URL
    pub final_url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 内容类型（响应头缺失时为 None）
    pub content_type: Option<String>,
    /// 原始响应体
    pub body: Bytes,
}

/// 页面获取器特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行一次 GET，仅在 2xx 时返回响应体
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;

    /// 获取器名称
    fn name(&self) -> &'static str;
}
