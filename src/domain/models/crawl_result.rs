// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use crate::utils::errors::ParseError;
use serde::Serialize;

/// 爬取结果
///
/// 仅当页面未链接到目标且至少匹配一个词时产生
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    /// 候选页面URL
    pub url: String,
    /// 匹配到的词，保持输入顺序
    pub terms: Vec<String>,
}

impl CrawlResult {
    /// 使用分隔符拼接匹配词
    pub fn joined_terms(&self, delimiter: &str) -> String {
        self.terms.join(delimiter)
    }
}

/// 单个任务的终态结果
#[derive(Debug)]
pub enum JobOutcome {
    /// 未链接且匹配到词，计入结果
    Matched(CrawlResult),
    /// 内容区域已包含指向目标的链接
    AlreadyLinked,
    /// 未匹配任何词
    NoMatch,
    /// 获取失败
    FetchFailed(FetchError),
    /// 解码或解析失败，视为空内容
    ParseFailed(ParseError),
}

impl JobOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, JobOutcome::FetchFailed(_) | JobOutcome::ParseFailed(_))
    }
}

/// 任务状态
///
/// pending → fetching → {fetch-failed | scoped}
/// scoped → {already-linked | checked}
/// checked → {no-match | matched}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Fetching,
    FetchFailed,
    ParseFailed,
    Scoped,
    AlreadyLinked,
    Checked,
    NoMatch,
    Matched,
}

impl JobState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobState::FetchFailed
                | JobState::ParseFailed
                | JobState::AlreadyLinked
                | JobState::NoMatch
                | JobState::Matched
        )
    }

    /// 判断状态转换是否合法
    pub fn can_transition_to(self, next: JobState) -> bool {
        use JobState::*;
        matches!(
            (self, next),
            (Pending, Fetching)
                | (Fetching, FetchFailed)
                | (Fetching, ParseFailed)
                | (Fetching, Scoped)
                | (Scoped, AlreadyLinked)
                | (Scoped, Checked)
                | (Checked, NoMatch)
                | (Checked, Matched)
        )
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobState::Pending => "pending",
            JobState::Fetching => "fetching",
            JobState::FetchFailed => "fetch-failed",
            JobState::ParseFailed => "parse-failed",
            JobState::Scoped => "scoped",
            JobState::AlreadyLinked => "already-linked",
            JobState::Checked => "checked",
            JobState::NoMatch => "no-match",
            JobState::Matched => "matched",
        };
        write!(f, "{}", s)
    }
}
