// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram, Unit};

/// 注册指标描述
///
/// 库本身不安装导出器；嵌入方安装 recorder 后这些指标才会被采集
pub fn describe_metrics() {
    describe_counter!("linkscout_pages_total", "Total number of candidate pages processed");
    describe_counter!(
        "linkscout_fetch_failures_total",
        "Total number of pages that could not be fetched"
    );
    describe_counter!(
        "linkscout_parse_failures_total",
        "Total number of pages whose body could not be decoded"
    );
    describe_counter!(
        "linkscout_already_linked_total",
        "Total number of pages that already link to the target"
    );
    describe_counter!(
        "linkscout_matches_total",
        "Total number of pages reported as linking opportunities"
    );
    describe_histogram!(
        "linkscout_fetch_duration_seconds",
        Unit::Seconds,
        "Duration of successful page fetches in seconds"
    );
}
