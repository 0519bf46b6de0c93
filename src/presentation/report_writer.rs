// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ExportSettings;
use crate::domain::models::crawl_report::{FailureKind, JobFailure};
use crate::domain::models::crawl_result::CrawlResult;
use crate::utils::errors::ExportError;
use serde::Serialize;
use std::io::Write;

/// 导出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// 结果导出器
///
/// CSV 表头为 `URL` 与匹配词列，匹配词使用分隔符拼接
pub struct ReportWriter {
    terms_column: String,
    delimiter: String,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    url: &'a str,
    terms: &'a [String],
}

impl ReportWriter {
    pub fn new(settings: &ExportSettings) -> Self {
        Self {
            terms_column: settings.terms_column.clone(),
            delimiter: settings.delimiter.clone(),
        }
    }

    /// 按指定格式写出结果
    pub fn write<W: Write>(
        &self,
        format: OutputFormat,
        results: &[CrawlResult],
        writer: W,
    ) -> Result<(), ExportError> {
        match format {
            OutputFormat::Csv => self.write_csv(results, writer),
            OutputFormat::Json => self.write_json(results, writer),
        }
    }

    pub fn write_csv<W: Write>(&self, results: &[CrawlResult], writer: W) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["URL", self.terms_column.as_str()])?;
        for result in results {
            let terms = result.joined_terms(&self.delimiter);
            csv.write_record([result.url.as_str(), terms.as_str()])?;
        }
        csv.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, results: &[CrawlResult], mut writer: W) -> Result<(), ExportError> {
        let rows: Vec<JsonRow<'_>> = results
            .iter()
            .map(|r| JsonRow {
                url: &r.url,
                terms: &r.terms,
            })
            .collect();
        serde_json::to_writer_pretty(&mut writer, &rows)?;
        writeln!(writer)?;
        Ok(())
    }

    /// 写出失败诊断（不属于结果CSV）
    pub fn write_failures<W: Write>(&self, failures: &[JobFailure], writer: W) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["URL", "Kind", "Reason"])?;
        for failure in failures {
            let kind = match failure.kind {
                FailureKind::Fetch => "fetch",
                FailureKind::Parse => "parse",
            };
            csv.write_record([failure.url.as_str(), kind, failure.reason.as_str()])?;
        }
        csv.flush()?;
        Ok(())
    }
}
