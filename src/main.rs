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

use anyhow::Context;
use clap::Parser;
use linkscout::application::dto::crawl_request::CrawlRequestDto;
use linkscout::application::usecases::find_opportunities::FindOpportunitiesUseCase;
use linkscout::config::settings::Settings;
use linkscout::presentation::input_reader;
use linkscout::presentation::report_writer::{OutputFormat, ReportWriter};
use linkscout::utils::telemetry;
use linkscout::workers::progress::spawn_progress_reporter;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// 查找提到目标词但尚未链接到目标URL的页面
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// CSV file with candidate URLs in the first column and no header
    #[arg(long, value_name = "FILE")]
    urls: PathBuf,

    /// Text file with one keyword or anchor text per line
    #[arg(long, value_name = "FILE")]
    terms: PathBuf,

    /// URL the candidate pages should link to
    #[arg(long)]
    target: String,

    /// CSS selector or XPath narrowing the crawl scope (e.g. //*[@id='content'])
    #[arg(long, default_value = "")]
    selector: String,

    /// Write results here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Write the list of pages that could not be fetched or parsed
    #[arg(long, value_name = "FILE")]
    failures: Option<PathBuf>,

    /// Configuration file (defaults to config/default.toml and LINKSCOUT__* variables)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Number of concurrent fetches
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-page fetch timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Match terms case-sensitively
    #[arg(long, default_value_t = false)]
    case_sensitive: bool,

    /// Header of the matched terms column (e.g. "Anchor Texts")
    #[arg(long)]
    terms_column: Option<String>,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(concurrency) = self.concurrency {
            settings.crawler.concurrency = concurrency.max(1);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.crawler.timeout_secs = timeout_secs;
        }
        if self.case_sensitive {
            settings.matching.case_sensitive = true;
        }
        if let Some(column) = &self.terms_column {
            settings.export.terms_column = column.clone();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 1. Initialize logging
    telemetry::init_telemetry(args.json_logs);
    linkscout::infrastructure::metrics::describe_metrics();

    // 2. Load configuration
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("Failed to load configuration")?;
    args.apply_overrides(&mut settings);

    // 3. Read inputs
    let urls = input_reader::read_candidate_urls(
        File::open(&args.urls).with_context(|| format!("Failed to open {}", args.urls.display()))?,
    )
    .context("Failed to read candidate URLs")?;
    let terms = input_reader::read_terms(BufReader::new(
        File::open(&args.terms).with_context(|| format!("Failed to open {}", args.terms.display()))?,
    ))
    .context("Failed to read terms")?;
    info!(urls = urls.len(), terms = terms.len(), "Inputs loaded");

    // 4. Validate and run
    let use_case = FindOpportunitiesUseCase::new(settings.clone());
    let crawl = use_case.prepare(CrawlRequestDto {
        urls,
        terms,
        selector: args.selector.clone(),
        target_url: args.target.clone(),
    })?;
    let total = crawl.url_count();

    let reporter = spawn_progress_reporter(crawl.progress(), Duration::from_secs(2));
    let report = crawl.run().await;
    reporter.await.ok();

    info!(
        "Finished crawling {} URLs. Found {} internal linking opportunities.",
        total,
        report.results.len()
    );
    if report.failure_count() > 0 {
        warn!(
            failures = report.failure_count(),
            "Some pages could not be fetched or parsed"
        );
    }
    if report.results.is_empty() {
        warn!("No URLs passed all checks");
    }

    // 5. Export
    let writer = ReportWriter::new(&settings.export);
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writer.write(args.format, &report.results, BufWriter::new(file))?;
            info!(path = %path.display(), "Results written");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writer.write(args.format, &report.results, &mut handle)?;
            handle.flush()?;
        }
    }

    if let Some(path) = &args.failures {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        writer.write_failures(&report.failures, BufWriter::new(file))?;
    }

    Ok(())
}
