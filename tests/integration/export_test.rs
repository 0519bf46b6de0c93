// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use linkscout::config::settings::ExportSettings;
use linkscout::domain::models::crawl_report::{FailureKind, JobFailure};
use linkscout::domain::models::crawl_result::CrawlResult;
use linkscout::presentation::input_reader;
use linkscout::presentation::report_writer::{OutputFormat, ReportWriter};
use std::fs::{self, File};
use std::io::{BufReader, Write};

#[test]
fn test_csv_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();

    let urls_path = dir.path().join("urls.csv");
    let mut urls_file = File::create(&urls_path).unwrap();
    writeln!(urls_file, "https://a.com/p1\nhttps://a.com/p2\n").unwrap();
    let urls = input_reader::read_candidate_urls(File::open(&urls_path).unwrap()).unwrap();
    assert_eq!(urls, vec!["https://a.com/p1", "https://a.com/p2"]);

    let terms_path = dir.path().join("terms.txt");
    fs::write(&terms_path, "payday loans\n\ncbd vape pen\n").unwrap();
    let terms =
        input_reader::read_terms(BufReader::new(File::open(&terms_path).unwrap())).unwrap();
    assert_eq!(terms, vec!["payday loans", "cbd vape pen"]);

    let out_path = dir.path().join("Internal Linking.csv");
    let writer = ReportWriter::new(&ExportSettings {
        terms_column: "Anchor Texts".to_string(),
        delimiter: ", ".to_string(),
    });
    writer
        .write(
            OutputFormat::Csv,
            &[CrawlResult {
                url: urls[0].clone(),
                terms: terms.clone(),
            }],
            File::create(&out_path).unwrap(),
        )
        .unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "URL,Anchor Texts\nhttps://a.com/p1,\"payday loans, cbd vape pen\"\n"
    );
}

#[test]
fn test_failures_are_written_separately() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("failures.csv");
    let writer = ReportWriter::new(&ExportSettings::default());

    writer
        .write_failures(
            &[JobFailure {
                url: "https://a.com/slow".to_string(),
                kind: FailureKind::Fetch,
                reason: "request to https://a.com/slow timed out".to_string(),
            }],
            File::create(&path).unwrap(),
        )
        .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("URL,Kind,Reason\n"));
    assert!(written.contains("https://a.com/slow,fetch,"));
}
