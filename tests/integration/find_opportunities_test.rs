// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{mount_page, mount_slow_page, mount_status, test_settings};
use linkscout::application::dto::crawl_request::CrawlRequestDto;
use linkscout::application::usecases::find_opportunities::FindOpportunitiesUseCase;
use linkscout::domain::models::crawl_report::FailureKind;
use linkscout::utils::errors::CrawlError;
use std::time::Duration;
use wiremock::MockServer;

async fn start_site() -> MockServer {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/p1",
        r#"<html><body>
            <nav><a href="/money-guide">Money</a></nav>
            <div id="content"><p>Reviewing the best CBD Vape Pen of the year.</p></div>
        </body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/blog/p2",
        r#"<html><body>
            <div id="content"><p>payday loans are costly, read <a href="../money-guide">our guide</a>.</p></div>
        </body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/p3",
        r#"<html><body><div id="content"><p>Spring gardening tips.</p></div></body></html>"#,
    )
    .await;

    server
}

fn request(server: &MockServer, routes: &[&str]) -> CrawlRequestDto {
    CrawlRequestDto {
        urls: routes
            .iter()
            .map(|r| format!("{}{}", server.uri(), r))
            .collect(),
        terms: vec!["payday loans".to_string(), "cbd vape pen".to_string()],
        selector: "//*[@id='content']".to_string(),
        target_url: format!("{}/money-guide", server.uri()),
    }
}

#[tokio::test]
async fn test_finds_unlinked_pages_mentioning_terms() {
    let server = start_site().await;
    let use_case = FindOpportunitiesUseCase::new(test_settings());

    let report = use_case
        .execute(request(&server, &["/p1", "/blog/p2", "/p3"]))
        .await
        .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].url, format!("{}/p1", server.uri()));
    assert_eq!(report.results[0].terms, vec!["cbd vape pen"]);
    assert_eq!(report.stats.already_linked, 1);
    assert_eq!(report.stats.no_match, 1);
    assert_eq!(report.failure_count(), 0);
}

#[tokio::test]
async fn test_timeout_and_error_pages_are_counted_not_fatal() {
    let server = start_site().await;
    mount_slow_page(&server, "/slow", Duration::from_secs(3)).await;
    mount_status(&server, "/gone", 404).await;
    let use_case = FindOpportunitiesUseCase::new(test_settings());

    let report = use_case
        .execute(request(&server, &["/p1", "/slow", "/blog/p2", "/gone", "/p3"]))
        .await
        .unwrap();

    assert_eq!(report.stats.total, 5);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.stats.fetch_failed, 2);
    assert!(report.failures.iter().all(|f| f.kind == FailureKind::Fetch));

    let mut failed: Vec<_> = report.failures.iter().map(|f| f.url.clone()).collect();
    failed.sort();
    assert_eq!(
        failed,
        vec![format!("{}/gone", server.uri()), format!("{}/slow", server.uri())]
    );
}

#[tokio::test]
async fn test_whole_document_scope_sees_navigation_links() {
    let server = start_site().await;
    let use_case = FindOpportunitiesUseCase::new(test_settings());
    let mut dto = request(&server, &["/p1"]);
    dto.selector = String::new();

    let report = use_case.execute(dto).await.unwrap();

    // The navigation link to the target is now in scope
    assert!(report.results.is_empty());
    assert_eq!(report.stats.already_linked, 1);
}

#[tokio::test]
async fn test_case_sensitive_matching_option() {
    let server = start_site().await;
    let mut settings = test_settings();
    settings.matching.case_sensitive = true;
    let use_case = FindOpportunitiesUseCase::new(settings);

    let report = use_case.execute(request(&server, &["/p1"])).await.unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.stats.no_match, 1);
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_crawling() {
    let server = MockServer::start().await;
    let use_case = FindOpportunitiesUseCase::new(test_settings());
    let mut dto = request(&server, &["/p1"]);
    dto.target_url = "   ".to_string();

    let err = use_case.execute(dto).await.unwrap_err();

    assert!(matches!(err, CrawlError::InvalidInput(_)));
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}
