use std::time::Duration;

use article_extract::{ArticleExtractor, Error, Options, OutputFormat};
use mockito::Server;

fn paragraph(marker: &str) -> String {
    let body = (0..45).map(|i| format!("{marker}{i}")).collect::<Vec<_>>().join(" ");
    format!("<p>{body}</p>")
}

fn page(marker: &str, pager: &str) -> String {
    format!(
        r#"<html><head><meta property="og:image" content="/cover.jpg"></head>
           <body><h1>Served Story</h1><article>{}{}{}</article>{pager}</body></html>"#,
        paragraph(&format!("{marker}a")),
        paragraph(&format!("{marker}b")),
        paragraph(&format!("{marker}c")),
    )
}

fn extractor(options: Options) -> ArticleExtractor {
    ArticleExtractor::new(options).unwrap()
}

#[test]
fn extracts_paginated_article_over_http() {
    let mut server = Server::new();
    let seed = server
        .mock("GET", "/story")
        .match_header("user-agent", "article-extract-it/1.0")
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(page("one", r#"<a href="/story/2">next</a>"#))
        .expect(1)
        .create();
    let second = server
        .mock("GET", "/story/2")
        .with_header("content-type", "text/html")
        .with_body(page("two", r#"<a href="/story">1</a>"#))
        .expect(1)
        .create();

    let options = Options {
        user_agent: "article-extract-it/1.0".to_string(),
        timeout: Duration::from_secs(5),
        format: OutputFormat::Markdown,
        ..Options::default()
    };
    let url = format!("{}/story", server.url());
    let result = extractor(options).extract(&url).unwrap();

    assert_eq!(result.title, "Served Story");
    assert_eq!(result.pages_visited, 2);
    assert!(result.content.contains("onea0"));
    assert!(result.content.contains("twoc44"));
    assert_eq!(result.featured_image.url, format!("{}/cover.jpg", server.url()));
    assert_eq!(result.featured_image.caption, "Served Story");
    seed.assert();
    second.assert();
}

#[test]
fn seed_http_error_is_returned() {
    let mut server = Server::new();
    let _m = server.mock("GET", "/gone").with_status(410).create();

    let url = format!("{}/gone", server.url());
    match extractor(Options::default()).extract(&url) {
        Err(Error::FetchFailure { reason, .. }) => assert!(reason.contains("410")),
        other => panic!("expected FetchFailure, got {other:?}"),
    }
}

#[test]
fn later_http_error_only_warns() {
    let mut server = Server::new();
    let _seed = server
        .mock("GET", "/story")
        .with_body(page("one", r#"<a href="/story/2">2</a>"#))
        .create();
    let _missing = server.mock("GET", "/story/2").with_status(500).create();

    let url = format!("{}/story", server.url());
    let result = extractor(Options::default()).extract(&url).unwrap();

    assert!(result.content.contains("onea0"));
    assert_eq!(result.pages_visited, 2);
    assert!(result.warnings.iter().any(|w| w.contains("500")));
}
