use std::cell::Cell;

use article_extract::dom::HtmlParser;
use article_extract::fetch::FetchSettings;
use article_extract::{extract_html, ArticleExtractor, Error, Options, OutputFormat};
use url::Url;

const URL: &str = "https://example.com/news/hello-world";

fn words(marker: &str, n: usize) -> String {
    (0..n).map(|i| format!("{marker}{i}")).collect::<Vec<_>>().join(" ")
}

fn hello_world_page() -> String {
    format!(
        r#"<html>
          <head><title>Site name</title></head>
          <body>
            <nav><a href="/">Home</a><a href="/world">World</a></nav>
            <h1>Hello World</h1>
            <article>
              <p>{}</p>
              <p>{}</p>
              <p>{}</p>
            </article>
            <footer><p>Copyright 2024</p></footer>
          </body>
        </html>"#,
        words("alpha", 45),
        words("beta", 45),
        words("gamma", 45),
    )
}

#[test]
fn hello_world_scenario() {
    let result = extract_html(&hello_world_page(), URL, OutputFormat::Markdown).unwrap();

    assert_eq!(result.title, "Hello World");
    assert_eq!(result.featured_image.url, "");
    assert_eq!(result.featured_image.caption, "Hello World");
    assert_eq!(result.format_used, OutputFormat::Markdown);
    assert_eq!(result.url, URL);

    let blocks: Vec<&str> = result.content.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].starts_with("alpha0 alpha1"));
    assert!(blocks[1].starts_with("beta0"));
    assert!(blocks[2].ends_with("gamma44"));
    assert!(!result.content.contains('#'));
    assert!(!result.content.contains("Hello World"));
    assert!(!result.content.contains("Copyright"));
}

#[test]
fn text_format_matches_markdown_without_markup() {
    let html = format!(
        "<html><body><article><h2>Section <em>one</em></h2><p>{}</p><p>{}</p><p>{}</p></article></body></html>",
        words("able", 40),
        words("baker", 40),
        words("charlie", 40)
    );

    let markdown = extract_html(&html, URL, OutputFormat::Markdown).unwrap();
    let text = extract_html(&html, URL, OutputFormat::Text).unwrap();

    assert!(markdown.content.starts_with("## Section *one*"));
    assert!(text.content.starts_with("Section one\n\none\n\nable0"));
    assert_eq!(text.format_used, OutputFormat::Text);
}

#[test]
fn sparse_container_yields_empty_content_and_title_caption() {
    let html = format!(
        "<html><body><h1>Short Post</h1><article><p>{}</p><p>{}</p></article></body></html>",
        words("long", 80),
        words("longer", 80)
    );

    let result = extract_html(&html, URL, OutputFormat::Markdown).unwrap();

    assert_eq!(result.content, "");
    assert_eq!(result.title, "Short Post");
    assert_eq!(result.featured_image.url, "");
    assert_eq!(result.featured_image.caption, "Short Post");
    assert!(result.warnings.iter().any(|w| w.contains("No extractable content found")));
}

#[test]
fn og_image_fallback_when_body_has_no_image() {
    let html = format!(
        r#"<html><head><meta property="og:image" content="https://cdn.example.com/cover.jpg"></head>
           <body><h1>Cover Story</h1><article><p>{}</p><p>{}</p><p>{}</p></article></body></html>"#,
        words("xray", 40),
        words("yankee", 40),
        words("zulu", 40)
    );

    let result = extract_html(&html, URL, OutputFormat::Markdown).unwrap();
    assert_eq!(result.featured_image.url, "https://cdn.example.com/cover.jpg");
    assert_eq!(result.featured_image.caption, "Cover Story");
}

#[test]
fn featured_image_from_body_figure() {
    let html = format!(
        r#"<html><body><h1>Photo Story</h1><article>
             <figure><img src="data:image/gif;base64,R0lGOD"><img src="/media/photo.jpg" alt="Alt"><figcaption>Harbour at dawn</figcaption></figure>
             <p>{}</p><p>{}</p><p>{}</p></article></body></html>"#,
        words("xray", 40),
        words("yankee", 40),
        words("zulu", 40)
    );

    let result = extract_html(&html, URL, OutputFormat::Markdown).unwrap();
    assert_eq!(result.featured_image.url, "https://example.com/media/photo.jpg");
    assert_eq!(result.featured_image.caption, "Harbour at dawn");
}

#[test]
fn published_date_from_meta_then_json_ld() {
    let body = format!("<article><p>{}</p><p>{}</p><p>{}</p></article>", words("xray", 40), words("yankee", 40), words("zulu", 40));

    let meta = format!(
        r#"<html><head><meta property="article:published_time" content="2024-02-01T07:00:00+07:00"></head><body>{body}</body></html>"#
    );
    let result = extract_html(&meta, URL, OutputFormat::Text).unwrap();
    assert_eq!(result.published_at, "2024-02-01T07:00:00+07:00");

    let json_ld = format!(
        r#"<html><head><script type="application/ld+json">{{"@type":"NewsArticle","dateCreated":"2024-02-02"}}</script></head><body>{body}</body></html>"#
    );
    let result = extract_html(&json_ld, URL, OutputFormat::Text).unwrap();
    assert_eq!(result.published_at, "2024-02-02");

    let none = format!("<html><body>{body}</body></html>");
    let result = extract_html(&none, URL, OutputFormat::Text).unwrap();
    assert_eq!(result.published_at, "");
    assert!(result.warnings.iter().any(|w| w.contains("published date")));
}

#[test]
fn boilerplate_phrases_are_dropped() {
    let html = format!(
        "<html><body><article><p>{}</p><p>Baca juga: Harga beras naik lagi</p><p>{}</p><p>ADVERTISEMENT</p><p>{}</p></article></body></html>",
        words("xray", 40),
        words("yankee", 40),
        words("zulu", 40)
    );

    let result = extract_html(&html, URL, OutputFormat::Markdown).unwrap();
    assert!(!result.content.contains("Baca juga"));
    assert!(!result.content.contains("ADVERTISEMENT"));
    assert_eq!(result.content.split("\n\n").count(), 3);
}

#[test]
fn seed_fetch_failure_is_an_error() {
    let fetcher = |url: &Url, _: &FetchSettings| -> article_extract::Result<String> {
        Err(Error::FetchFailure {
            url: url.to_string(),
            reason: "connection refused".to_string(),
        })
    };
    let extractor = ArticleExtractor::with_parts(Options::default(), fetcher, HtmlParser);

    match extractor.extract(URL) {
        Err(Error::FetchFailure { url, reason }) => {
            assert_eq!(url, URL);
            assert_eq!(reason, "connection refused");
        }
        other => panic!("expected FetchFailure, got {other:?}"),
    }
}

#[test]
fn invalid_seed_url_is_an_error() {
    let calls = Cell::new(0);
    let fetcher = |_: &Url, _: &FetchSettings| -> article_extract::Result<String> {
        calls.set(calls.get() + 1);
        Ok(hello_world_page())
    };
    let extractor = ArticleExtractor::with_parts(Options::default(), fetcher, HtmlParser);

    assert!(matches!(extractor.extract("not a url"), Err(Error::InvalidUrl { .. })));
    assert_eq!(calls.get(), 0);
    assert!(matches!(extract_html("<p>x</p>", "/relative", OutputFormat::Text), Err(Error::InvalidUrl { .. })));
}

#[test]
fn unparsable_seed_yields_empty_result_with_warning() {
    let fetcher = |_: &Url, _: &FetchSettings| -> article_extract::Result<String> { Ok("   ".to_string()) };
    let extractor = ArticleExtractor::with_parts(Options::default(), fetcher, HtmlParser);

    let result = extractor.extract(URL).unwrap();
    assert_eq!(result.content, "");
    assert_eq!(result.title, "");
    assert_eq!(result.featured_image.caption, "");
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn result_serializes_to_json() {
    let result = extract_html(&hello_world_page(), URL, OutputFormat::Text).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["title"], "Hello World");
    assert_eq!(json["format_used"], "text");
    assert_eq!(json["featured_image"]["caption"], "Hello World");
    assert_eq!(json["pages_visited"], 1);
}

#[test]
fn deeply_nested_markup_is_extracted_without_overflow() {
    let depth = 20_000;
    let html = format!(
        "<html><body><h1>Deep</h1><article><p>{}</p><p>{}</p><p>{}</p></article>{}innermost{}</body></html>",
        words("xray", 40),
        words("yankee", 40),
        words("zulu", 40),
        "<div>".repeat(depth),
        "</div>".repeat(depth),
    );

    let result = extract_html(&html, URL, OutputFormat::Markdown).unwrap();
    assert_eq!(result.title, "Deep");
    assert!(result.content.starts_with("xray0"));
    assert!(result.content.ends_with("zulu39"));
}
