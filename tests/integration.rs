use bulkscrape::{output, scrape, urls, Browser, BrowserConfig};

// These tests drive a real Chrome over the network, so they only run
// with `cargo test -- --ignored` on a machine that has one installed.

#[tokio::test]
#[ignore = "requires a local Chrome install and network access"]
async fn launch_navigate_and_extract() {
    let browser = Browser::builder()
        .headless(true)
        .build()
        .await
        .expect("Failed to launch browser");

    let page = browser.new_page().await.expect("Failed to open page");
    page.goto_dom("https://example.com")
        .await
        .expect("Failed to navigate");

    let html = page.html().await.expect("Failed to get HTML");
    assert!(html.contains("Example Domain"));

    let text = bulkscrape::extract::body_text(&html).expect("Failed to extract");
    assert!(text.contains("Example Domain"));

    browser.close().await.expect("Failed to close browser");
}

#[tokio::test]
#[ignore = "requires a local Chrome install and network access"]
async fn batch_keeps_going_past_a_bad_url() {
    let urls = vec![
        "https://example.com".to_string(),
        "https://definitely-not-a-real-host.invalid".to_string(),
        "https://example.org".to_string(),
    ];

    let records = scrape::run(&urls, BrowserConfig::default())
        .await
        .expect("Batch run failed");

    assert_eq!(records.len(), urls.len());
    assert_eq!(records[0].url, urls[0]);
    assert!(!records[0].is_failure());
    assert!(records[1].content.starts_with("Failed to scrape: "));
    assert!(!records[2].is_failure());
}

#[tokio::test]
#[ignore = "requires a local Chrome install and network access"]
async fn end_to_end_file_to_csv() {
    use std::io::Write;

    let mut urls_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        urls_file,
        "https://example.com\n# comment\n\nhttps://example.org\n"
    )
    .unwrap();

    let loaded = urls::load_urls(urls_file.path()).unwrap();
    assert_eq!(loaded, vec!["https://example.com", "https://example.org"]);

    let records = scrape::run(&loaded, BrowserConfig::default())
        .await
        .expect("Batch run failed");

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("results.csv");
    output::write_csv(&records, &csv_path).unwrap();

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers, csv::StringRecord::from(vec!["url", "content"]));
    assert_eq!(reader.records().count(), 2);
}
