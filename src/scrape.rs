use log::{info, warn};
use serde::Serialize;

use crate::browser::Browser;
use crate::config::BrowserConfig;
use crate::error::{Error, Result};
use crate::extract;
use crate::page::Page;

/// One row of batch output: the URL as given, and either the extracted
/// body text or a `Failed to scrape:` placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRecord {
    pub url: String,
    pub content: String,
}

impl ScrapeRecord {
    pub fn success(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
        }
    }

    pub fn failure(url: impl Into<String>, error: &Error) -> Self {
        Self {
            url: url.into(),
            content: format!("Failed to scrape: {error}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.content.starts_with("Failed to scrape: ")
    }
}

/// Scrape every URL in order through a single page, one record per URL.
///
/// Failures are caught per URL and recorded as placeholder content; one
/// bad URL never aborts the rest of the batch. The returned list always
/// has the same length and order as the input.
pub async fn scrape_all(page: &Page, urls: &[String]) -> Vec<ScrapeRecord> {
    let total = urls.len();
    let mut records = Vec::with_capacity(total);

    for (i, url) in urls.iter().enumerate() {
        info!("Scraping {}/{}: {}", i + 1, total, url);
        match scrape_one(page, url).await {
            Ok(text) => records.push(ScrapeRecord::success(url, text)),
            Err(e) => {
                warn!("Failed to scrape {url}: {e}");
                records.push(ScrapeRecord::failure(url, &e));
            }
        }
    }

    records
}

async fn scrape_one(page: &Page, url: &str) -> Result<String> {
    page.goto_dom(url).await?;
    let html = page.html().await?;
    extract::body_text(&html)
}

/// Run a whole batch: launch a browser, reuse one tab for every URL,
/// close the browser, return the records.
///
/// Only launch, page-open, and close errors propagate; per-URL errors
/// end up inside the records. Close is reached on every path once
/// launch has succeeded, because `scrape_all` is infallible.
pub async fn run(urls: &[String], config: BrowserConfig) -> Result<Vec<ScrapeRecord>> {
    let browser = Browser::launch(config).await?;
    let page = match browser.new_page().await {
        Ok(page) => page,
        Err(e) => {
            // Still tear the browser down before reporting the failure.
            let _ = browser.close().await;
            return Err(e);
        }
    };

    let records = scrape_all(&page, urls).await;
    browser.close().await?;
    Ok(records)
}
