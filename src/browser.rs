use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;

use crate::config::{BrowserBuilder, BrowserConfig};
use crate::error::{Error, Result};
use crate::page::Page;

/// Chrome flags that improve performance without affecting functionality.
const PERF_ARGS: &[&str] = &[
    "disable-gpu",
    "disable-extensions",
    "metrics-recording-only",
    "mute-audio",
    "no-default-browser-check",
    "disable-client-side-phishing-detection",
    "disable-popup-blocking",
    "disable-prompt-on-repost",
];

/// A single Chrome instance scoped to one batch run.
///
/// The whole batch shares one browser and one tab; pages are navigated
/// sequentially, never in parallel.
pub struct Browser {
    browser: CrBrowser,
    navigation_timeout: std::time::Duration,
    handler_task: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Create a new BrowserBuilder for configuring and launching a browser.
    pub fn builder() -> BrowserBuilder {
        BrowserBuilder::new()
    }

    /// Launch a browser instance with the given configuration.
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder();

        if config.headless {
            builder = builder.new_headless_mode().no_sandbox();
        } else {
            builder = builder.with_head().no_sandbox();
        }

        // Performance: add Chrome flags that reduce startup and load time
        for arg in PERF_ARGS {
            builder = builder.arg(*arg);
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder = builder.viewport(Viewport {
            width: config.viewport_width,
            height: config.viewport_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        });

        let cr_config = builder.build().map_err(|e| Error::Launch(e.to_string()))?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        Ok(Self {
            browser,
            navigation_timeout: config.navigation_timeout,
            handler_task,
        })
    }

    /// Open a new blank page (tab). The batch loop reuses one page for
    /// every URL rather than opening a tab per URL.
    pub async fn new_page(&self) -> Result<Page> {
        let cr_page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::Navigation(e.to_string()))?;

        Ok(Page::new(cr_page, self.navigation_timeout))
    }

    /// Close the browser and release its resources.
    ///
    /// Consumes self so a session cannot be used after close; this runs
    /// exactly once per batch, after the last URL has been attempted.
    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await?;
        self.browser.wait().await?;
        self.handler_task.abort();
        Ok(())
    }
}
