use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::EventDomContentEventFired;
use chromiumoxide::page::Page as CrPage;
use futures::StreamExt;

use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Page with the operations the batch
/// loop needs: navigate-to-DOM-parse and rendered-HTML retrieval.
pub struct Page {
    inner: CrPage,
    navigation_timeout: Duration,
}

impl Page {
    pub(crate) fn new(inner: CrPage, navigation_timeout: Duration) -> Self {
        Self {
            inner,
            navigation_timeout,
        }
    }

    /// Returns a reference to the underlying chromiumoxide Page.
    pub fn inner(&self) -> &CrPage {
        &self.inner
    }

    /// Navigate to the given URL and wait until the DOM's initial parse
    /// completes (DOMContentLoaded). Subresources may still be loading;
    /// waiting for network idle is deliberately skipped for speed.
    pub async fn goto_dom(&self, url: &str) -> Result<()> {
        // Subscribe before navigating so the event cannot be missed.
        let mut dom_events = self
            .inner
            .event_listener::<EventDomContentEventFired>()
            .await
            .map_err(|e| Error::Navigation(e.to_string()))?;

        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::Navigation(e.to_string()))?;

        tokio::time::timeout(self.navigation_timeout, dom_events.next())
            .await
            .map_err(|_| {
                Error::Timeout(format!(
                    "DOMContentLoaded on {url} (after {:?})",
                    self.navigation_timeout
                ))
            })?;

        Ok(())
    }

    /// Get the full rendered HTML content of the page.
    pub async fn html(&self) -> Result<String> {
        self.inner
            .content()
            .await
            .map_err(|e| Error::Navigation(e.to_string()))
    }

    /// Get the current page URL.
    pub async fn url(&self) -> Result<String> {
        self.inner
            .url()
            .await
            .map_err(|e| Error::Navigation(e.to_string()))?
            .ok_or_else(|| Error::Navigation("No URL found".into()))
    }
}
