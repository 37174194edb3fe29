pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod page;
pub mod scrape;
pub mod urls;

pub use browser::Browser;
pub use config::BrowserConfig;
pub use error::{Error, Result};
pub use page::Page;
pub use scrape::ScrapeRecord;
