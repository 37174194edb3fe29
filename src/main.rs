use std::io::Write;

use env_logger::Env;
use log::error;

use bulkscrape::{config::BrowserBuilder, output, scrape, urls};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("Usage: bulkscrape <urls_file> <output_csv>");
        println!("Example: bulkscrape sample_urls.txt results.csv");
        return;
    }
    let urls_file = &args[1];
    let output_file = &args[2];

    println!("Loading URLs from {urls_file}");
    let urls = match urls::load_urls(urls_file) {
        Ok(urls) => urls,
        Err(e) => {
            error!("Could not read {urls_file}: {e}");
            return;
        }
    };

    if urls.is_empty() {
        println!("No valid URLs found in file");
        return;
    }

    println!("Found {} URLs to scrape", urls.len());
    for (i, url) in urls.iter().enumerate() {
        println!("  {}. {}", i + 1, url);
    }

    if !confirm("\nProceed with scraping? (y/n): ") {
        println!("Scraping cancelled");
        return;
    }

    println!("Starting browser...");
    let config = BrowserBuilder::new().headless(false).build_config();

    tokio::select! {
        result = scrape::run(&urls, config) => match result {
            Ok(records) => {
                if let Err(e) = output::write_csv(&records, output_file) {
                    error!("Could not write {output_file}: {e}");
                    return;
                }
                println!("Scraping complete, results saved to {output_file}");
            }
            Err(e) => error!("An error occurred: {e}"),
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\nScraping interrupted by user");
        }
    }
}

/// Block for a one-line yes/no answer; only `y`/`Y` proceeds.
fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    let _ = std::io::stdout().flush();

    let mut response = String::new();
    if std::io::stdin().read_line(&mut response).is_err() {
        return false;
    }
    response.trim().eq_ignore_ascii_case("y")
}
