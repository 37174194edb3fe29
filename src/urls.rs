use std::fs;
use std::path::Path;

use crate::error::Result;

/// Load URLs from a text file, one per line, in file order.
///
/// Lines are trimmed; empty lines and lines starting with `#` are
/// skipped. Duplicates are kept as-is, so a URL listed twice is
/// scraped twice.
pub fn load_urls(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn skips_blanks_and_comments_preserving_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "https://example.com\n# comment\n\n  https://example.org  \n\t\n#another\nhttps://example.com\n"
        )
        .unwrap();

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://example.com",
                "https://example.org",
                "https://example.com",
            ]
        );
    }

    #[test]
    fn empty_file_yields_empty_list() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let urls = load_urls(file.path()).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_urls("/nonexistent/urls.txt").is_err());
    }
}
