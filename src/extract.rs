use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Extract the visible text of the document body.
///
/// Text nodes are trimmed and joined with a single space, so
/// formatting whitespace between nodes collapses to one separator.
/// A document without a `<body>` element is an extraction error.
pub fn body_text(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    // "body" is a valid selector; parse can only fail on malformed input.
    let selector =
        Selector::parse("body").map_err(|e| Error::Extraction(e.to_string()))?;

    let body = document
        .select(&selector)
        .next()
        .ok_or_else(|| Error::Extraction("document has no <body> element".into()))?;

    Ok(body
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_text_nodes_with_single_spaces() {
        let html = "<html><body><p> a </p>\n<p>b</p><div>c\nd</div></body></html>";
        assert_eq!(body_text(html).unwrap(), "a b c\nd");
    }

    #[test]
    fn skips_whitespace_only_nodes() {
        let html = "<html><body>  <p>hello</p>   <p>world</p>  </body></html>";
        assert_eq!(body_text(html).unwrap(), "hello world");
    }

    #[test]
    fn html_parser_always_synthesizes_a_body() {
        // html5ever inserts <body> even when the source omits it, so a
        // fragment without one still extracts.
        assert_eq!(body_text("<p>text</p>").unwrap(), "text");
    }

    #[test]
    fn empty_body_extracts_to_empty_string() {
        assert_eq!(body_text("<html><body></body></html>").unwrap(), "");
    }
}
