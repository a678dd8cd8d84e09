//! Minifier wrappers applied by transform stages.
//!
//! Each function is a pure bytes-in, smaller-equivalent-bytes-out transform;
//! stage plumbing (ordering, cardinality) lives in `stage`.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use regex::Regex;

use crate::core::error::{Error, Result};

/// Minify a stylesheet. Malformed CSS is a fatal stage error naming the
/// offending source.
pub fn css(source: &str, origin: &str) -> Result<String> {
    let mut sheet = StyleSheet::parse(source, ParserOptions::default()).map_err(|e| {
        Error::stage_failed("minifyCss", Some(origin.to_string()), e.to_string())
    })?;

    sheet.minify(MinifyOptions::default()).map_err(|e| {
        Error::stage_failed("minifyCss", Some(origin.to_string()), e.to_string())
    })?;

    let output = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| Error::stage_failed("minifyCss", Some(origin.to_string()), e.to_string()))?;

    Ok(output.code)
}

/// Collapse whitespace in markup: runs of whitespace become a single space
/// and whitespace between adjacent tags is removed. Element order and text
/// content are preserved.
pub fn html(source: &str) -> Result<String> {
    let runs = Regex::new(r"\s+")
        .map_err(|e| Error::internal_unexpected(e.to_string()))?;
    let between_tags = Regex::new(r">\s+<")
        .map_err(|e| Error::internal_unexpected(e.to_string()))?;

    let collapsed = runs.replace_all(source, " ");
    let collapsed = between_tags.replace_all(&collapsed, "><");
    Ok(collapsed.trim().to_string())
}

/// JavaScript minification is a passthrough: bundles ship concatenated but
/// uncompressed, and the `.min.js` rename applies either way.
pub fn js(source: Vec<u8>) -> Vec<u8> {
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strips_whitespace_and_semicolons() {
        let out = css("body {  color: red;  }\n", "app.css").unwrap();
        assert_eq!(out, "body{color:red}");
    }

    #[test]
    fn css_rejects_malformed_input() {
        let err = css("body { color: }", "broken.css").unwrap_err();
        assert_eq!(err.code.as_str(), "stage.failed");
        assert!(err.details.to_string().contains("broken.css"));
    }

    #[test]
    fn html_collapses_redundant_whitespace() {
        let out = html("<div>\n    <p>hello   world</p>\n</div>\n").unwrap();
        assert_eq!(out, "<div><p>hello world</p></div>");
    }

    #[test]
    fn html_preserves_element_order_and_text() {
        let out = html("<ul>\n  <li>first</li>\n  <li>second</li>\n</ul>").unwrap();
        assert_eq!(out, "<ul><li>first</li><li>second</li></ul>");
    }

    #[test]
    fn js_is_a_passthrough() {
        let input = b"var a = 1;\nvar b = 2;\n".to_vec();
        assert_eq!(js(input.clone()), input);
    }
}
