//! Sandboxed embedding and file output for the rendered report
//!
//! The report navigates with the URL hash. Served inline, that navigation
//! would mutate the host page's own URL and re-trigger its render cycle, so
//! the host page loads the report by reference instead: the HTML is encoded
//! as a base64 data: URI and used as the src of an isolated iframe.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::Path;

/// Report file written in script mode
pub const REPORT_FILE_NAME: &str = "profile_report.html";

/// Fixed height of the embedded frame
pub const EMBED_FRAME_HEIGHT: u32 = 3000;

/// Encode the report HTML as a `data:text/html;base64,...` URI.
pub fn report_data_uri(html: &str) -> String {
    format!("data:text/html;base64,{}", BASE64.encode(html.as_bytes()))
}

/// Render the host page: title, wide layout, one scrolling iframe sourced
/// from the data URI. The raw report HTML never appears inline here.
pub fn render_host_page(title: &str, data_uri: &str) -> String {
    let mut page = String::with_capacity(data_uri.len() + 1024);
    page.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    page.push_str(&escape_html(title));
    page.push_str(
        "</title>\n<style>\n  body { margin: 0; font-family: system-ui, sans-serif; }\n  \
         .wide { width: 100%; }\n  h1 { margin: 16px 20px 8px 20px; font-size: 22px; }\n  \
         iframe { border: none; display: block; }\n</style>\n</head>\n<body>\n<div class=\"wide\">\n<h1>",
    );
    page.push_str(&escape_html(title));
    page.push_str("</h1>\n<iframe src=\"");
    page.push_str(data_uri);
    page.push_str("\" width=\"100%\" height=\"");
    page.push_str(&EMBED_FRAME_HEIGHT.to_string());
    page.push_str("\" scrolling=\"yes\"></iframe>\n</div>\n</body>\n</html>\n");
    page
}

/// Write the report file, overwriting any previous run.
pub fn save_report(html: &str, path: &Path) -> Result<()> {
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}

/// Open the saved report in the OS default browser via its file:// URI.
pub fn open_in_browser(path: &Path) -> Result<()> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve report path: {}", path.display()))?;
    let uri = format!("file://{}", absolute.display());
    webbrowser::open(&uri).with_context(|| format!("Failed to open browser for {}", uri))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
