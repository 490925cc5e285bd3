//! Tests for the sandboxed data-URI embedder and host page

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use rhoscope::report::{
    render_host_page, report_data_uri, EMBED_FRAME_HEIGHT, REPORT_FILE_NAME,
};

#[test]
fn test_data_uri_prefix() {
    let uri = report_data_uri("<html></html>");
    assert!(uri.starts_with("data:text/html;base64,"));
}

#[test]
fn test_data_uri_round_trip_is_byte_exact() {
    let html = "<!doctype html>\n<html><body>naïve – ünïcode &amp; edge cases</body></html>";
    let uri = report_data_uri(html);

    let payload = uri
        .strip_prefix("data:text/html;base64,")
        .expect("well-formed data URI");
    let decoded = BASE64.decode(payload).expect("valid base64 payload");

    assert_eq!(
        decoded,
        html.as_bytes(),
        "decoding the payload must reproduce the original HTML byte-for-byte"
    );
}

#[test]
fn test_host_page_embeds_by_reference_only() {
    let report_html = "<!doctype html><html><body>report-body-marker</body></html>";
    let uri = report_data_uri(report_html);
    let host = render_host_page("My Profile", &uri);

    assert!(host.starts_with("<!doctype html>"));
    assert!(host.contains(&uri), "the iframe src must be the data URI");
    assert!(
        !host.contains("report-body-marker"),
        "the raw report HTML must never appear inline in the host page"
    );
}

#[test]
fn test_host_page_frame_attributes() {
    let host = render_host_page("My Profile", "data:text/html;base64,AA==");

    assert!(host.contains("<iframe"));
    assert!(host.contains(&format!("height=\"{}\"", EMBED_FRAME_HEIGHT)));
    assert!(host.contains("scrolling=\"yes\""));
    assert!(host.contains("width=\"100%\""));
    assert!(host.contains("<title>My Profile</title>"));
}

#[test]
fn test_host_page_escapes_title() {
    let host = render_host_page("<script>alert('x')</script>", "data:text/html;base64,AA==");

    assert!(!host.contains("<script>alert"));
    assert!(host.contains("&lt;script&gt;"));
}

#[test]
fn test_frame_constants() {
    assert_eq!(EMBED_FRAME_HEIGHT, 3000);
    assert_eq!(REPORT_FILE_NAME, "profile_report.html");
}
