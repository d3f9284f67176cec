use super::*;

#[test]
fn parse_route_id_accepts_numeric_params() {
    assert_eq!(parse_route_id(Some("42".to_owned())), Some(42));
}

#[test]
fn parse_route_id_rejects_missing_or_malformed() {
    assert_eq!(parse_route_id(None), None);
    assert_eq!(parse_route_id(Some("abc".to_owned())), None);
    assert_eq!(parse_route_id(Some(String::new())), None);
}

#[test]
fn render_markdown_html_renders_basics() {
    let out = render_markdown_html("# Title\n\nSome *body* text.");
    assert!(out.contains("<h1>"));
    assert!(out.contains("<em>body</em>"));
}

#[test]
fn render_markdown_html_strips_raw_html() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

#[test]
fn render_markdown_html_keeps_tables() {
    let out = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(out.contains("<table>"));
}
