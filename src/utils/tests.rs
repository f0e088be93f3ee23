// Utils module tests.

use super::*;

#[test]
fn test_truncate_chars_shorter_than_limit() {
    assert_eq!(truncate_chars("<h1>Hi</h1>", 120), "<h1>Hi</h1>");
}

#[test]
fn test_truncate_chars_exact_limit() {
    assert_eq!(truncate_chars("abcdef", 3), "abc");
    assert_eq!(truncate_chars("abc", 3), "abc");
}

#[test]
fn test_truncate_chars_multibyte() {
    // Byte slicing would panic in the middle of "é"
    assert_eq!(truncate_chars("ééé", 2), "éé");
}

#[test]
fn test_truncate_chars_empty() {
    assert_eq!(truncate_chars("", 10), "");
    assert_eq!(truncate_chars("abc", 0), "");
}

#[test]
fn test_sanitize_for_display() {
    assert_eq!(sanitize_for_display("a\u{1b}[31mb\nc\td"), "a [31mb\nc\td");
}

#[test]
fn test_try_parse_selector_valid() {
    assert!(try_parse_selector(r#"meta[name="description"]"#, "test").is_some());
}

#[test]
fn test_try_parse_selector_invalid() {
    assert!(try_parse_selector("div[", "test").is_none());
    assert!(try_parse_selector("", "test").is_none());
}

#[test]
#[should_panic(expected = "programming error")]
fn test_parse_selector_unsafe_panics_on_invalid() {
    parse_selector_unsafe("div[", "test");
}

#[test]
fn test_select_rendered_skips_template_content() {
    let document = scraper::Html::parse_document(
        r#"<p class="a">live</p><template><p class="a">inert</p><div><p class="a">deep</p></div></template>"#,
    );
    let selector = parse_selector_unsafe("p.a", "test");
    let texts: Vec<String> = select_rendered(&document, &selector)
        .map(|e| e.text().collect())
        .collect();
    assert_eq!(texts, vec!["live".to_string()]);
}

#[test]
fn test_is_template_content() {
    let document =
        scraper::Html::parse_document(r#"<template id="tpl"><span id="inner"></span></template>"#);
    let template = document
        .select(&parse_selector_unsafe("template", "test"))
        .next()
        .expect("template element");
    assert!(!is_template_content(&template));
    let inner = document
        .select(&parse_selector_unsafe("#inner", "test"))
        .next()
        .expect("template child");
    assert!(is_template_content(&inner));
}
