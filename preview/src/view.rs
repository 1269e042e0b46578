//! Turns rendered markup into terminal text
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

/// Any html tag
static TAG_REX: Lazy<Regex> = Lazy::new(||
    Regex::new(r"<[^>]*>").unwrap()
);

/// Heading end, separates card title from body
static HEADING_END_REX: Lazy<Regex> = Lazy::new(||
    Regex::new(r"</h\d>").unwrap()
);

/// Strip tags and decode entities, collapsing whitespace
pub fn plain_text(markup: &str) -> String {
    let markup = HEADING_END_REX.replace_all(markup, " - ");
    let text = TAG_REX.replace_all(&markup, " ");
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    text.split_whitespace().join(" ")
}

/// One line per rendered item
pub fn item_lines(fragments: &[String]) -> Vec<String> {
    fragments
        .iter()
        .map(|f| format!("  * {}", plain_text(f)))
        .collect()
}

/// Page buttons on a single line, active page in brackets
pub fn button_line(fragments: &[String]) -> String {
    fragments
        .iter()
        .map(|f| {
            let label = plain_text(f);
            if f.contains("aria-current") {
                format!("[{label}]")
            } else {
                label
            }
        })
        .join(" ")
}

#[test]
fn test_plain_text() {
    assert_eq!(
        plain_text(r#"<div class="card"><h3>Library #6</h3><p>old &lt;maps&gt; &amp; books</p></div>"#),
        "Library #6 - old <maps> & books"
    );
    assert_eq!(plain_text("&amp;lt;"), "&lt;");
}

#[test]
fn test_button_line() {
    let fragments = [
        r#"<button class="page-button first" data-page="1">1</button>"#,
        r#"<span class="page-ellipsis">…</span>"#,
        r#"<button class="page-button active" data-page="5" aria-current="page">5</button>"#,
        r#"<button class="page-button last" data-page="9">9</button>"#,
    ]
    .map(String::from);
    assert_eq!(button_line(&fragments), "1 … [5] 9");
}
