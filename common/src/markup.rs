//! Markup fragments for page selector controls
use std::fmt::{self, Display, Write};

use crate::pages::WindowEntry;

/// Wrapper for writing text with html special chars escaped
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                ch => f.write_char(ch)?,
            }
        }
        Ok(())
    }
}

/// Escape text for use inside element content or attribute
pub fn escape(text: &str) -> String {
    Escaped(text).to_string()
}

/// Placeholder for omitted pages
pub const ELLIPSIS: &str = r#"<span class="page-ellipsis">…</span>"#;

/// Build page button markup.
/// Returns `None` for ellipsis, it is not a button
pub fn button(entry: WindowEntry, current: u32) -> Option<String> {
    let (page, kind) = match entry {
        WindowEntry::First => (1, Some("first")),
        WindowEntry::Page(page) => (page, None),
        WindowEntry::Last(page) => (page, Some("last")),
        WindowEntry::Ellipsis => return None,
    };

    let mut class = String::from("page-button");
    if let Some(kind) = kind {
        class.push(' ');
        class.push_str(kind);
    }
    let active = page == current;
    if active {
        class.push_str(" active");
    }

    Some(format!(
        r#"<button type="button" class="{class}" data-page="{page}"{}>{page}</button>"#,
        if active { r#" aria-current="page""# } else { "" }
    ))
}

#[test]
fn test_escape() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn test_button() {
    assert_eq!(
        button(WindowEntry::Page(3), 3).unwrap(),
        r#"<button type="button" class="page-button active" data-page="3" aria-current="page">3</button>"#
    );
    assert_eq!(
        button(WindowEntry::Last(10), 3).unwrap(),
        r#"<button type="button" class="page-button last" data-page="10">10</button>"#
    );
    assert_eq!(
        button(WindowEntry::First, 1).unwrap(),
        r#"<button type="button" class="page-button first active" data-page="1" aria-current="page">1</button>"#
    );
    assert!(button(WindowEntry::Ellipsis, 1).is_none());
}
