//! Built-in demo dataset and its card template
use serde::{Deserialize, Serialize};

use crate::markup::Escaped;

/// Count of generated sample records
pub const SAMPLE_SIZE: u32 = 42;

const TOPICS: [(&str, &str); 7] = [
    ("Lighthouse", "A tower that guides ships along a rocky coast."),
    ("Orchard", "Rows of apple & pear trees planted in spring."),
    ("Glacier", "Slow river of ice carving a mountain valley."),
    ("Observatory", "Dome with a telescope pointed at the night sky."),
    ("Harbor", "Sheltered water where boats wait out the storm."),
    ("Library", "Shelves of books, maps and old <manuscripts>."),
    ("Windmill", "Sails turning a millstone on the open plain."),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Demo dataset
pub fn records() -> Vec<Record> {
    TOPICS
        .iter()
        .cycle()
        .zip(1..=SAMPLE_SIZE)
        .map(|(&(title, body), id)| Record {
            id,
            title: format!("{title} #{id}"),
            body: body.to_string(),
        })
        .collect()
}

/// Render a record as card markup
pub fn card(record: &Record) -> String {
    format!(
        r#"<div class="card" data-id="{}"><h3>{}</h3><p>{}</p></div>"#,
        record.id,
        Escaped(&record.title),
        Escaped(&record.body),
    )
}

#[test]
fn test_records() {
    let records = records();
    assert_eq!(records.len(), SAMPLE_SIZE as usize);
    assert_eq!(records[0].title, "Lighthouse #1");
    assert_eq!(records[7].title, "Lighthouse #8");
    assert_eq!(records.last().unwrap().id, SAMPLE_SIZE);
}

#[test]
fn test_card_escapes() {
    let record = Record {
        id: 6,
        title: "Library #6".to_string(),
        body: "old <manuscripts> & maps".to_string(),
    };
    assert_eq!(
        card(&record),
        r#"<div class="card" data-id="6"><h3>Library #6</h3><p>old &lt;manuscripts&gt; &amp; maps</p></div>"#
    );
}
