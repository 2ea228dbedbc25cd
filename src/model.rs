//! Canonical data model for harvested scripture.
//!
//! One record per chapter. The harvester produces this shape; the JSON writer
//! consumes it as the single source of truth.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One chapter of one book in one translation.
///
/// `id` is `"<UPPERCASE BOOK NAME> <chapter>"`, e.g. `"GENESIS 1"`. `text` maps
/// translation code to the full chapter text as one space-joined string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub id: String,
    pub text: BTreeMap<String, String>,
}

impl ChapterRecord {
    /// Build a record from a fetched verse list. Verses are joined with single
    /// spaces, preserving order.
    pub fn new(book: &str, chapter: u32, translation: &str, verses: &[String]) -> Self {
        let mut text = BTreeMap::new();
        text.insert(translation.to_string(), verses.join(" "));
        Self {
            id: record_id(book, chapter),
            text,
        }
    }
}

/// Record id: uppercase book name followed by the chapter number.
pub fn record_id(book: &str, chapter: u32) -> String {
    format!("{} {}", book.to_uppercase(), chapter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn record_id_uppercases_book_name() {
        assert_eq!(record_id("Genesis", 1), "GENESIS 1");
        assert_eq!(record_id("Song of Solomon", 8), "SONG OF SOLOMON 8");
        assert_eq!(record_id("1 Samuel", 31), "1 SAMUEL 31");
    }

    #[test]
    fn new_joins_verses_with_single_spaces() {
        let verses = vec!["In the beginning".to_string(), "God created".to_string()];
        let record = ChapterRecord::new("Genesis", 1, "NRSV", &verses);
        assert_eq!(record.id, "GENESIS 1");
        assert_eq!(
            record.text.get("NRSV").map(String::as_str),
            Some("In the beginning God created")
        );
        assert_eq!(record.text.len(), 1);
    }

    #[test]
    fn record_serializes_to_output_shape_json() -> Result<(), Box<dyn Error>> {
        let record = ChapterRecord::new(
            "Obadiah",
            1,
            "NRSV",
            &["The vision of Obadiah.".to_string()],
        );
        let json = serde_json::to_string(&record)?;
        let parsed: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(parsed.get("id").and_then(|v| v.as_str()), Some("OBADIAH 1"));
        assert_eq!(
            parsed
                .get("text")
                .and_then(|t| t.get("NRSV"))
                .and_then(|v| v.as_str()),
            Some("The vision of Obadiah.")
        );
        Ok(())
    }

    #[test]
    fn record_round_trips_through_json() -> Result<(), Box<dyn Error>> {
        let record = ChapterRecord::new("Joel", 3, "KJV", &["Verse one".to_string()]);
        let json = serde_json::to_string(&record)?;
        let back: ChapterRecord = serde_json::from_str(&json)?;
        assert_eq!(back, record);
        Ok(())
    }
}
