//! Chapter fetching: shared client, error type, Bible Gateway adapter, and the harvest loop.

mod client;
mod error;

pub mod gateway;

pub use client::{GatewayClient, GatewayClientBuilder};
pub use error::FetchError;

use crate::canon::{self, Book};
use crate::model::ChapterRecord;

/// Source of verse text for one chapter of one book. Implemented by
/// [gateway::GatewayBible]; stubbed in tests.
pub trait ChapterSource {
    fn chapter_verses(&mut self, book: &str, chapter: u32) -> Result<Vec<String>, FetchError>;
}

/// Options for a harvest run: progress callback and optional single-book filter.
pub struct HarvestOptions<'a> {
    pub progress: Option<&'a dyn Fn(u32, u32)>,
    /// Restrict the run to one book (canonical name, case-insensitive).
    pub book: Option<&'a str>,
}

/// Walk the canon table and fetch every chapter in order.
///
/// A failing chapter is logged with the book and chapter that actually failed,
/// omitted from the result, and the loop continues. Record order is table order,
/// then ascending chapter number.
pub fn harvest(
    source: &mut dyn ChapterSource,
    translation: &str,
    options: &HarvestOptions<'_>,
) -> Result<Vec<ChapterRecord>, FetchError> {
    let books: Vec<&Book> = match options.book {
        Some(name) => vec![canon::find_book(name).ok_or_else(|| FetchError::UnknownBook {
            name: name.to_string(),
        })?],
        None => canon::OLD_TESTAMENT.iter().collect(),
    };

    let total: u32 = books.iter().map(|b| b.chapters).sum();
    let mut records = Vec::with_capacity(total as usize);
    let mut done = 0u32;
    for book in books {
        for chapter in 1..=book.chapters {
            done += 1;
            if let Some(ref p) = options.progress {
                p(done, total);
            }
            match source.chapter_verses(book.name, chapter) {
                Ok(verses) => {
                    records.push(ChapterRecord::new(book.name, chapter, translation, &verses));
                }
                Err(e) => {
                    eprintln!("{} {}: {}. Skipped.", book.name, chapter, e);
                }
            }
        }
    }
    Ok(records)
}
