//! Canonical Old Testament book table: 39 books with chapter counts (standard canon).
//!
//! Order here is output order; the harvester walks this table front to back.

/// One book of the canon: display name and number of chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub name: &'static str,
    pub chapters: u32,
}

/// The 39 Old Testament books in canonical order.
pub const OLD_TESTAMENT: [Book; 39] = [
    Book { name: "Genesis", chapters: 50 },
    Book { name: "Exodus", chapters: 40 },
    Book { name: "Leviticus", chapters: 27 },
    Book { name: "Numbers", chapters: 36 },
    Book { name: "Deuteronomy", chapters: 34 },
    Book { name: "Joshua", chapters: 24 },
    Book { name: "Judges", chapters: 21 },
    Book { name: "Ruth", chapters: 4 },
    Book { name: "1 Samuel", chapters: 31 },
    Book { name: "2 Samuel", chapters: 24 },
    Book { name: "1 Kings", chapters: 22 },
    Book { name: "2 Kings", chapters: 25 },
    Book { name: "1 Chronicles", chapters: 29 },
    Book { name: "2 Chronicles", chapters: 36 },
    Book { name: "Ezra", chapters: 10 },
    Book { name: "Nehemiah", chapters: 13 },
    Book { name: "Esther", chapters: 10 },
    Book { name: "Job", chapters: 42 },
    Book { name: "Psalms", chapters: 150 },
    Book { name: "Proverbs", chapters: 31 },
    Book { name: "Ecclesiastes", chapters: 12 },
    Book { name: "Song of Solomon", chapters: 8 },
    Book { name: "Isaiah", chapters: 66 },
    Book { name: "Jeremiah", chapters: 52 },
    Book { name: "Lamentations", chapters: 5 },
    Book { name: "Ezekiel", chapters: 48 },
    Book { name: "Daniel", chapters: 12 },
    Book { name: "Hosea", chapters: 14 },
    Book { name: "Joel", chapters: 3 },
    Book { name: "Amos", chapters: 9 },
    Book { name: "Obadiah", chapters: 1 },
    Book { name: "Jonah", chapters: 4 },
    Book { name: "Micah", chapters: 7 },
    Book { name: "Nahum", chapters: 3 },
    Book { name: "Habakkuk", chapters: 3 },
    Book { name: "Zephaniah", chapters: 3 },
    Book { name: "Haggai", chapters: 2 },
    Book { name: "Zechariah", chapters: 14 },
    Book { name: "Malachi", chapters: 4 },
];

/// Total chapter count across the table (929). Used for progress reporting.
pub fn total_chapters() -> u32 {
    OLD_TESTAMENT.iter().map(|b| b.chapters).sum()
}

/// Case-insensitive lookup by canonical name (e.g. "genesis", "1 samuel").
pub fn find_book(name: &str) -> Option<&'static Book> {
    let name = name.trim();
    OLD_TESTAMENT.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}
