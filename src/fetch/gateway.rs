//! Bible Gateway adapter. Builds passage URLs, fetches the print-view page, and
//! extracts the verse list from the passage HTML.

use crate::fetch::error::FetchError;
use crate::fetch::{ChapterSource, GatewayClient};
use reqwest::Url;
use scraper::{ElementRef, Html, Node, Selector};

const GATEWAY_BASE: &str = "https://www.biblegateway.com";

/// Translation codes Bible Gateway serves (English editions). Construction of
/// [GatewayBible] rejects anything not in this list.
const SUPPORTED_TRANSLATIONS: &[&str] = &[
    "ASV", "AMP", "BRG", "CSB", "EHV", "ESV", "ESVUK", "GNV", "GNT", "GW", "HCSB", "ISV", "JUB",
    "KJ21", "KJV", "LEB", "MEV", "MSG", "NASB", "NASB1995", "NET", "NIV", "NIVUK", "NKJV", "NLT",
    "NLV", "NOG", "NRSV", "NRSVA", "NRSVACE", "NRSVCE", "NRSVUE", "RSV", "RSVCE", "WEB", "YLT",
];

/// Parse a CSS selector or return a parse error (avoids panics from Selector::parse).
fn parse_selector(sel: &str, reference: &str) -> Result<Selector, FetchError> {
    Selector::parse(sel).map_err(|e| FetchError::ParsePassage {
        reference: reference.to_string(),
        reason: format!("invalid selector {:?}: {}", sel, e),
    })
}

/// Chapter fetcher bound to one translation. Holds a reference to the shared client.
pub struct GatewayBible<'a> {
    client: &'a mut GatewayClient,
    translation: String,
}

impl<'a> GatewayBible<'a> {
    /// Bind the client to one translation code (case-insensitive). Fails with
    /// [FetchError::UnsupportedTranslation] for codes Bible Gateway does not serve.
    pub fn new(client: &'a mut GatewayClient, translation: &str) -> Result<Self, FetchError> {
        let canonical = SUPPORTED_TRANSLATIONS
            .iter()
            .find(|t| t.eq_ignore_ascii_case(translation.trim()))
            .ok_or_else(|| FetchError::UnsupportedTranslation {
                translation: translation.to_string(),
            })?;
        Ok(Self {
            client,
            translation: canonical.to_string(),
        })
    }

    /// Canonical (uppercase) translation code this fetcher is bound to.
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Passage URL for one chapter, print view for a stable, chrome-free page.
    fn passage_url(&self, book: &str, chapter: u32) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &format!("{}/passage/", GATEWAY_BASE),
            &[
                ("search", format!("{} {}", book, chapter)),
                ("version", self.translation.clone()),
                ("interface", "print".to_string()),
            ],
        )
        .map_err(|e| FetchError::ParsePassage {
            reference: format!("{} {}", book, chapter),
            reason: format!("could not build passage URL: {}", e),
        })
    }
}

impl ChapterSource for GatewayBible<'_> {
    fn chapter_verses(&mut self, book: &str, chapter: u32) -> Result<Vec<String>, FetchError> {
        let reference = format!("{} {}", book, chapter);
        let url = self.passage_url(book, chapter)?;
        let response = self
            .client
            .get(url.as_str())
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                source: e,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let html = response
            .text()
            .map_err(|e| FetchError::BodyRead { source: e })?;
        parse_passage_verses(&html, &reference)
    }
}

/// Extract the ordered verse list from passage page HTML.
///
/// Verse text lives in `span.text` elements whose extra class encodes the verse
/// (`Gen-1-1`). Poetry splits one verse across several spans with the same class;
/// those are merged. Chapter numbers, verse numbers, and footnote/cross-reference
/// markers are stripped.
fn parse_passage_verses(html: &str, reference: &str) -> Result<Vec<String>, FetchError> {
    let doc = Html::parse_document(html);
    let container_sel = parse_selector("div.passage-text", reference)?;
    let container = doc
        .select(&container_sel)
        .next()
        .ok_or_else(|| FetchError::ParsePassage {
            reference: reference.to_string(),
            reason: "missing passage container (passage may not exist in this translation)"
                .to_string(),
        })?;

    let verse_sel = parse_selector("span.text", reference)?;
    let mut verses: Vec<String> = Vec::new();
    let mut last_key: Option<String> = None;
    for span in container.select(&verse_sel) {
        let Some(key) = verse_class_key(&span) else {
            continue;
        };
        let text = visible_text(span);
        if text.is_empty() {
            continue;
        }
        if last_key.as_deref() == Some(key.as_str()) {
            if let Some(last) = verses.last_mut() {
                last.push(' ');
                last.push_str(&text);
            }
        } else {
            verses.push(text);
            last_key = Some(key);
        }
    }

    if verses.is_empty() {
        return Err(FetchError::EmptyChapter {
            reference: reference.to_string(),
        });
    }
    Ok(verses)
}

/// The verse-identifying class token, e.g. "Gen-1-1" from `class="text Gen-1-1"`.
fn verse_class_key(span: &ElementRef) -> Option<String> {
    span.value()
        .classes()
        .find(|c| *c != "text" && c.matches('-').count() == 2)
        .map(|c| c.to_string())
}

/// Text of a verse span with markers removed and whitespace collapsed.
fn visible_text(el: ElementRef) -> String {
    let mut out = String::new();
    collect_visible_text(el, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_visible_text(el: ElementRef, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(&t.text),
            Node::Element(e) => {
                // Verse numbers and footnote/cross-reference markers are <sup>;
                // the drop-cap chapter number is <span class="chapternum">.
                if e.name() == "sup" || e.classes().any(|c| c == "chapternum") {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_supported_translation_case_insensitively() -> Result<(), FetchError> {
        let mut client = GatewayClient::new().map_err(|e| FetchError::ParsePassage {
            reference: String::new(),
            reason: e.to_string(),
        })?;
        let bible = GatewayBible::new(&mut client, "nrsv")?;
        assert_eq!(bible.translation(), "NRSV");
        Ok(())
    }

    #[test]
    fn new_rejects_unsupported_translation() -> Result<(), String> {
        let mut client = GatewayClient::new().map_err(|e| e.to_string())?;
        let result = GatewayBible::new(&mut client, "XYZ");
        match result {
            Err(FetchError::UnsupportedTranslation { translation }) if translation == "XYZ" => {
                Ok(())
            }
            _ => Err("expected UnsupportedTranslation".to_string()),
        }
    }

    #[test]
    fn passage_url_encodes_search_and_version() -> Result<(), FetchError> {
        let mut client = GatewayClient::new().map_err(|e| FetchError::ParsePassage {
            reference: String::new(),
            reason: e.to_string(),
        })?;
        let bible = GatewayBible::new(&mut client, "NRSV")?;
        let url = bible.passage_url("Song of Solomon", 8)?;
        let s = url.to_string();
        assert!(s.starts_with("https://www.biblegateway.com/passage/"));
        assert!(s.contains("search=Song+of+Solomon+8"));
        assert!(s.contains("version=NRSV"));
        assert!(s.contains("interface=print"));
        Ok(())
    }

    #[test]
    fn inline_parse_passage_strips_numbers_and_footnotes() -> Result<(), FetchError> {
        let html = r##"<html><body><div class="passage-text"><div class="passage-content">
<p><span id="en-NRSV-1" class="text Gen-1-1"><span class="chapternum">1 </span>In the beginning when God created<sup class="footnote" data-fn="#fen-NRSV-1a">[<a href="#fen-NRSV-1a">a</a>]</sup> the heavens and the earth,</span>
<span id="en-NRSV-2" class="text Gen-1-2"><sup class="versenum">2 </sup>the earth was a formless void and darkness covered the face of the deep,</span></p>
<div class="footnotes"><h4>Footnotes</h4><ol><li id="fen-NRSV-1a"><span>Or <i>when God began to create</i></span></li></ol></div>
</div></div></body></html>"##;
        let verses = parse_passage_verses(html, "Genesis 1")?;
        assert_eq!(verses.len(), 2);
        assert_eq!(
            verses[0],
            "In the beginning when God created the heavens and the earth,"
        );
        assert_eq!(
            verses[1],
            "the earth was a formless void and darkness covered the face of the deep,"
        );
        Ok(())
    }

    #[test]
    fn inline_parse_passage_merges_poetry_lines_of_one_verse() -> Result<(), FetchError> {
        let html = r#"<div class="passage-text">
<div class="poetry"><p>
<span class="text Ps-23-1"><span class="chapternum">23 </span>The Lord is my shepherd,</span><br/>
<span class="text Ps-23-1">I shall not want.</span><br/>
<span class="text Ps-23-2"><sup class="versenum">2 </sup>He makes me lie down in green pastures;</span>
</p></div></div>"#;
        let verses = parse_passage_verses(html, "Psalms 23")?;
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0], "The Lord is my shepherd, I shall not want.");
        assert_eq!(verses[1], "He makes me lie down in green pastures;");
        Ok(())
    }

    #[test]
    fn inline_parse_passage_collapses_whitespace() -> Result<(), FetchError> {
        let html = r#"<div class="passage-text">
<p><span class="text Ob-1-1">The vision
    of   Obadiah.</span></p></div>"#;
        let verses = parse_passage_verses(html, "Obadiah 1")?;
        assert_eq!(verses, vec!["The vision of Obadiah.".to_string()]);
        Ok(())
    }

    #[test]
    fn inline_parse_passage_missing_container_errors() -> Result<(), String> {
        let result = parse_passage_verses("<html><body><p>No results.</p></body></html>", "Ezra 11");
        match result {
            Err(FetchError::ParsePassage { reference, .. }) if reference == "Ezra 11" => Ok(()),
            _ => Err("expected ParsePassage".to_string()),
        }
    }

    #[test]
    fn inline_parse_passage_no_verse_spans_errors_empty() -> Result<(), String> {
        let html = r#"<div class="passage-text"><p>Nothing here.</p></div>"#;
        match parse_passage_verses(html, "Nahum 3") {
            Err(FetchError::EmptyChapter { reference }) if reference == "Nahum 3" => Ok(()),
            other => Err(format!("expected EmptyChapter, got {:?}", other)),
        }
    }
}
