//! Text highlighting. Splits body text into marked / unmarked segments.
//!
//! Both entry points are pure and lossless: concatenating every `Segment::text`
//! always yields the input string byte for byte.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

/// Phrases emphasized in the about-section biography, in priority order.
pub const BIO_MARKERS: &[&str] = &[
    "University of Maryland, College Park",
    "machine learning",
    "computer vision",
    "precision agriculture",
    "soccer team captain",
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub marked: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            marked: false,
        }
    }

    pub fn mark(text: &'a str) -> Self {
        Self { text, marked: true }
    }
}

/// Compiled case-insensitive matcher over a fixed, ordered marker set.
///
/// Matching is leftmost-first: the earliest start offset wins, and when two
/// markers start at the same offset the one listed first wins.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(markers: &[&str]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = markers
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| regex::escape(m))
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in pattern.find_iter(text) {
            if found.start() > cursor {
                segments.push(Segment::plain(&text[cursor..found.start()]));
            }
            segments.push(Segment::mark(found.as_str()));
            cursor = found.end();
        }

        if cursor < text.len() || segments.is_empty() {
            segments.push(Segment::plain(&text[cursor..]));
        }

        segments
    }
}

/// One-shot highlighting. A marker set that fails to compile degrades to a
/// single unmarked segment.
pub fn highlight<'a>(text: &'a str, markers: &[&str]) -> Vec<Segment<'a>> {
    match Highlighter::new(markers) {
        Ok(highlighter) => highlighter.segments(text),
        Err(e) => {
            warn!("Highlight markers rejected, rendering plain text: {e}");
            vec![Segment::plain(text)]
        }
    }
}

/// Emphasizes the first exact-case occurrence of `name` in an author list.
///
/// Returns exactly three segments (prefix, name, suffix) when found, otherwise
/// the whole string as one unmarked segment.
pub fn highlight_author<'a>(authors: &'a str, name: &str) -> Vec<Segment<'a>> {
    if name.is_empty() {
        return vec![Segment::plain(authors)];
    }

    match authors.find(name) {
        Some(idx) => {
            let end = idx + name.len();
            vec![
                Segment::plain(&authors[..idx]),
                Segment::mark(&authors[idx..end]),
                Segment::plain(&authors[end..]),
            ]
        }
        None => vec![Segment::plain(authors)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_highlight_single_phrase() {
        let text = "I attended University of Maryland, College Park for research";
        let segments = highlight(text, &["University of Maryland, College Park"]);
        assert_eq!(
            segments,
            vec![
                Segment::plain("I attended "),
                Segment::mark("University of Maryland, College Park"),
                Segment::plain(" for research"),
            ]
        );
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn test_highlight_preserves_original_casing() {
        let text = "Machine Learning and machine learning";
        let segments = highlight(text, &["machine learning"]);
        assert_eq!(
            segments,
            vec![
                Segment::mark("Machine Learning"),
                Segment::plain(" and "),
                Segment::mark("machine learning"),
            ]
        );
    }

    #[test]
    fn test_highlight_no_match_is_single_plain_segment() {
        let segments = highlight("nothing to see", BIO_MARKERS);
        assert_eq!(segments, vec![Segment::plain("nothing to see")]);
    }

    #[test]
    fn test_highlight_empty_marker_set() {
        assert_eq!(highlight("abc", &[]), vec![Segment::plain("abc")]);
        assert_eq!(highlight("abc", &[""]), vec![Segment::plain("abc")]);
    }

    #[test]
    fn test_highlight_empty_text() {
        assert_eq!(highlight("", BIO_MARKERS), vec![Segment::plain("")]);
    }

    #[test]
    fn test_highlight_escapes_regex_metacharacters() {
        let text = "uses C++ (a lot)";
        let segments = highlight(text, &["C++", "(a lot)"]);
        assert_eq!(
            segments,
            vec![
                Segment::plain("uses "),
                Segment::mark("C++"),
                Segment::plain(" "),
                Segment::mark("(a lot)"),
            ]
        );
    }

    #[test]
    fn test_highlight_overlap_leftmost_wins() {
        let text = "deep machine learning";
        let segments = highlight(text, &["machine learning", "deep machine"]);
        assert_eq!(
            segments,
            vec![Segment::mark("deep machine"), Segment::plain(" learning")]
        );
    }

    #[test]
    fn test_highlight_same_start_first_listed_wins() {
        let segments = highlight("machine learning", &["machine", "machine learning"]);
        assert_eq!(
            segments,
            vec![Segment::mark("machine"), Segment::plain(" learning")]
        );
    }

    #[test]
    fn test_highlight_is_deterministic() {
        let text = "computer vision meets precision agriculture";
        assert_eq!(highlight(text, BIO_MARKERS), highlight(text, BIO_MARKERS));
    }

    #[test]
    fn test_highlight_author_found() {
        let segments = highlight_author("Jane Doe, Akhil Kambhatla, John Roe", "Akhil Kambhatla");
        assert_eq!(
            segments,
            vec![
                Segment::plain("Jane Doe, "),
                Segment::mark("Akhil Kambhatla"),
                Segment::plain(", John Roe"),
            ]
        );
    }

    #[test]
    fn test_highlight_author_leading_name_keeps_three_segments() {
        let segments = highlight_author("Akhil Kambhatla, Jane Doe", "Akhil Kambhatla");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::plain(""));
        assert_eq!(segments[1], Segment::mark("Akhil Kambhatla"));
    }

    #[test]
    fn test_highlight_author_absent() {
        assert_eq!(
            highlight_author("No Match Here", "Akhil Kambhatla"),
            vec![Segment::plain("No Match Here")]
        );
    }

    #[test]
    fn test_highlight_author_is_case_sensitive() {
        assert_eq!(
            highlight_author("akhil kambhatla", "Akhil Kambhatla"),
            vec![Segment::plain("akhil kambhatla")]
        );
    }
}
