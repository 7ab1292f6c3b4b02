use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::utils::error::TocError;

lazy_static! {
    /// 0-3 leading spaces, 1-6 hashes, one literal space, then the title
    static ref HASH_HEADING_REGEX: Regex = Regex::new(r"^ {0,3}#{1,6} .*$").unwrap();

    /// Setext-style underlines: `=` marks a top-level heading, `-` one level down
    static ref EQUALS_UNDERLINE_REGEX: Regex = Regex::new(r"^ {0,3}=+ *$").unwrap();
    static ref DASH_UNDERLINE_REGEX: Regex = Regex::new(r"^ {0,3}-+ *$").unwrap();

    /// HTML comment delimiters; the last one found on a line wins
    static ref COMMENT_TOKEN_REGEX: Regex = Regex::new(r"(<!--)|(-->)").unwrap();
}

/// A single heading parsed from document content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Zero-based depth (`#` = 0, `######` = 5)
    pub depth: usize,
    /// Heading text, trimmed of surrounding whitespace
    pub text: String,
}

/// How one line classifies against the heading syntaxes
enum LineMatch {
    HashHeading(HeadingEntry),
    UnderlineHeading(HeadingEntry),
    CommentToggle(bool),
    NoMatch,
}

/// Classify a single line.
///
/// The hash check runs first, so outside a comment block a heading line
/// containing a comment delimiter is still a heading. Underline matching
/// consumes the previous plain line as the title and is not suppressed by
/// comment state; only hash headings are.
fn classify_line(
    line: &str,
    inside_comment: bool,
    previous: Option<&str>,
) -> Result<LineMatch, TocError> {
    if !inside_comment && HASH_HEADING_REGEX.is_match(line) {
        return Ok(LineMatch::HashHeading(parse_hash_heading(line)?));
    }

    if let Some(last) = COMMENT_TOKEN_REGEX.find_iter(line).last() {
        return Ok(LineMatch::CommentToggle(last.as_str() == "<!--"));
    }

    if let Some(prev) = previous {
        if EQUALS_UNDERLINE_REGEX.is_match(line) {
            return Ok(LineMatch::UnderlineHeading(HeadingEntry {
                depth: 0,
                text: prev.trim().to_string(),
            }));
        }
        if DASH_UNDERLINE_REGEX.is_match(line) {
            return Ok(LineMatch::UnderlineHeading(HeadingEntry {
                depth: 1,
                text: prev.trim().to_string(),
            }));
        }
    }

    Ok(LineMatch::NoMatch)
}

/// Depth and title from a line already known to match the hash pattern
fn parse_hash_heading(line: &str) -> Result<HeadingEntry, TocError> {
    let trimmed = line.trim();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if hashes == 0 {
        return Err(TocError::MalformedHeading(line.to_string()));
    }

    Ok(HeadingEntry {
        depth: hashes - 1,
        text: trimmed[hashes..].trim().to_string(),
    })
}

/// Scanner state carried across the document
struct ScanState {
    /// Inside an HTML comment block; suppresses hash heading detection
    inside_comment: bool,
    /// The last plain line, kept as a candidate title for an underline
    previous: Option<String>,
}

/// Extract headings from markdown content, in document order
pub fn extract_headings(content: &str) -> Result<Vec<HeadingEntry>, TocError> {
    let mut state = ScanState {
        inside_comment: false,
        previous: None,
    };
    let mut headings = Vec::new();

    for line in content.lines() {
        match classify_line(line, state.inside_comment, state.previous.as_deref())? {
            LineMatch::HashHeading(entry) | LineMatch::UnderlineHeading(entry) => {
                headings.push(entry);
                state.previous = None;
            }
            LineMatch::CommentToggle(flag) => state.inside_comment = flag,
            LineMatch::NoMatch => state.previous = Some(line.to_string()),
        }
    }

    Ok(headings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(depth: usize, text: &str) -> HeadingEntry {
        HeadingEntry {
            depth,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_extract_hash_headings() {
        let content = "# Top\n\nText here.\n\n## Middle\n\n### Deep\n";
        let headings = extract_headings(content).unwrap();

        assert_eq!(
            headings,
            vec![entry(0, "Top"), entry(1, "Middle"), entry(2, "Deep")]
        );
    }

    #[test]
    fn test_hash_heading_spacing() {
        // Up to three leading spaces are fine, four are not
        let headings = extract_headings("   # Indented\n    # Too far\n").unwrap();
        assert_eq!(headings, vec![entry(0, "Indented")]);
    }

    #[test]
    fn test_hash_heading_requires_space_and_at_most_six_hashes() {
        let headings = extract_headings("#NoSpace\n####### Seven\n###### Six\n").unwrap();
        assert_eq!(headings, vec![entry(5, "Six")]);
    }

    #[test]
    fn test_hash_heading_keeps_trailing_hashes() {
        // Closing hashes are part of the title, not syntax
        let headings = extract_headings("# Title #\n").unwrap();
        assert_eq!(headings, vec![entry(0, "Title #")]);
    }

    #[test]
    fn test_underline_headings() {
        let headings = extract_headings("Title\n=====\n").unwrap();
        assert_eq!(headings, vec![entry(0, "Title")]);

        let headings = extract_headings("Title\n-----\n").unwrap();
        assert_eq!(headings, vec![entry(1, "Title")]);
    }

    #[test]
    fn test_underline_requires_previous_line() {
        let headings = extract_headings("=====\nText\n").unwrap();
        assert!(headings.is_empty());
    }

    #[test]
    fn test_underline_consumes_previous_line() {
        // The title is used up by the first underline; a second one has
        // no candidate left and becomes the next candidate itself
        let headings = extract_headings("Title\n=====\n-----\n").unwrap();
        assert_eq!(headings, vec![entry(0, "Title")]);
    }

    #[test]
    fn test_underline_title_is_trimmed() {
        let headings = extract_headings("  Padded title  \n===\n").unwrap();
        assert_eq!(headings, vec![entry(0, "Padded title")]);
    }

    #[test]
    fn test_comment_suppresses_hash_headings() {
        let content = "<!--\n# Hidden\n-->\n# Visible\n";
        let headings = extract_headings(content).unwrap();
        assert_eq!(headings, vec![entry(0, "Visible")]);
    }

    #[test]
    fn test_last_comment_delimiter_wins() {
        // Open and close on one line: the later token decides the state
        let headings = extract_headings("<!-- -->\n# Kept\n").unwrap();
        assert_eq!(headings, vec![entry(0, "Kept")]);

        let headings = extract_headings("--> <!--\n# Swallowed\n").unwrap();
        assert!(headings.is_empty());
    }

    #[test]
    fn test_heading_with_comment_token_stays_a_heading() {
        // Outside a comment the hash check runs first, so the delimiter
        // ends up in the title and the comment state never flips
        let headings = extract_headings("# Title <!--\n# Next\n").unwrap();
        assert_eq!(headings, vec![entry(0, "Title <!--"), entry(0, "Next")]);
    }

    #[test]
    fn test_comment_line_does_not_become_underline_candidate() {
        let headings = extract_headings("<!-- note -->\n=====\n").unwrap();
        assert!(headings.is_empty());
    }

    #[test]
    fn test_malformed_heading_error() {
        let err = parse_hash_heading("no hashes here").unwrap_err();
        assert!(matches!(err, TocError::MalformedHeading(_)));
    }
}
