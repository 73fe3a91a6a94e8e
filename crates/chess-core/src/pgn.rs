//! PGN validation utilities — lightweight regex-based checks.

use regex::Regex;

/// Check whether a transcript is a well-formed, safe PGN game.
///
/// Well-formed means one or more `[Key "Value"]` tag pairs followed by
/// movetext that starts with `1. ` and ends in a standard termination
/// marker. Safe means no embedded HTML-ish markup anywhere in the text.
/// Malformed input is simply rejected, never an error.
pub fn is_valid_pgn(pgn: &str) -> bool {
    has_game_structure(pgn) && !contains_markup(pgn)
}

/// Structural grammar: a tag pair section, then movetext running from
/// `1. ` through one of `1-0`, `0-1`, `1/2-1/2` or `*`. Anchored at both
/// ends; `(?s)` lets the movetext span newlines.
fn has_game_structure(pgn: &str) -> bool {
    let game_re = Regex::new(
        r#"(?s)^(\s*\[\w+\s+"[^"]*"\s*\]\s*)+(1\.\s.*?)(1-0|0-1|1/2-1/2|\*)\s*$"#,
    )
    .unwrap();
    game_re.is_match(pgn)
}

/// Reject transcripts carrying markup that could end up rendered in a page.
fn contains_markup(pgn: &str) -> bool {
    let markup_re = Regex::new(r"(?i)<script|<iframe|<img|<a href").unwrap();
    markup_re.is_match(pgn)
}

/// Extract a string value from a PGN header (e.g. White, Event).
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"([^"]*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(pgn)?.get(1)?.as_str().to_string();
    if value.is_empty() { None } else { Some(value) }
}
