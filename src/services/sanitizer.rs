//! Strips lightweight markup artifacts from model-returned free text.
//!
//! The five passes run in a fixed order; nested or overlapping markers
//! (e.g. `***text***`) are a known limitation and are deliberately not
//! handled beyond what the pass order produces.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#{1,6}").expect("header pattern should compile"));
static BOLD_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*").expect("bold pattern should compile"));
static ITALIC_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*").expect("italic pattern should compile"));
static BRACKET_SPANS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("bracket pattern should compile"));
static BACKTICK_SPANS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("backtick pattern should compile"));

pub fn sanitize(text: &str) -> String {
    let text = HEADER_MARKS.replace_all(text, "");
    let text = BOLD_MARKS.replace_all(&text, "");
    let text = ITALIC_MARKS.replace_all(&text, "");
    let text = BRACKET_SPANS.replace_all(&text, "$1");
    let text = BACKTICK_SPANS.replace_all(&text, "$1");
    text.trim().to_string()
}
