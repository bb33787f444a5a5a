use once_cell::sync::Lazy;
use regex::Regex;

// A trailing " (...)" with no closing paren inside it.
static CROSSLIST_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r" \([^)]*\)$").unwrap());

/// Remove the cross-listing annotation from the end of a title, if present.
///
/// `"Programming Methodology (CS 106A)"` becomes `"Programming Methodology"`.
/// Titles without a trailing parenthetical are returned unchanged.
pub fn strip_crosslist_suffix(title: &str) -> &str {
    match CROSSLIST_SUFFIX.find(title) {
        Some(m) => &title[..m.start()],
        None => title,
    }
}
