//! HTML markup removal for chemical formulas.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static SUB_SUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?su[bp]>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Convert formula markup to plain text.
///
/// Line breaks become spaces, `<sub>`/`<sup>` keep their content, every
/// other tag is dropped, non-breaking spaces become ordinary spaces and
/// whitespace is collapsed and trimmed. `None` yields an empty string.
///
/// ```
/// use lapidary::normalize::strip_markup;
///
/// assert_eq!(strip_markup(Some("H<sub>2</sub>O")), "H2O");
/// assert_eq!(strip_markup(None), "");
/// ```
pub fn strip_markup(markup: Option<&str>) -> String {
    let Some(markup) = markup else {
        return String::new();
    };

    let text = LINE_BREAK.replace_all(markup, " ");
    let text = SUB_SUP.replace_all(&text, "");
    let text = ANY_TAG.replace_all(&text, "");
    let text = text.replace("&nbsp;", " ").replace('\u{00a0}', " ");

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
