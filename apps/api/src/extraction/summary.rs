//! Resume summary: a labelled paragraph, or failing that the first full
//! sentence in the document.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::sections::is_heading_line;

static SUMMARY_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^[ \t#*•-]*(?:professional\s+summary|career\s+objective|summary|objective|profile|about(?:[ \t]+me)?)\b[ \t]*:?[ \t]*\n?([^\n]+)(?:\n([^\n]{1,100})$)?",
    )
    .expect("summary label pattern is valid")
});

static SENTENCE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([A-Za-z0-9][^\n]*[.!?])[ \t]*$").expect("sentence line pattern is valid")
});

const MIN_CHARS: usize = 20;
const MAX_CHARS: usize = 500;

pub fn extract_summary(text: &str) -> Option<String> {
    let sentence = || SENTENCE_LINE.captures(text)?.get(1).map(|m| m.as_str().to_string());
    bounded(labelled_summary(text)).or_else(|| bounded(sentence()))
}

fn bounded(raw: Option<String>) -> Option<String> {
    let summary = raw?.split_whitespace().collect::<Vec<_>>().join(" ");
    let len = summary.chars().count();
    (len > MIN_CHARS && len < MAX_CHARS).then_some(summary)
}

/// Paragraph after a summary label. A short follow-on line is kept unless it
/// is the next section's heading.
fn labelled_summary(text: &str) -> Option<String> {
    let caps = SUMMARY_LABEL.captures(text)?;
    let mut summary = caps.get(1)?.as_str().to_string();
    if let Some(next) = caps.get(2).filter(|m| !is_heading_line(m.as_str())) {
        summary.push(' ');
        summary.push_str(next.as_str());
    }
    Some(summary)
}
