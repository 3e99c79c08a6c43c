//! Text Normalizer — turns raw decoder output into canonical line-oriented text.
//!
//! Every line break style becomes `\n`, horizontal whitespace runs collapse to a
//! single space, lines are trimmed, and runs of blank lines shrink to a single
//! blank line so that blank-line entry boundaries survive.

/// Normalizes raw extracted text. Pure and total.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n");

    let mut out = String::with_capacity(unified.len());
    let mut blank_run = 0usize;
    let mut wrote_any = false;

    for line in unified.split(is_line_break) {
        let cleaned = clean_line(line);
        if cleaned.is_empty() {
            blank_run += 1;
            continue;
        }
        if wrote_any {
            out.push('\n');
            if blank_run > 0 {
                out.push('\n');
            }
        }
        out.push_str(&cleaned);
        wrote_any = true;
        blank_run = 0;
    }

    out
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Collapses horizontal whitespace, drops control characters, and folds the
/// typographic punctuation that PDF decoders emit into plain ASCII.
fn clean_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;

    for c in line.chars() {
        let c = match c {
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            '\u{2018}' | '\u{2019}' | '\u{201B}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{FFFD}' => ' ',
            other => other,
        };

        if c.is_whitespace() || c.is_control() {
            pending_space = true;
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}
