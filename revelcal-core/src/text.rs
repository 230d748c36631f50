//! Per-consumer text encoding.
//!
//! Each consumer has its own rules. ICS text values get RFC 5545 escaping
//! and line folding, Google links get a bare space-to-plus substitution and
//! Yahoo links get form-urlencoding.

use url::form_urlencoded;

/// Maximum content line length in octets, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Escape a TEXT property value (RFC 5545 §3.3.11).
///
/// CRLF, lone CR and LF all become a single `\n`.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }

    result
}

/// Reverse [`escape_text`]. Unrecognized escapes keep their backslash.
pub fn unescape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some(',' | ';' | '\\') => result.extend(chars.next()),
            Some('n' | 'N') => {
                result.push('\n');
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}

/// Fold a content line to at most 75 octets per physical line and terminate
/// it with CRLF. Continuation lines start with a single space, which counts
/// toward their 75 octets. UTF-8 sequences are never split.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS + 1) * 3);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > budget {
            result.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        result.push(c);
        used += width;
    }

    result.push_str("\r\n");
    result
}

/// Google Calendar policy: replace literal spaces with `+`, nothing else.
pub fn plus_for_spaces(s: &str) -> String {
    s.replace(' ', "+")
}

/// Yahoo Calendar policy: standard query-component escaping.
pub fn query_escape(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_leaves_plain_text_alone() {
        assert_eq!(escape_text("Fall Foliage Tour"), "Fall Foliage Tour");
    }

    #[test]
    fn escape_text_special_characters() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn escape_text_collapses_crlf() {
        assert_eq!(escape_text("one\r\ntwo"), "one\\ntwo");
    }

    #[test]
    fn escape_text_treats_lone_cr_as_line_break() {
        assert_eq!(escape_text("Line1\rLine2"), "Line1\\nLine2");
        assert_eq!(escape_text("a\r\rb\r"), "a\\n\\nb\\n");
    }

    #[test]
    fn unescape_reverses_escape() {
        let raw = "Bring: boots, poles; snacks\\water\nMeet at 7";
        assert_eq!(unescape_text(&escape_text(raw)), raw);
        assert_eq!(unescape_text("C:\\temp"), "C:\\temp");
    }

    #[test]
    fn fold_short_line_is_untouched() {
        assert_eq!(fold_line("SUMMARY:Short"), "SUMMARY:Short\r\n");
        let exact = "X".repeat(75);
        assert_eq!(fold_line(&exact), format!("{exact}\r\n"));
    }

    #[test]
    fn fold_long_line_respects_octet_limit() {
        let line = format!("DESCRIPTION:{}", "x".repeat(200));
        let folded = fold_line(&line);

        for physical in folded.split("\r\n").filter(|l| !l.is_empty()) {
            assert!(physical.len() <= 75, "too long: {physical:?}");
        }
        assert!(folded.lines().skip(1).all(|l| l.starts_with(' ')));
        assert_eq!(folded.replace("\r\n ", "").trim_end_matches("\r\n"), line);
    }

    #[test]
    fn fold_does_not_split_multibyte_characters() {
        let line = format!("{}日本語", "A".repeat(73));
        let folded = fold_line(&line);

        assert_eq!(folded, format!("{}\r\n 日本語\r\n", "A".repeat(73)));
    }

    #[test]
    fn google_and_yahoo_policies_differ() {
        let title = "Rock & Roll, Live";
        assert_eq!(plus_for_spaces(title), "Rock+&+Roll,+Live");
        assert_eq!(query_escape(title), "Rock+%26+Roll%2C+Live");
    }

    #[test]
    fn query_escape_encodes_url_delimiters() {
        assert_eq!(
            query_escape("For details, visit: http://x.com/trip/a"),
            "For+details%2C+visit%3A+http%3A%2F%2Fx.com%2Ftrip%2Fa"
        );
    }
}
