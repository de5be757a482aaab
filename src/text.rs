//! Text normalization helpers for comment bodies and type names.
//!
//! Comment bodies go through a fixed pipeline before they are rendered:
//! platform line separators are replaced with [`LINE_BREAK_MARKER`], Unicode
//! escapes are decoded, the marker is turned back into `\n`, and stray
//! inline block-tag occurrences are stripped.

use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// Internal line-break marker used while escape processing runs.
pub const LINE_BREAK_MARKER: &str = "__DOCMARK_LINEBREAK__";

static RE_INLINE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(see|param|link|return)[ \t]+.+").unwrap());

static RE_PACKAGE_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z0-9_]+\.").unwrap());

/// Replace `\r\n`, `\r` and `\n` with [`LINE_BREAK_MARKER`].
pub fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", LINE_BREAK_MARKER)
        .replace(['\r', '\n'], LINE_BREAK_MARKER)
}

/// Turn every [`LINE_BREAK_MARKER`] back into `\n`.
pub fn restore_line_breaks(text: &str) -> String {
    text.replace(LINE_BREAK_MARKER, "\n")
}

/// Decode `\uXXXX` escapes (UTF-16 code units) and `\\` into literal text.
///
/// Consecutive escapes forming a surrogate pair decode to one character;
/// unpaired surrogates become U+FFFD. Any other backslash sequence, including
/// a malformed `\u`, is left untouched.
pub fn decode_unicode_escapes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut units: Vec<u16> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' {
            match chars.get(i + 1) {
                Some('\\') => {
                    flush_units(&mut units, &mut output);
                    output.push('\\');
                    i += 2;
                    continue;
                }
                Some('u') => {
                    if let Some(unit) = parse_hex_unit(&chars[i + 2..]) {
                        units.push(unit);
                        i += 6;
                        continue;
                    }
                }
                _ => {}
            }
        }
        flush_units(&mut units, &mut output);
        output.push(chars[i]);
        i += 1;
    }

    flush_units(&mut units, &mut output);
    output
}

/// Encode text so that [`decode_unicode_escapes`] restores it exactly.
///
/// Backslashes are doubled and every character at or above U+0080 becomes
/// one `\uXXXX` escape per UTF-16 code unit.
pub fn encode_unicode_escapes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut buf = [0u16; 2];
    for c in input.chars() {
        if c == '\\' {
            output.push_str("\\\\");
        } else if (c as u32) >= 128 {
            for unit in c.encode_utf16(&mut buf) {
                let _ = write!(output, "\\u{:04x}", unit);
            }
        } else {
            output.push(c);
        }
    }
    output
}

fn parse_hex_unit(chars: &[char]) -> Option<u16> {
    let digits = chars.get(..4)?;
    if !digits.iter().all(char::is_ascii_hexdigit) {
        return None;
    }
    let hex: String = digits.iter().collect();
    u16::from_str_radix(&hex, 16).ok()
}

fn flush_units(units: &mut Vec<u16>, output: &mut String) {
    if units.is_empty() {
        return;
    }
    output.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

/// Remove inline `@see`, `@param`, `@link` and `@return` occurrences up to
/// the end of their line.
///
/// These are rendered from the structured tag list, so any copy left in the
/// body text would be rendered twice.
pub fn strip_inline_tags(text: &str) -> String {
    RE_INLINE_TAG.replace_all(text, "").into_owned()
}

/// Reduce a possibly package-qualified type to its simple form.
///
/// `java.util.List<java.lang.String>` → `List<String>`
pub fn simple_type_name(type_name: &str) -> String {
    RE_PACKAGE_QUALIFIER.replace_all(type_name, "").into_owned()
}

/// Run a comment body through the full normalization pipeline.
pub fn comment_body(body: &str) -> String {
    let normalized = normalize_line_breaks(body);
    let decoded = decode_unicode_escapes(&normalized);
    let restored = restore_line_breaks(&decoded);
    strip_inline_tags(&restored).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_marker_roundtrip() {
        let normalized = normalize_line_breaks("a\r\nb\rc\nd");
        assert!(!normalized.contains('\n'));
        assert!(!normalized.contains('\r'));
        assert_eq!(restore_line_breaks(&normalized), "a\nb\nc\nd");
    }

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode_unicode_escapes(r"caf\u00e9"), "café");
        assert_eq!(decode_unicode_escapes(r"\u3042\u3044"), "あい");
        assert_eq!(decode_unicode_escapes(r"a\\b"), r"a\b");
    }

    #[test]
    fn test_decode_surrogate_pair() {
        assert_eq!(decode_unicode_escapes(r"\ud83d\ude00!"), "😀!");
        assert_eq!(decode_unicode_escapes(r"\ud83d!"), "\u{FFFD}!");
    }

    #[test]
    fn test_decode_leaves_malformed_escapes() {
        assert_eq!(decode_unicode_escapes(r"\u12"), r"\u12");
        assert_eq!(decode_unicode_escapes(r"\uzzzz"), r"\uzzzz");
        assert_eq!(decode_unicode_escapes(r"C:\temp"), r"C:\temp");
        assert_eq!(decode_unicode_escapes("tail\\"), "tail\\");
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode_unicode_escapes("café"), r"caf\u00e9");
        assert_eq!(encode_unicode_escapes("😀"), r"\ud83d\ude00");
        assert_eq!(encode_unicode_escapes(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_escape_roundtrip() {
        let samples = [
            "",
            "plain ASCII text ~!@#$%^&*()_+{}|:\"<>?",
            "Grüße aus Köln",
            "日本語のコメント",
            "emoji 😀 and 𝄞",
            r"literal \u0041 stays literal",
            r"trailing backslash \",
            "mixed \\\\ é \\u 😀",
        ];
        for s in samples {
            assert_eq!(decode_unicode_escapes(&encode_unicode_escapes(s)), s, "{s}");
        }
    }

    #[test]
    fn test_strip_inline_tags() {
        assert_eq!(
            strip_inline_tags("Returns a value.\n@return the value\nMore."),
            "Returns a value.\n\nMore."
        );
        assert_eq!(strip_inline_tags("Mail user@example.com"), "Mail user@example.com");
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("java.lang.String"), "String");
        assert_eq!(
            simple_type_name("java.util.Map<java.lang.String, java.util.List<com.acme.Item>>"),
            "Map<String, List<Item>>"
        );
        assert_eq!(simple_type_name("int"), "int");
        assert_eq!(simple_type_name("Outer.Inner"), "Outer.Inner");
    }

    #[test]
    fn test_comment_body_pipeline() {
        let body = "First line\r\nSecond \\u00e9 line\r\n@see Other\r\n";
        assert_eq!(comment_body(body), "First line\nSecond é line");
    }
}
