use std::borrow::Cow;

use encoding_rs::{mem, UTF_8};

/// Characters stripped from the normalized column wherever they occur
pub const INVISIBLE_CHARS: [char; 2] = ['\u{200B}', '\u{FEFF}'];

/// Undo UTF-8 bytes that were decoded as Latin-1, e.g. `"Ã©"` -> `"é"`.
///
/// The value is mapped back to one byte per character and the bytes are
/// re-read as UTF-8. When a character does not fit in one byte, or the
/// bytes are not valid UTF-8, the input is returned untouched.
pub fn repair_mojibake(value: &str) -> Cow<'_, str> {
    if !mem::is_str_latin1(value) {
        return Cow::Borrowed(value);
    }

    let bytes = mem::encode_latin1_lossy(value);
    match UTF_8.decode_without_bom_handling_and_without_replacement(&bytes) {
        Some(decoded) => Cow::Owned(decoded.into_owned()),
        None => Cow::Borrowed(value),
    }
}

/// Strip zero-width spaces and byte-order marks, then trim whitespace
pub fn normalize_text(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| !INVISIBLE_CHARS.contains(c)).collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simulate reading UTF-8 bytes with a Latin-1 decoder
    fn garble(original: &str) -> String {
        mem::decode_latin1(original.as_bytes()).into_owned()
    }

    #[test]
    fn test_repair_recovers_chinese() {
        let garbled = garble("序号");
        assert_ne!(garbled, "序号");
        assert_eq!(repair_mojibake(&garbled), "序号");
    }

    #[test]
    fn test_repair_recovers_accents() {
        assert_eq!(repair_mojibake("cafÃ©"), "café");
        assert_eq!(repair_mojibake(&garble("naïve — “quoted”")), "naïve — “quoted”");
    }

    #[test]
    fn test_repair_keeps_ascii() {
        assert_eq!(repair_mojibake("plain ascii 123"), "plain ascii 123");
    }

    #[test]
    fn test_repair_keeps_correct_multibyte_text() {
        assert!(matches!(repair_mojibake("序号"), Cow::Borrowed("序号")));
        assert!(matches!(repair_mojibake("emoji 😀"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_repair_keeps_genuine_latin1() {
        // 'é' alone is 0xE9, which is not valid UTF-8
        assert!(matches!(repair_mojibake("café"), Cow::Borrowed("café")));
    }

    #[test]
    fn test_repair_is_stable_on_repaired_text() {
        let once = repair_mojibake(&garble("评论内容")).into_owned();
        assert_eq!(repair_mojibake(&once), once);
    }

    #[test]
    fn test_normalize_strips_invisible_and_trims() {
        assert_eq!(normalize_text("  \u{FEFF}hello\u{200B} world \n"), "hello world");
        assert_eq!(normalize_text("\u{200B}"), "");
        assert_eq!(normalize_text("no change"), "no change");
    }

    #[test]
    fn test_normalize_trims_after_stripping() {
        assert_eq!(normalize_text("\u{200B} padded \u{200B}"), "padded");
    }
}
