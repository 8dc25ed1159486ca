//! Windows-1251-over-Latin-1 recovery helpers (spec.md §6 "encoding
//! helpers"). Grounded in `anni-common`'s use of `encoding_rs` for
//! mis-decoded-tag recovery, narrowed here to the specific Latin-1 ↔
//! Windows-1251 reinterpretation `CollatedTextSet` needs.

/// True iff every code point in `s` is representable in a single Latin-1
/// byte (≤ U+00FF).
pub fn is_all_latin1(s: &str) -> bool {
    s.chars().all(|c| (c as u32) <= 0xFF)
}

/// Reduces each ≤U+00FF code point of `s` to a single byte. Caller must
/// have already checked `is_all_latin1(s)`.
pub fn utf8_to_latin1(s: &str) -> Vec<u8> {
    s.chars().map(|c| (c as u32) as u8).collect()
}

/// Decodes `bytes` as Windows-1251.
pub fn windows1251_to_utf8(bytes: &[u8]) -> String {
    encoding_rs::WINDOWS_1251.decode(bytes).0.into_owned()
}

/// Heuristic: does `latin1_bytes`, read as Windows-1251, decode to text
/// more plausible than the Latin-1 reading it was mis-decoded from?
///
/// Contract (spec.md §6): false positives are acceptable only for strings
/// containing at least one byte in 0x80-0xFF that is assigned in
/// Windows-1251. We therefore require: (a) at least one high byte present,
/// (b) every byte maps to an assigned Windows-1251 code point, and (c) the
/// decoded text contains at least one Cyrillic letter — without (c), any
/// accented Latin-1 string whose bytes happen to also be valid Windows-1251
/// would be falsely recovered.
pub fn could_be_windows1251(latin1_bytes: &[u8]) -> bool {
    if !latin1_bytes.iter().any(|&b| b >= 0x80) {
        return false;
    }

    let (decoded, _encoding, had_errors) = encoding_rs::WINDOWS_1251.decode(latin1_bytes);
    if had_errors {
        return false;
    }

    decoded.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_plausible_cyrillic_mojibake() {
        // "Апостроф" mis-decoded as Latin-1 from its Windows-1251 bytes.
        let mojibake = "\u{00C0}\u{00EF}\u{00EE}\u{00F1}\u{00F2}\u{00F0}\u{00EE}\u{00F4}";
        assert!(is_all_latin1(mojibake));
        let bytes = utf8_to_latin1(mojibake);
        assert!(could_be_windows1251(&bytes));
        assert_eq!(windows1251_to_utf8(&bytes), "Апостроф");
    }

    #[test]
    fn plain_ascii_is_never_recovered() {
        assert!(!could_be_windows1251(b"Hello World"));
    }

    #[test]
    fn high_byte_without_cyrillic_result_is_not_recovered() {
        // U+00A0 (non-breaking space) has a high Latin-1 byte (0xA0), but
        // Windows-1251 maps that same byte back to U+00A0 — no Cyrillic
        // letter appears in the decode, so recovery must not fire.
        let bytes = utf8_to_latin1("price\u{00A0}tag");
        assert!(!could_be_windows1251(&bytes));
    }
}
