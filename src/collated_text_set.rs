use crate::encoding::{could_be_windows1251, is_all_latin1, utf8_to_latin1, windows1251_to_utf8};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// An append-only ordered multiset that behaves as a set modulo a
/// canonicalization relation: trim → optional Windows-1251 recovery →
/// Unicode full case fold → NFC normalize (spec.md §4.3).
///
/// The first accepted pre-canonical form for each canonical class is kept
/// as the **representative** and is never overwritten by a later,
/// canonically-equivalent put.
#[derive(Debug, Default)]
pub struct CollatedTextSet {
    values: Vec<String>,
    seen: HashMap<String, usize>,
}

impl CollatedTextSet {
    pub fn new() -> Self {
        CollatedTextSet {
            values: Vec::new(),
            seen: HashMap::new(),
        }
    }

    /// Trims, canonicalizes and inserts `value` if its canonical form
    /// hasn't been seen before. Empty-after-trim values are ignored.
    pub fn put(&mut self, value: &str) {
        let trimmed = value.trim_matches(|c| c == ' ' || c == '\0');
        if trimmed.is_empty() {
            return;
        }

        let representative = recover_windows1251(trimmed);
        let canonical: String = caseless::default_case_fold_str(&representative)
            .nfc()
            .collect();

        if !self.seen.contains_key(&canonical) {
            let index = self.values.len();
            self.values.push(representative);
            self.seen.insert(canonical, index);
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Step 3 of the put pipeline: if `trimmed` is entirely Latin-1 and its
/// byte-reinterpretation is a plausible Windows-1251 string, decode it;
/// otherwise return the input untouched.
fn recover_windows1251(trimmed: &str) -> String {
    if !is_all_latin1(trimmed) {
        return trimmed.to_string();
    }

    let latin1_bytes = utf8_to_latin1(trimmed);
    if could_be_windows1251(&latin1_bytes) {
        let recovered = windows1251_to_utf8(&latin1_bytes);
        log::debug!("recovered \"{}\" as windows-1251 mojibake -> \"{}\"", trimmed, recovered);
        recovered
    } else {
        trimmed.to_string()
    }
}
