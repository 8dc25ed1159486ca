use crate::typed_metadata::Variant;

/// Per-variant priority level. `LastResort` tags only contribute to
/// `getValuesFromKeys` when no `Normal` variant has contributed anything
/// for the field under query (spec.md §4.5).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Priority {
    Normal,
    LastResort,
}

/// Variant consultation order plus per-variant priority.
#[derive(Debug, Clone)]
pub struct Prioritization {
    order: Vec<(Variant, Priority)>,
}

impl Prioritization {
    pub fn new(order: Vec<(Variant, Priority)>) -> Self {
        Prioritization { order }
    }

    /// `mp4, flac, vorbis, id3v2, ape, id3v1`; `id3v1` is `LastResort`.
    pub fn default_order() -> Self {
        Prioritization::new(vec![
            (Variant::Mp4, Priority::Normal),
            (Variant::Flac, Priority::Normal),
            (Variant::Vorbis, Priority::Normal),
            (Variant::Id3v2, Priority::Normal),
            (Variant::Ape, Priority::Normal),
            (Variant::Id3v1, Priority::LastResort),
        ])
    }

    pub fn order(&self) -> &[(Variant, Priority)] {
        &self.order
    }
}

impl Default for Prioritization {
    fn default() -> Self {
        Prioritization::default_order()
    }
}

/// How the Collator handles multiple tag blocks of the same variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DuplicateTagStrategy {
    /// Within a variant group, order tags by descending field count
    /// (`compareTagsForPrioritization`), ties preserving file order.
    PrioritizeBest,
    /// Within a variant group, keep file order as-is.
    PrioritizeFirst,
    /// Only the first (file-order) tag of each variant is visible.
    IgnoreDuplicates,
}
