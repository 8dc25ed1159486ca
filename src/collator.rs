use crate::collated_text_set::CollatedTextSet;
use crate::field::{self, FieldDescriptor};
use crate::prioritization::{DuplicateTagStrategy, Priority, Prioritization};
use crate::typed_metadata::{AllMetadata, TypedMetadata, Variant};

/// Selects and merges field values across a file's tag blocks using a
/// configurable prioritization and duplicate-tag strategy (spec.md §4.4).
///
/// Borrows `AllMetadata` for its whole lifetime; the permutation it builds
/// at construction time is immutable afterwards.
pub struct Collator<'a, 'p> {
    all: &'a AllMetadata<'a>,
    prioritization: &'p Prioritization,
    tag_indexes_by_priority: Vec<usize>,
}

impl<'a, 'p> Collator<'a, 'p> {
    pub fn new(
        all: &'a AllMetadata<'a>,
        prioritization: &'p Prioritization,
        strategy: DuplicateTagStrategy,
    ) -> Self {
        let tag_indexes_by_priority = build_permutation(all, prioritization, strategy);
        Collator {
            all,
            prioritization,
            tag_indexes_by_priority,
        }
    }

    /// The permutation order tags are consulted in. Exposed mainly so
    /// tests can pin `compareTagsForPrioritization`'s current behavior.
    pub fn tag_indexes_by_priority(&self) -> &[usize] {
        &self.tag_indexes_by_priority
    }

    /// Single-valued: walks the permutation, returning the first value
    /// found for `field`. `None` if exhausted.
    pub fn get_prioritized_value(&self, field: &FieldDescriptor) -> Option<&'a str> {
        for &idx in &self.tag_indexes_by_priority {
            let tag = &self.all.tags()[idx];
            let key = match field::key_for(field, tag.variant()) {
                Some(key) => key,
                None => continue,
            };
            if let Some(value) = tag.map().get_first(key) {
                return Some(value);
            }
        }
        None
    }

    /// Multi-valued and collation-aware: iterates `prioritization.order`
    /// (not the permutation), honoring `last_resort` suppression, and
    /// returns the resulting `CollatedTextSet`'s ordered values.
    pub fn get_values_from_keys(&self, field: &FieldDescriptor) -> Vec<String> {
        let mut set = CollatedTextSet::new();

        for (variant, priority) in self.prioritization.order() {
            if *priority == Priority::LastResort && !set.is_empty() {
                continue;
            }

            let key = match field::key_for(field, *variant) {
                Some(key) => key,
                None => continue,
            };

            for idx in self.all.indices_of(*variant) {
                add_values_to_set(&mut set, &self.all.tags()[idx], *variant, key);
            }
        }

        set.values().to_vec()
    }

    pub fn artist(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::ARTIST)
    }

    pub fn artists(&self) -> Vec<String> {
        self.get_values_from_keys(&field::ARTIST)
    }

    pub fn album(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::ALBUM)
    }

    pub fn albums(&self) -> Vec<String> {
        self.get_values_from_keys(&field::ALBUM)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::TITLE)
    }

    pub fn titles(&self) -> Vec<String> {
        self.get_values_from_keys(&field::TITLE)
    }

    pub fn date(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::DATE)
    }

    pub fn dates(&self) -> Vec<String> {
        self.get_values_from_keys(&field::DATE)
    }

    pub fn genre(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::GENRE)
    }

    pub fn genres(&self) -> Vec<String> {
        self.get_values_from_keys(&field::GENRE)
    }

    pub fn track_number(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::TRACK_NUMBER)
    }

    pub fn disc_number(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::DISC_NUMBER)
    }

    pub fn album_artist(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::ALBUM_ARTIST)
    }

    pub fn album_artists(&self) -> Vec<String> {
        self.get_values_from_keys(&field::ALBUM_ARTIST)
    }

    pub fn comment(&self) -> Option<&'a str> {
        self.get_prioritized_value(&field::COMMENT)
    }

    pub fn comments(&self) -> Vec<String> {
        self.get_values_from_keys(&field::COMMENT)
    }
}

/// `addValuesToSet` (spec.md §4.5): id3v1 contributes only its first value
/// for `key`; every other variant contributes every value.
fn add_values_to_set(set: &mut CollatedTextSet, tag: &TypedMetadata, variant: Variant, key: &str) {
    if variant == Variant::Id3v1 {
        if let Some(value) = tag.map().get_first(key) {
            set.put(value);
        }
    } else {
        for value in tag.map().values(key) {
            set.put(value);
        }
    }
}

/// `compareTagsForPrioritization` (spec.md §4.6): descending field-entry
/// count. `true` iff `a` is strictly "greater" (more fields) than `b`.
fn tag_outranks(all: &AllMetadata, a: usize, b: usize) -> bool {
    all.tags()[a].field_count() > all.tags()[b].field_count()
}

fn build_permutation(
    all: &AllMetadata,
    prioritization: &Prioritization,
    strategy: DuplicateTagStrategy,
) -> Vec<usize> {
    match strategy {
        DuplicateTagStrategy::PrioritizeBest => {
            let mut perm = Vec::with_capacity(all.len());
            for (variant, _) in prioritization.order() {
                let group_start = perm.len();
                for idx in all.indices_of(*variant) {
                    // Stable insertion sort: insert before the first
                    // existing element in this variant's segment that is
                    // strictly outranked by `idx`. Ties fall through and
                    // preserve file order.
                    let mut insert_at = perm.len();
                    for i in group_start..perm.len() {
                        if tag_outranks(all, idx, perm[i]) {
                            insert_at = i;
                            break;
                        }
                    }
                    perm.insert(insert_at, idx);
                }
            }
            perm
        }
        DuplicateTagStrategy::PrioritizeFirst => {
            let mut perm = Vec::with_capacity(all.len());
            for (variant, _) in prioritization.order() {
                perm.extend(all.indices_of(*variant));
            }
            perm
        }
        DuplicateTagStrategy::IgnoreDuplicates => {
            let mut perm = Vec::with_capacity(all.distinct_variant_count());
            for (variant, _) in prioritization.order() {
                if let Some(first) = all.indices_of(*variant).next() {
                    perm.push(first);
                }
            }
            perm
        }
    }
}
