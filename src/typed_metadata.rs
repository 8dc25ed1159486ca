use crate::metadata_map::MetadataMap;

/// The closed set of tag-block variants this crate understands. Adding a
/// format means extending this enum, the field-descriptor array shape
/// (`field.rs`), the `Prioritization` default (`prioritization.rs`) and
/// `fieldCountForPrioritization` (`collator.rs`) in lockstep.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    Id3v1,
    Id3v2,
    Flac,
    Vorbis,
    Ape,
    Mp4,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Id3v1,
        Variant::Id3v2,
        Variant::Flac,
        Variant::Vorbis,
        Variant::Ape,
        Variant::Mp4,
    ];

    /// Stable index into per-variant arrays such as `FieldDescriptor`.
    pub fn ordinal(self) -> usize {
        match self {
            Variant::Id3v1 => 0,
            Variant::Id3v2 => 1,
            Variant::Flac => 2,
            Variant::Vorbis => 3,
            Variant::Ape => 4,
            Variant::Mp4 => 5,
        }
    }
}

/// Opaque, format-specific header carried alongside an ID3v2 tag block.
/// The core never inspects these fields; they exist so callers that do
/// care (e.g. a writer) can round-trip them.
#[derive(Debug, Clone, Default)]
pub struct Id3v2Header {
    pub major_version: u8,
    pub revision: u8,
    pub flags: u8,
}

/// Opaque APE tag header/footer fields, carried but not interpreted here.
#[derive(Debug, Clone, Default)]
pub struct ApeHeader {
    pub version: u32,
    pub item_count: u32,
    pub flags: u32,
}

/// A single tag block extracted from a file, tagged with its originating
/// format. The variant set is closed (§3 of the spec); every match over
/// `TypedMetadata` in this crate is exhaustive on purpose.
#[derive(Debug, Clone)]
pub enum TypedMetadata<'a> {
    Id3v1(MetadataMap<'a>),
    Id3v2 {
        map: MetadataMap<'a>,
        header: Id3v2Header,
        /// User-defined text frames (TXXX) and comment/lyric full-text
        /// tables, opaque to the core — format-specific parsers populate
        /// this alongside `map`.
        user_frames: MetadataMap<'a>,
    },
    Flac(MetadataMap<'a>),
    Vorbis(MetadataMap<'a>),
    Ape {
        map: MetadataMap<'a>,
        header: ApeHeader,
        /// Auxiliary comment/lyric full-text table, opaque to the core —
        /// mirrors `Id3v2`'s `user_frames`.
        aux: MetadataMap<'a>,
    },
    Mp4(MetadataMap<'a>),
}

impl<'a> TypedMetadata<'a> {
    pub fn variant(&self) -> Variant {
        match self {
            TypedMetadata::Id3v1(_) => Variant::Id3v1,
            TypedMetadata::Id3v2 { .. } => Variant::Id3v2,
            TypedMetadata::Flac(_) => Variant::Flac,
            TypedMetadata::Vorbis(_) => Variant::Vorbis,
            TypedMetadata::Ape { .. } => Variant::Ape,
            TypedMetadata::Mp4(_) => Variant::Mp4,
        }
    }

    /// Uniform accessor for the block's primary key/value map, regardless
    /// of variant.
    pub fn map(&self) -> &MetadataMap<'a> {
        match self {
            TypedMetadata::Id3v1(m) => m,
            TypedMetadata::Id3v2 { map, .. } => map,
            TypedMetadata::Flac(m) => m,
            TypedMetadata::Vorbis(m) => m,
            TypedMetadata::Ape { map, .. } => map,
            TypedMetadata::Mp4(m) => m,
        }
    }

    /// `fieldCountForPrioritization` (spec.md §4.6): entry count of the
    /// primary map for simple variants, of the inner metadata map for the
    /// variants that additionally carry an auxiliary one.
    pub fn field_count(&self) -> usize {
        self.map().len()
    }
}

/// An ordered sequence of `TypedMetadata` tag blocks extracted from a
/// single file, in file-discovery order. Immutable for the lifetime of any
/// `Collator` borrowing it.
#[derive(Debug, Default, Clone)]
pub struct AllMetadata<'a> {
    tags: Vec<TypedMetadata<'a>>,
}

impl<'a> AllMetadata<'a> {
    pub fn new(tags: Vec<TypedMetadata<'a>>) -> Self {
        AllMetadata { tags }
    }

    pub fn push(&mut self, tag: TypedMetadata<'a>) {
        self.tags.push(tag);
    }

    pub fn tags(&self) -> &[TypedMetadata<'a>] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Indices (in file order) of every tag block of the given variant.
    pub fn indices_of(&self, variant: Variant) -> impl Iterator<Item = usize> + '_ {
        self.tags
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.variant() == variant)
            .map(|(i, _)| i)
    }

    /// Count of tags ignoring duplicates: at most one per variant.
    pub fn distinct_variant_count(&self) -> usize {
        Variant::ALL
            .iter()
            .filter(|v| self.indices_of(**v).next().is_some())
            .count()
    }
}
