//! Unifies FLAC/Vorbis, ID3v1/v2, APE and MP4 metadata behind one set of
//! logical fields (artist, album, title, ...), resolving duplicates and
//! cross-format encoding/casing noise into a single collated view.

mod collated_text_set;
mod collator;
mod encoding;
mod error;
mod field;
mod flac;
mod id3v2_skip;
mod metadata_map;
mod prelude;
mod prioritization;
mod typed_metadata;
mod utils;

pub use collated_text_set::CollatedTextSet;
pub use collator::Collator;
pub use error::TagError;
pub use field::{
    FieldDescriptor, ALBUM, ALBUM_ARTIST, ARTIST, COMMENT, DATE, DISC_NUMBER, GENRE, TITLE,
    TRACK_NUMBER,
};
pub use flac::{read_vorbis_comments, VorbisComments};
pub use metadata_map::MetadataMap;
pub use prelude::Result;
pub use prioritization::{DuplicateTagStrategy, Priority, Prioritization};
pub use typed_metadata::{AllMetadata, ApeHeader, Id3v2Header, TypedMetadata, Variant};
