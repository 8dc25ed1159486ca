//! Logical field descriptors (spec.md §3): per-variant raw key names for
//! an abstract metadata concept such as "artist". `None` means the format
//! does not carry that field.

use crate::typed_metadata::Variant;

/// One raw key candidate per `Variant`, indexed by `Variant::ordinal()`.
pub type FieldDescriptor = [Option<&'static str>; 6];

const fn descriptor(
    id3v1: Option<&'static str>,
    id3v2: Option<&'static str>,
    flac: Option<&'static str>,
    vorbis: Option<&'static str>,
    ape: Option<&'static str>,
    mp4: Option<&'static str>,
) -> FieldDescriptor {
    // Must stay in sync with Variant::ordinal()'s assignment order.
    [id3v1, id3v2, flac, vorbis, ape, mp4]
}

pub const ARTIST: FieldDescriptor = descriptor(
    Some("artist"),
    Some("TPE1"),
    Some("ARTIST"),
    Some("ARTIST"),
    Some("Artist"),
    Some("\u{00A9}ART"),
);

pub const ALBUM: FieldDescriptor = descriptor(
    Some("album"),
    Some("TALB"),
    Some("ALBUM"),
    Some("ALBUM"),
    Some("Album"),
    Some("\u{00A9}alb"),
);

pub const TITLE: FieldDescriptor = descriptor(
    Some("title"),
    Some("TIT2"),
    Some("TITLE"),
    Some("TITLE"),
    Some("Title"),
    Some("\u{00A9}nam"),
);

pub const DATE: FieldDescriptor = descriptor(
    Some("year"),
    Some("TDRC"),
    Some("DATE"),
    Some("DATE"),
    Some("Year"),
    Some("\u{00A9}day"),
);

pub const GENRE: FieldDescriptor = descriptor(
    Some("genre"),
    Some("TCON"),
    Some("GENRE"),
    Some("GENRE"),
    Some("Genre"),
    Some("\u{00A9}gen"),
);

pub const TRACK_NUMBER: FieldDescriptor = descriptor(
    None,
    Some("TRCK"),
    Some("TRACKNUMBER"),
    Some("TRACKNUMBER"),
    Some("Track"),
    Some("trkn"),
);

pub const DISC_NUMBER: FieldDescriptor = descriptor(
    None,
    Some("TPOS"),
    Some("DISCNUMBER"),
    Some("DISCNUMBER"),
    Some("Disc"),
    Some("disk"),
);

pub const ALBUM_ARTIST: FieldDescriptor = descriptor(
    None,
    Some("TPE2"),
    Some("ALBUMARTIST"),
    Some("ALBUMARTIST"),
    Some("Album Artist"),
    Some("aART"),
);

pub const COMMENT: FieldDescriptor = descriptor(
    Some("comment"),
    Some("COMM"),
    Some("COMMENT"),
    Some("COMMENT"),
    Some("Comment"),
    Some("\u{00A9}cmt"),
);

/// Raw key candidate for `variant` within `field`.
pub fn key_for(field: &FieldDescriptor, variant: Variant) -> Option<&'static str> {
    field[variant.ordinal()]
}
