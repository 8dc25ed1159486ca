//! Reads the vorbis_comment metadata block out of a FLAC stream (spec.md
//! §4.2). Mirrors the shape of a typical FLAC metadata-block walk: a
//! 4-byte block header (last-block flag, block type, 24-bit length)
//! followed by `length` bytes of block-specific payload, repeated until
//! the last-block flag is set.

use crate::error::TagError;
use crate::id3v2_skip::skip_leading_id3v2;
use crate::metadata_map::MetadataMap;
use crate::prelude::*;
use crate::utils::{read_u24_be, read_u32_le, skip, take};
use std::io::{Read, Seek, SeekFrom};

const BLOCK_TYPE_VORBIS_COMMENT: u8 = 4;

/// The vorbis_comment block: the vendor string plus the ordered
/// `key=value` comment list exposed as a `MetadataMap`.
#[derive(Debug, Clone, Default)]
pub struct VorbisComments<'a> {
    pub vendor_string: String,
    pub map: MetadataMap<'a>,
}

/// Reads `reader` as a FLAC stream and returns its vorbis_comment block,
/// if the stream carries one. Tolerates (and skips) a leading ID3v2 tag
/// some taggers mistakenly prepend to FLAC files.
pub fn read_vorbis_comments<R: Read + Seek>(reader: &mut R) -> Result<Option<VorbisComments<'static>>> {
    let mut marker = [0u8; 4];
    reader.read_exact(&mut marker).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            TagError::UnexpectedEndOfStream { needed: 4 }
        } else {
            TagError::Io(e)
        }
    })?;

    if &marker[0..3] == b"ID3" {
        reader.seek(SeekFrom::Start(0))?;
        skip_leading_id3v2(reader)?;
        reader.read_exact(&mut marker).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                TagError::UnexpectedEndOfStream { needed: 4 }
            } else {
                TagError::Io(e)
            }
        })?;
    }

    if &marker != b"fLaC" {
        return Err(TagError::InvalidStreamMarker);
    }

    loop {
        let header = read_u24_be_with_flag(reader)?;
        let (is_last, block_type, length) = header;
        log::trace!("metadata block: type={}, length={}, is_last={}", block_type, length, is_last);

        if block_type == BLOCK_TYPE_VORBIS_COMMENT {
            if length < 8 {
                return Err(TagError::MalformedBlock(
                    "vorbis_comment block shorter than its mandatory vendor-length/comment-count fields",
                ));
            }
            let payload = take(reader, length as usize)?;
            let comments = parse_vorbis_comment_payload(&payload)?;
            log::debug!("vorbis_comment: vendor={:?}, {} field(s)", comments.vendor_string, comments.map.len());
            return Ok(Some(comments));
        }

        skip(reader, length as usize)?;

        if is_last {
            return Ok(None);
        }
    }
}

/// Reads the 4-byte metadata block header: bit 7 of the first byte is the
/// last-block flag, the low 7 bits are the block type, and the remaining
/// 3 bytes are the payload length, big-endian.
fn read_u24_be_with_flag<R: Read>(reader: &mut R) -> Result<(bool, u8, u32)> {
    let first = crate::utils::read_u8(reader)?;
    let is_last = first & 0x80 != 0;
    let block_type = first & 0x7F;
    let length = read_u24_be(reader)?;
    Ok((is_last, block_type, length))
}

/// Parses a vorbis_comment payload: 32-bit LE vendor length + vendor
/// string, 32-bit LE comment count, then that many (32-bit LE length,
/// UTF-8 string) fields, each split on its first `=` into key/value.
fn parse_vorbis_comment_payload(payload: &[u8]) -> Result<VorbisComments<'static>> {
    let mut cursor = std::io::Cursor::new(payload);

    let vendor_len = read_u32_le(&mut cursor)? as usize;
    let vendor_bytes = take(&mut cursor, vendor_len)?;
    let vendor_string = String::from_utf8(vendor_bytes)
        .map_err(|_| TagError::EncodingFailure("vorbis_comment vendor string is not valid UTF-8"))?;

    let comment_count = read_u32_le(&mut cursor)?;
    let mut map = MetadataMap::new();

    for _ in 0..comment_count {
        let field_len = read_u32_le(&mut cursor)? as usize;
        let field_bytes = take(&mut cursor, field_len)?;
        let field = String::from_utf8(field_bytes)
            .map_err(|_| TagError::EncodingFailure("vorbis comment field is not valid UTF-8"))?;

        // A field with no `=` still gets appended, with an empty value —
        // the field name is not required to carry one (spec edge case).
        match field.find('=') {
            Some(eq) => {
                let (key, rest) = field.split_at(eq);
                let value = &rest[1..];
                map.put(key.to_string(), value.to_string());
            }
            None => {
                map.put(field, String::new());
            }
        }
    }

    Ok(VorbisComments { vendor_string, map })
}
