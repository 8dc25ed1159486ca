//! Skips a leading ID3v2 tag so a FLAC stream can be located behind it
//! (spec.md §6). FLAC files are not supposed to carry ID3v2 tags, but
//! taggers that don't know better prepend one anyway; skipping it rather
//! than rejecting the file keeps real-world files readable.

use crate::error::TagError;
use crate::prelude::*;
use crate::utils::{read_u8, skip};
use std::io::Read;

/// If `reader` is positioned at the very start of the stream and the next
/// bytes are an ID3v2 header, consumes the whole tag (header + payload)
/// and leaves `reader` positioned right after it. Returns `Ok(true)` if a
/// tag was skipped, `Ok(false)` if the stream didn't start with one.
pub(crate) fn skip_leading_id3v2<R: Read>(reader: &mut R) -> Result<bool> {
    let mut identifier = [0u8; 3];
    reader.read_exact(&mut identifier).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            TagError::UnexpectedEndOfStream { needed: 3 }
        } else {
            TagError::Io(e)
        }
    })?;
    if &identifier != b"ID3" {
        return Err(TagError::MalformedBlock("stream does not start with ID3v2 or fLaC"));
    }

    let _major_version = read_u8(reader)?;
    let _revision = read_u8(reader)?;
    let _flags = read_u8(reader)?;

    let mut size_bytes = [0u8; 4];
    reader.read_exact(&mut size_bytes).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            TagError::UnexpectedEndOfStream { needed: 4 }
        } else {
            TagError::Io(e)
        }
    })?;
    let size = decode_synchsafe(size_bytes)?;

    skip(reader, size as usize)?;
    Ok(true)
}

/// Decodes a 4-byte synchsafe integer: each byte contributes its low 7
/// bits, high bit always zero. Rejects a set high bit as malformed.
fn decode_synchsafe(bytes: [u8; 4]) -> Result<u32> {
    let mut value: u32 = 0;
    for byte in bytes {
        if byte & 0x80 != 0 {
            return Err(TagError::MalformedBlock("ID3v2 size byte has high bit set"));
        }
        value = (value << 7) | (byte as u32);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_a_well_formed_tag() {
        // header (10 bytes) + 5 bytes of payload, then trailing marker.
        let mut bytes = vec![b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 5];
        bytes.extend_from_slice(&[0u8; 5]);
        bytes.extend_from_slice(b"fLaC");
        let mut cursor = Cursor::new(bytes);

        assert!(skip_leading_id3v2(&mut cursor).unwrap());
        let mut rest = [0u8; 4];
        cursor.read_exact(&mut rest).unwrap();
        assert_eq!(&rest, b"fLaC");
    }

    #[test]
    fn decodes_multi_byte_synchsafe_size() {
        // 0x01 0x00 0x00 0x00 -> 1 << 21 = 2097152
        assert_eq!(decode_synchsafe([0x01, 0x00, 0x00, 0x00]).unwrap(), 1 << 21);
    }

    #[test]
    fn rejects_non_id3_identifier() {
        let mut cursor = Cursor::new(b"fLaC".to_vec());
        assert!(skip_leading_id3v2(&mut cursor).is_err());
    }
}
