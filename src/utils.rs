use crate::error::TagError;
use crate::prelude::*;
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Read;

fn eof_to_tag_error(needed: usize) -> impl FnOnce(std::io::Error) -> TagError {
    move |e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            TagError::UnexpectedEndOfStream { needed }
        } else {
            TagError::Io(e)
        }
    }
}

/// Reads exactly `len` bytes, translating a short read into
/// `TagError::UnexpectedEndOfStream` instead of std::io's generic
/// `UnexpectedEof`.
pub(crate) fn take<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).map_err(eof_to_tag_error(len))?;
    Ok(buf)
}

pub(crate) fn skip<R: Read>(reader: &mut R, len: usize) -> Result<()> {
    take(reader, len).map(|_| ())
}

pub(crate) fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    reader.read_u8().map_err(eof_to_tag_error(1))
}

pub(crate) fn read_u24_be<R: Read>(reader: &mut R) -> Result<u32> {
    reader.read_u24::<BigEndian>().map_err(eof_to_tag_error(3))
}

pub(crate) fn read_u32_le<R: Read>(reader: &mut R) -> Result<u32> {
    reader.read_u32::<LittleEndian>().map_err(eof_to_tag_error(4))
}

pub(crate) fn read_u32_be<R: Read>(reader: &mut R) -> Result<u32> {
    reader.read_u32::<BigEndian>().map_err(eof_to_tag_error(4))
}
