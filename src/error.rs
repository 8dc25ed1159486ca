use thiserror::Error;

/// Failure modes for the FLAC reader, the ID3v2 skip collaborator and the
/// collator's own allocation/encoding paths.
#[derive(Error, Debug)]
pub enum TagError {
    /// The FLAC signature (`fLaC`) was absent at the expected stream position.
    #[error("invalid stream marker: expected `fLaC`")]
    InvalidStreamMarker,

    /// The reader returned fewer bytes than a declared length demanded.
    #[error("unexpected end of stream: needed {needed} more byte(s)")]
    UnexpectedEndOfStream { needed: usize },

    /// A block's declared length is internally inconsistent, e.g. a
    /// vorbis_comment block shorter than its own vendor-length prefix.
    #[error("malformed block: {0}")]
    MalformedBlock(&'static str),

    /// Unicode normalization rejected input as ill-formed UTF-8 after
    /// encoding recovery.
    #[error("encoding failure: {0}")]
    EncodingFailure(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
