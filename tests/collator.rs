use std::io::Cursor;
use tagcollate::{
    AllMetadata, Collator, DuplicateTagStrategy, MetadataMap, Prioritization, TypedMetadata,
};

fn u32_le(n: u32) -> [u8; 4] {
    n.to_le_bytes()
}

fn vorbis_comment_block(vendor: &str, comments: &[(&str, &str)]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&u32_le(vendor.len() as u32));
    payload.extend_from_slice(vendor.as_bytes());
    payload.extend_from_slice(&u32_le(comments.len() as u32));
    for (k, v) in comments {
        let field = format!("{}={}", k, v);
        payload.extend_from_slice(&u32_le(field.len() as u32));
        payload.extend_from_slice(field.as_bytes());
    }

    let mut block = Vec::new();
    block.push(0x80 | 4); // last block, vorbis_comment type
    let len = payload.len() as u32;
    block.extend_from_slice(&len.to_be_bytes()[1..4]);
    block.extend_from_slice(&payload);
    block
}

/// End to end: bytes -> FLAC reader -> AllMetadata -> Collator, exercising
/// a file whose only tag block is a FLAC vorbis_comment with duplicated
/// and differently-cased ARTIST entries.
#[test]
fn reads_flac_bytes_and_collates_artist_values() {
    let mut stream = b"fLaC".to_vec();
    stream.extend_from_slice(&vorbis_comment_block(
        "reference libFLAC 1.4.2",
        &[("ARTIST", "Foo"), ("ARTIST", "FOO"), ("ALBUM", "Bar")],
    ));
    let mut cursor = Cursor::new(stream);

    let comments = tagcollate::read_vorbis_comments(&mut cursor)
        .unwrap()
        .expect("stream carries a vorbis_comment block");

    let all = AllMetadata::new(vec![TypedMetadata::Flac(comments.map)]);
    let prioritization = Prioritization::default_order();
    let collator = Collator::new(&all, &prioritization, DuplicateTagStrategy::PrioritizeFirst);

    assert_eq!(collator.artist(), Some("Foo"));
    assert_eq!(collator.artists(), vec!["Foo".to_string()]);
    assert_eq!(collator.album(), Some("Bar"));
}

/// A file carrying both a FLAC block and a trailing ID3v1 block: ID3v1 is
/// last-resort and must not contribute once FLAC already has a value.
#[test]
fn id3v1_is_suppressed_once_a_normal_variant_has_a_value() {
    let mut flac_map = MetadataMap::new();
    flac_map.put("ARTIST", "Primary Artist");

    let mut id3v1_map = MetadataMap::new();
    id3v1_map.put("artist", "Fallback Artist");

    let all = AllMetadata::new(vec![
        TypedMetadata::Flac(flac_map),
        TypedMetadata::Id3v1(id3v1_map),
    ]);
    let prioritization = Prioritization::default_order();
    let collator = Collator::new(&all, &prioritization, DuplicateTagStrategy::PrioritizeFirst);

    assert_eq!(collator.artists(), vec!["Primary Artist".to_string()]);
}

/// With no normal-priority variant present at all, ID3v1 is consulted.
#[test]
fn id3v1_contributes_when_nothing_else_is_present() {
    let mut id3v1_map = MetadataMap::new();
    id3v1_map.put("artist", "Only Source");

    let all = AllMetadata::new(vec![TypedMetadata::Id3v1(id3v1_map)]);
    let prioritization = Prioritization::default_order();
    let collator = Collator::new(&all, &prioritization, DuplicateTagStrategy::PrioritizeFirst);

    assert_eq!(collator.artist(), Some("Only Source"));
    assert_eq!(collator.artists(), vec!["Only Source".to_string()]);
}

/// Windows-1251-mojibake recovery and case folding across two differently
/// encoded tag blocks collapse to a single collated value.
#[test]
fn cross_format_encoding_and_case_noise_collapses_to_one_value() {
    let mut flac_map = MetadataMap::new();
    let mojibake = "\u{00C0}\u{00EF}\u{00EE}\u{00F1}\u{00F2}\u{00F0}\u{00EE}\u{00F4}";
    flac_map.put("ARTIST", mojibake);

    let mut ape_map = MetadataMap::new();
    ape_map.put("Artist", "АПОСТРОФ");

    let all = AllMetadata::new(vec![
        TypedMetadata::Flac(flac_map),
        TypedMetadata::Ape {
            map: ape_map,
            header: Default::default(),
            aux: MetadataMap::new(),
        },
    ]);
    let prioritization = Prioritization::default_order();
    let collator = Collator::new(&all, &prioritization, DuplicateTagStrategy::PrioritizeFirst);

    assert_eq!(collator.artists(), vec!["Апостроф".to_string()]);
}
