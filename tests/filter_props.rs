//! Inverse-filter properties.
//!
//! Each predictor unfilter must be the exact inverse of its encode-time
//! filter. The forward filters live here as test oracles: a plane run
//! through `forward filter -> raw chunk -> decode` must come back
//! byte-identical for every filter mode and any input.

use alphadec::alpha::{header_byte, AlphaFilter, CompressionMethod};
use alphadec::lossless::UnsupportedBackend;
use alphadec::AlphaDecoder;
use proptest::prelude::*;

fn clamp_to_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Encode-time horizontal filter: delta from the byte to the left, seeded
/// from the previous row's first byte.
fn forward_horizontal(prev: Option<&[u8]>, row: &[u8]) -> Vec<u8> {
    let seed = prev.map(|p| p[0]).unwrap_or(0);
    row.iter()
        .enumerate()
        .map(|(i, &b)| {
            let left = if i == 0 { seed } else { row[i - 1] };
            b.wrapping_sub(left)
        })
        .collect()
}

/// Encode-time vertical filter: delta from the byte above.
fn forward_vertical(prev: Option<&[u8]>, row: &[u8]) -> Vec<u8> {
    match prev {
        None => forward_horizontal(None, row),
        Some(prev) => row
            .iter()
            .zip(prev)
            .map(|(&b, &above)| b.wrapping_sub(above))
            .collect(),
    }
}

/// Encode-time gradient filter: delta from clamp(left + top - top_left).
fn forward_gradient(prev: Option<&[u8]>, row: &[u8]) -> Vec<u8> {
    let prev = match prev {
        None => return forward_horizontal(None, row),
        Some(prev) => prev,
    };
    row.iter()
        .enumerate()
        .map(|(i, &b)| {
            let left = if i == 0 { prev[0] } else { row[i - 1] };
            let top = prev[i];
            let top_left = if i == 0 { prev[0] } else { prev[i - 1] };
            let predicted = clamp_to_u8(left as i32 + top as i32 - top_left as i32);
            b.wrapping_sub(predicted)
        })
        .collect()
}

/// Filter a whole plane the way an encoder would, row by row against the
/// original (unfiltered) previous row.
fn forward_filter_plane(filter: AlphaFilter, width: usize, plane: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(plane.len());
    let mut prev: Option<&[u8]> = None;
    for row in plane.chunks_exact(width) {
        let filtered = match filter {
            AlphaFilter::None => row.to_vec(),
            AlphaFilter::Horizontal => forward_horizontal(prev, row),
            AlphaFilter::Vertical => forward_vertical(prev, row),
            AlphaFilter::Gradient => forward_gradient(prev, row),
        };
        out.extend_from_slice(&filtered);
        prev = Some(row);
    }
    out
}

fn decode_raw(width: u32, height: u32, filter: AlphaFilter, payload: &[u8]) -> Vec<u8> {
    let mut chunk = vec![header_byte(CompressionMethod::NoCompression, filter)];
    chunk.extend_from_slice(payload);
    AlphaDecoder::new(width, height, &chunk, UnsupportedBackend)
        .expect("parse chunk")
        .decode()
        .expect("decode chunk")
}

fn roundtrip(filter: AlphaFilter, width: usize, plane: &[u8]) -> Vec<u8> {
    let height = plane.len() / width;
    let filtered = forward_filter_plane(filter, width, plane);
    decode_raw(width as u32, height as u32, filter, &filtered)
}

// Deterministic edge rows called out by the format: all-zero and all-255.

#[test]
fn test_horizontal_roundtrip_all_zero_row() {
    let plane = vec![0u8; 32];
    assert_eq!(roundtrip(AlphaFilter::Horizontal, 32, &plane), plane);
}

#[test]
fn test_horizontal_roundtrip_all_255_row() {
    let plane = vec![255u8; 32];
    assert_eq!(roundtrip(AlphaFilter::Horizontal, 32, &plane), plane);
}

#[test]
fn test_gradient_roundtrip_extreme_steps() {
    // Alternating 0/255 exercises both clamp branches of the predictor.
    let plane: Vec<u8> = (0..48).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
    assert_eq!(roundtrip(AlphaFilter::Gradient, 8, &plane), plane);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_horizontal_unfilter_inverts_filter(
        width in 1usize..32,
        rows in proptest::collection::vec(any::<u8>(), 1..1024),
    ) {
        let width = width.min(rows.len());
        let height = rows.len() / width;
        let plane = &rows[..width * height];
        prop_assert_eq!(roundtrip(AlphaFilter::Horizontal, width, plane), plane);
    }

    #[test]
    fn prop_vertical_unfilter_inverts_filter(
        width in 1usize..32,
        rows in proptest::collection::vec(any::<u8>(), 1..1024),
    ) {
        let width = width.min(rows.len());
        let height = rows.len() / width;
        let plane = &rows[..width * height];
        prop_assert_eq!(roundtrip(AlphaFilter::Vertical, width, plane), plane);
    }

    #[test]
    fn prop_gradient_unfilter_inverts_filter(
        width in 1usize..32,
        rows in proptest::collection::vec(any::<u8>(), 1..1024),
    ) {
        let width = width.min(rows.len());
        let height = rows.len() / width;
        let plane = &rows[..width * height];
        prop_assert_eq!(roundtrip(AlphaFilter::Gradient, width, plane), plane);
    }

    #[test]
    fn prop_unfiltered_plane_is_copied_verbatim(
        width in 1usize..32,
        rows in proptest::collection::vec(any::<u8>(), 1..1024),
    ) {
        let width = width.min(rows.len());
        let height = rows.len() / width;
        let plane = &rows[..width * height];
        prop_assert_eq!(roundtrip(AlphaFilter::None, width, plane), plane);
    }
}
