//! One-byte-per-pixel decode legality analysis.
//!
//! When the lossless sub-image's Red, Blue and Alpha channels are all
//! single-symbol (zero-bit codes in every Huffman tree group) and no color
//! cache is in play, the external decoder can be driven through a narrower
//! entry point that only materializes the green channel, one byte per pixel
//! instead of four. This module makes that call from stream metadata alone,
//! before any pixel is decoded.

use crate::lossless::LosslessMetadata;

/// Decide whether the one-byte-per-pixel decode path is legal.
///
/// Returns `false` as soon as a color cache is present: cache lookups
/// reproduce full pixels, so the other channels cannot be skipped. Returns
/// `false` if any tree group reads bits for Red, Blue or Alpha. Returns
/// `true` only when every group's Red/Blue/Alpha codes are zero-bit, i.e.
/// those channels are statically known per symbol.
pub fn is_one_byte_decodable(metadata: &LosslessMetadata) -> bool {
    if metadata.color_cache_size > 0 {
        return false;
    }
    metadata
        .tree_groups
        .iter()
        .all(|group| group.red_bits == 0 && group.blue_bits == 0 && group.alpha_bits == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lossless::HuffmanGroupCodes;

    fn group(red_bits: u8, blue_bits: u8, alpha_bits: u8) -> HuffmanGroupCodes {
        HuffmanGroupCodes {
            red_bits,
            blue_bits,
            alpha_bits,
        }
    }

    #[test]
    fn test_color_cache_disqualifies_regardless_of_groups() {
        let metadata = LosslessMetadata {
            color_cache_size: 1,
            tree_groups: vec![group(0, 0, 0)],
        };
        assert!(!is_one_byte_decodable(&metadata));

        let metadata = LosslessMetadata {
            color_cache_size: 32,
            tree_groups: vec![],
        };
        assert!(!is_one_byte_decodable(&metadata));
    }

    #[test]
    fn test_any_nonzero_channel_disqualifies() {
        for codes in [group(1, 0, 0), group(0, 3, 0), group(0, 0, 8)] {
            let metadata = LosslessMetadata {
                color_cache_size: 0,
                tree_groups: vec![group(0, 0, 0), codes],
            };
            assert!(!is_one_byte_decodable(&metadata), "{codes:?}");
        }
    }

    #[test]
    fn test_all_zero_bit_groups_qualify() {
        let metadata = LosslessMetadata {
            color_cache_size: 0,
            tree_groups: vec![group(0, 0, 0); 4],
        };
        assert!(is_one_byte_decodable(&metadata));
    }

    #[test]
    fn test_no_groups_qualifies() {
        let metadata = LosslessMetadata::default();
        assert!(is_one_byte_decodable(&metadata));
    }
}
