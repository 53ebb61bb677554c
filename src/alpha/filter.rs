//! Spatial predictor unfiltering.
//!
//! The encoder may replace each alpha byte with its delta from a predicted
//! value based on already-coded neighbors. Decoding reverses that transform
//! row by row. Each unfilter operates in place on the current row, so the
//! raw path can reconstruct directly inside the output buffer, and takes
//! the previous *reconstructed* row (not the previous filtered row) as
//! predictor context.

/// Spatial predictor applied to the alpha plane at encode time.
///
/// A closed set, dispatched by match; never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaFilter {
    /// No filtering; bytes are stored verbatim.
    None = 0,
    /// Predict from the byte to the left.
    Horizontal = 1,
    /// Predict from the byte above.
    Vertical = 2,
    /// Predict from left + above - above-left, clamped to byte range.
    Gradient = 3,
}

impl AlphaFilter {
    /// Reconstruct `row` in place, reversing this filter.
    ///
    /// `prev` is the previous reconstructed row, `None` only when no row
    /// has been reconstructed yet. For [`AlphaFilter::None`] the row is
    /// already final and left untouched.
    pub fn unfilter(self, prev: Option<&[u8]>, row: &mut [u8]) {
        match self {
            AlphaFilter::None => {}
            AlphaFilter::Horizontal => unfilter_horizontal(prev, row),
            AlphaFilter::Vertical => unfilter_vertical(prev, row),
            AlphaFilter::Gradient => unfilter_gradient(prev, row),
        }
    }
}

/// Horizontal unfilter: each byte adds the reconstructed byte to its left.
///
/// The first byte of the row is seeded from the first byte of the previous
/// row, or zero when there is none.
pub fn unfilter_horizontal(prev: Option<&[u8]>, row: &mut [u8]) {
    let mut pred = prev.map(|p| p[0]).unwrap_or(0);
    for byte in row.iter_mut() {
        pred = pred.wrapping_add(*byte);
        *byte = pred;
    }
}

/// Vertical unfilter: each byte adds the byte directly above it.
///
/// With no previous row there is no "above"; the row degrades to the
/// horizontal reconstruction, matching the encoder's edge convention.
pub fn unfilter_vertical(prev: Option<&[u8]>, row: &mut [u8]) {
    match prev {
        None => unfilter_horizontal(None, row),
        Some(prev) => {
            for (byte, &above) in row.iter_mut().zip(prev) {
                *byte = above.wrapping_add(*byte);
            }
        }
    }
}

/// Gradient unfilter: each byte adds `clamp(left + above - above_left)`.
///
/// Falls back to the horizontal reconstruction when there is no previous
/// row. The predictor is clamped to byte range but the final addition
/// wraps modulo 256, matching the byte-truncation semantics of the format.
pub fn unfilter_gradient(prev: Option<&[u8]>, row: &mut [u8]) {
    let prev = match prev {
        None => return unfilter_horizontal(None, row),
        Some(prev) => prev,
    };
    let mut top_left = prev[0];
    let mut left = prev[0];
    for (byte, &top) in row.iter_mut().zip(prev) {
        let predicted = clamp_to_u8(left as i32 + top as i32 - top_left as i32);
        left = byte.wrapping_add(predicted);
        top_left = top;
        *byte = left;
    }
}

/// Clamp a gradient prediction into byte range.
#[inline]
fn clamp_to_u8(v: i32) -> u8 {
    if v & !0xFF == 0 {
        v as u8
    } else if v < 0 {
        0
    } else {
        255
    }
}
