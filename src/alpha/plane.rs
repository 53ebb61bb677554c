//! Alpha output plane and incremental row-filter state.
//!
//! The plane owns the `width * height` output buffer for one chunk,
//! allocated once and never resized. Filtering state lives in a row cursor
//! so a streaming collaborator can hand over row ranges as they become
//! available instead of all at once.

use super::filter::AlphaFilter;

/// Tracks filtering progress across incremental row ranges.
///
/// "No previous row yet" is an explicit `None`, never a sentinel index:
/// row 0 of the image and "nothing reconstructed so far" are different
/// states and must not share a value.
#[derive(Debug, Clone, Copy)]
struct RowCursor {
    /// Exclusive upper bound of the rows processed so far.
    last_decoded: usize,
    /// Row whose reconstructed bytes seed the next range's predictor.
    prev_row: Option<usize>,
}

/// Exclusively-owned output buffer for one alpha chunk, plus the filter
/// state needed to reconstruct rows incrementally.
#[derive(Debug)]
pub struct AlphaPlane {
    width: usize,
    height: usize,
    filter: AlphaFilter,
    data: Vec<u8>,
    cursor: RowCursor,
}

impl AlphaPlane {
    /// Allocate a plane of exactly `width * height` bytes.
    pub(crate) fn new(width: usize, height: usize, filter: AlphaFilter) -> Self {
        Self {
            width,
            height,
            filter,
            data: vec![0; width * height],
            cursor: RowCursor {
                last_decoded: 0,
                prev_row: None,
            },
        }
    }

    /// Plane width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plane height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Exclusive upper bound of the rows filtered so far.
    pub fn last_decoded_row(&self) -> usize {
        self.cursor.last_decoded
    }

    /// Mutable access to row `y`, for collaborators producing decoded
    /// bytes row by row.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Read-only view of the whole plane.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Reconstruct rows `[first_row, last_row)` in place.
    ///
    /// Ranges must arrive in non-decreasing, non-overlapping order; the
    /// cursor supplies the predictor row for the first row of each range.
    /// A no-op for [`AlphaFilter::None`] apart from advancing the cursor.
    /// An empty range leaves all state untouched.
    pub fn apply_filter(&mut self, first_row: usize, last_row: usize) {
        debug_assert!(first_row <= last_row);
        debug_assert!(last_row <= self.height);
        debug_assert!(first_row >= self.cursor.last_decoded, "row range out of order");
        if first_row == last_row {
            return;
        }
        let filter = self.filter;
        let width = self.width;
        if filter != AlphaFilter::None {
            for y in first_row..last_row {
                let prev_index = if y == first_row {
                    self.cursor.prev_row
                } else {
                    Some(y - 1)
                };
                match prev_index {
                    None => {
                        let start = y * width;
                        filter.unfilter(None, &mut self.data[start..start + width]);
                    }
                    Some(p) => {
                        debug_assert!(p < y);
                        let (head, tail) = self.data.split_at_mut(y * width);
                        let prev = &head[p * width..(p + 1) * width];
                        filter.unfilter(Some(prev), &mut tail[..width]);
                    }
                }
            }
        }
        self.cursor.prev_row = Some(last_row - 1);
        self.cursor.last_decoded = last_row;
    }
}
