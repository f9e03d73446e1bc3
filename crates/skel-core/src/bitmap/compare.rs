//! Bitmap comparison and counting
//!
//! Pixel-exact equality, foreground population count, and difference
//! counting. Equality is a word compare: unused bits are kept at zero by
//! every producing operation, so no masking is needed here.

use super::Bitmap;
use crate::error::Result;

impl Bitmap {
    /// Check if two bitmaps are pixel-identical.
    ///
    /// Bitmaps of different dimensions are never equal.
    pub fn equals(&self, other: &Bitmap) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Count the number of foreground pixels.
    pub fn count_pixels(&self) -> u64 {
        self.data().iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Count the number of pixels that differ between two bitmaps.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if the sizes differ.
    pub fn count_pixel_diffs(&self, other: &Bitmap) -> Result<u64> {
        Ok(self.xor(other)?.count_pixels())
    }
}
