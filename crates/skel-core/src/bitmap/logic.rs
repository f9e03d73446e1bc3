//! Word-level logic operations on bitmaps
//!
//! All operations work a full 32-bit word at a time and keep the unused
//! bits past the image width at zero, so word-level comparison stays
//! pixel-exact.

use super::{Bitmap, BitmapMut};
use crate::error::{Error, Result};

/// Clear unused bits in the last word of each row.
///
/// When image width is not a multiple of 32, the last word of each row has
/// unused bit positions (lower bits in MSB-first ordering). Word-level
/// operations can set these bits, which would contaminate subsequent
/// word-level comparisons and shifts.
pub fn clear_unused_bits(data: &mut [u32], width: u32, wpl: usize) {
    let unused = (wpl as u32) * 32 - width;
    if unused == 0 {
        return;
    }
    let mask = !0u32 << unused;
    let mut i = wpl - 1;
    while i < data.len() {
        data[i] &= mask;
        i += wpl;
    }
}

impl Bitmap {
    fn check_sizes(&self, other: &Bitmap) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(())
    }

    /// Pixel-wise XOR of two bitmaps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn xor(&self, other: &Bitmap) -> Result<Bitmap> {
        self.check_sizes(other)?;
        let mut out = self.create_template().try_into_mut().unwrap();
        let a = self.data();
        let b = other.data();
        for (dst, (wa, wb)) in out.data_mut().iter_mut().zip(a.iter().zip(b)) {
            *dst = wa ^ wb;
        }
        Ok(out.into())
    }

    /// Subtract `other` from this bitmap (pixel-wise a AND NOT b).
    ///
    /// Foreground pixels of `other` are cleared from the result; everything
    /// else is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn subtract(&self, other: &Bitmap) -> Result<Bitmap> {
        self.check_sizes(other)?;
        let mut out = self.create_template().try_into_mut().unwrap();
        let a = self.data();
        let b = other.data();
        for (dst, (wa, wb)) in out.data_mut().iter_mut().zip(a.iter().zip(b)) {
            *dst = wa & !wb;
        }
        Ok(out.into())
    }

    /// Invert the bitmap (foreground becomes background and vice versa).
    pub fn invert(&self) -> Bitmap {
        let mut out = self.create_template().try_into_mut().unwrap();
        let src = self.data();
        for (dst, w) in out.data_mut().iter_mut().zip(src) {
            *dst = !w;
        }
        out.clear_unused_bits();
        out.into()
    }
}

impl BitmapMut {
    /// Clear the unused bits past the image width in every row.
    pub fn clear_unused_bits(&mut self) {
        let width = self.width();
        let wpl = self.wpl() as usize;
        clear_unused_bits(self.data_mut(), width, wpl);
    }
}
