//! Bitmap - the 1-bpp binary image container
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words, one bit per pixel
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word (pixel 0 is bit 31)
//! - A set bit is a foreground pixel
//!
//! # Ownership model
//!
//! `Bitmap` uses `Arc` for efficient cloning (shared ownership). To modify
//! pixel data, convert to [`BitmapMut`] via [`Bitmap::try_into_mut`] or
//! [`Bitmap::to_mut`], then convert back with `Into<Bitmap>`.
//!
//! # Byte boundary
//!
//! Callers that hold thresholded byte images exchange data through
//! [`Bitmap::from_raw`] and [`Bitmap::to_raw`], which use exactly two
//! sentinel byte values: [`BACKGROUND`] (0) and [`FOREGROUND`] (255).
//! `from_raw` rejects any other value, so a constructed `Bitmap` cannot
//! hold a non-binary pixel.

mod access;
mod compare;
mod logic;

pub use access::{clear_data_bit, get_data_bit, set_data_bit};
pub use logic::clear_unused_bits;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Byte value of a foreground pixel at the `from_raw`/`to_raw` boundary.
pub const FOREGROUND: u8 = 255;

/// Byte value of a background pixel at the `from_raw`/`to_raw` boundary.
pub const BACKGROUND: u8 = 0;

/// Internal bitmap data
#[derive(Debug)]
struct BitmapData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (packed 32-bit words)
    data: Vec<u32>,
}

/// An immutable 1-bpp binary image.
///
/// Uses reference counting via `Arc`, so `clone()` is cheap and shares the
/// pixel data.
///
/// # Examples
///
/// ```
/// use skel_core::Bitmap;
///
/// let bmp = Bitmap::new(640, 480).unwrap();
/// assert_eq!(bmp.width(), 640);
/// assert_eq!(bmp.height(), 480);
/// assert_eq!(bmp.count_pixels(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Bitmap {
    inner: Arc<BitmapData>,
}

impl Bitmap {
    /// Create a new all-background bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let wpl = Self::compute_wpl(width);
        let data = vec![0u32; (wpl as usize) * (height as usize)];

        Ok(Bitmap {
            inner: Arc::new(BitmapData {
                width,
                height,
                wpl,
                data,
            }),
        })
    }

    /// Build a bitmap from a row-major byte buffer.
    ///
    /// Each byte must be one of the two sentinels: [`BACKGROUND`] (0) or
    /// [`FOREGROUND`] (255). `data` must hold exactly `width * height`
    /// bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::InvalidParameter`] if the buffer length does not match
    /// - [`Error::NonBinaryValue`] naming the first offending pixel
    pub fn from_raw(data: &[u8], width: u32, height: u32) -> Result<Self> {
        let bmp = Self::new(width, height)?;
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "raw buffer holds {} bytes, expected {}",
                data.len(),
                expected
            )));
        }

        let mut bmp_mut = bmp.try_into_mut().unwrap();
        for y in 0..height {
            let row = &data[(y as usize) * (width as usize)..][..width as usize];
            let line = bmp_mut.row_data_mut(y);
            for (x, &value) in row.iter().enumerate() {
                match value {
                    BACKGROUND => {}
                    FOREGROUND => set_data_bit(line, x as u32, 1),
                    _ => {
                        return Err(Error::NonBinaryValue {
                            x: x as u32,
                            y,
                            value,
                        });
                    }
                }
            }
        }
        Ok(bmp_mut.into())
    }

    /// Unpack to a row-major byte buffer of [`BACKGROUND`] / [`FOREGROUND`]
    /// values.
    pub fn to_raw(&self) -> Vec<u8> {
        let w = self.width();
        let h = self.height();
        let mut out = vec![BACKGROUND; (w as usize) * (h as usize)];
        for y in 0..h {
            let line = self.row_data(y);
            let row = &mut out[(y as usize) * (w as usize)..][..w as usize];
            for (x, byte) in row.iter_mut().enumerate() {
                if get_data_bit(line, x as u32) != 0 {
                    *byte = FOREGROUND;
                }
            }
        }
        out
    }

    /// Compute words per line for a given width at 1 bpp.
    #[inline]
    fn compute_wpl(width: u32) -> u32 {
        width.div_ceil(32)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        &self.inner.data[start..start + self.inner.wpl as usize]
    }

    /// Create a new all-background bitmap with this bitmap's dimensions.
    pub fn create_template(&self) -> Self {
        let data = vec![0u32; self.inner.data.len()];
        Bitmap {
            inner: Arc::new(BitmapData {
                width: self.inner.width,
                height: self.inner.height,
                wpl: self.inner.wpl,
                data,
            }),
        }
    }

    /// Check if two bitmaps have the same width and height.
    pub fn sizes_equal(&self, other: &Bitmap) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this bitmap.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Bitmap {
            inner: Arc::new(BitmapData {
                width: self.inner.width,
                height: self.inner.height,
                wpl: self.inner.wpl,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<BitmapMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(BitmapMut { inner: data }),
            Err(arc) => Err(Bitmap { inner: arc }),
        }
    }

    /// Create a mutable copy of this bitmap.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> BitmapMut {
        BitmapMut {
            inner: BitmapData {
                width: self.inner.width,
                height: self.inner.height,
                wpl: self.inner.wpl,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable bitmap
///
/// Allows modification of image data. Convert back to an immutable
/// [`Bitmap`] using `Into<Bitmap>`. Exclusive access is enforced at
/// compile time.
#[derive(Debug)]
pub struct BitmapMut {
    inner: BitmapData,
}

impl BitmapMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        &self.inner.data[start..start + self.inner.wpl as usize]
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        &mut self.inner.data[start..start + self.inner.wpl as usize]
    }
}

impl From<BitmapMut> for Bitmap {
    fn from(bmp: BitmapMut) -> Self {
        Bitmap {
            inner: Arc::new(bmp.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dimensions() {
        let bmp = Bitmap::new(33, 5).unwrap();
        assert_eq!(bmp.width(), 33);
        assert_eq!(bmp.height(), 5);
        assert_eq!(bmp.wpl(), 2);
        assert_eq!(bmp.data().len(), 10);
    }

    #[test]
    fn test_new_zero_dimension() {
        assert!(matches!(
            Bitmap::new(0, 5),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            Bitmap::new(5, 0),
            Err(Error::InvalidDimension { width: 5, height: 0 })
        ));
    }

    #[test]
    fn test_from_raw_sentinels() {
        let raw = [
            BACKGROUND, FOREGROUND, BACKGROUND, //
            FOREGROUND, FOREGROUND, BACKGROUND,
        ];
        let bmp = Bitmap::from_raw(&raw, 3, 2).unwrap();
        assert_eq!(bmp.get_pixel_unchecked(1, 0), 1);
        assert_eq!(bmp.get_pixel_unchecked(2, 0), 0);
        assert_eq!(bmp.get_pixel_unchecked(0, 1), 1);
        assert_eq!(bmp.count_pixels(), 3);
        assert_eq!(bmp.to_raw(), raw);
    }

    #[test]
    fn test_from_raw_rejects_non_binary() {
        let raw = [0, 255, 0, 0, 128, 0];
        let err = Bitmap::from_raw(&raw, 3, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::NonBinaryValue {
                x: 1,
                y: 1,
                value: 128
            }
        ));
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let raw = [0u8; 5];
        assert!(matches!(
            Bitmap::from_raw(&raw, 3, 2),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_try_into_mut_requires_exclusive_ownership() {
        let bmp = Bitmap::new(4, 4).unwrap();
        let shared = bmp.clone();
        assert!(bmp.try_into_mut().is_err());
        assert!(shared.try_into_mut().is_ok());
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let bmp = Bitmap::new(8, 8).unwrap();
        let copy = bmp.deep_clone();
        let mut copy_mut = copy.try_into_mut().unwrap();
        copy_mut.set_pixel_unchecked(3, 3, 1);
        let copy: Bitmap = copy_mut.into();
        assert_eq!(bmp.get_pixel_unchecked(3, 3), 0);
        assert_eq!(copy.get_pixel_unchecked(3, 3), 1);
    }
}
