//! Synthetic 1-bpp test inputs
//!
//! The regression tests probe the morphology code with generated shapes
//! rather than image fixtures: filled polygons with known pixel counts,
//! and seeded random bitmaps for determinism and backend-equivalence
//! checks.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use skel_core::Bitmap;

/// A canvas with a filled axis-aligned rectangle.
///
/// # Panics
///
/// Panics if the canvas is empty or the rectangle does not fit.
pub fn filled_rect(width: u32, height: u32, x0: u32, y0: u32, rw: u32, rh: u32) -> Bitmap {
    assert!(x0 + rw <= width && y0 + rh <= height, "rectangle outside canvas");
    let mut bmp = Bitmap::new(width, height).unwrap().try_into_mut().unwrap();
    for y in y0..y0 + rh {
        for x in x0..x0 + rw {
            bmp.set_pixel_unchecked(x, y, 1);
        }
    }
    bmp.into()
}

/// A canvas with a filled disk: pixels within `radius` of (cx, cy).
pub fn filled_disk(width: u32, height: u32, cx: u32, cy: u32, radius: u32) -> Bitmap {
    let mut bmp = Bitmap::new(width, height).unwrap().try_into_mut().unwrap();
    let r2 = i64::from(radius) * i64::from(radius);
    for y in 0..height {
        for x in 0..width {
            let dx = i64::from(x) - i64::from(cx);
            let dy = i64::from(y) - i64::from(cy);
            if dx * dx + dy * dy <= r2 {
                bmp.set_pixel_unchecked(x, y, 1);
            }
        }
    }
    bmp.into()
}

/// A canvas with a one-pixel-wide horizontal line.
///
/// # Panics
///
/// Panics if the canvas is empty or the line does not fit.
pub fn horizontal_line(width: u32, height: u32, y: u32, x0: u32, len: u32) -> Bitmap {
    assert!(y < height && x0 + len <= width, "line outside canvas");
    let mut bmp = Bitmap::new(width, height).unwrap().try_into_mut().unwrap();
    for x in x0..x0 + len {
        bmp.set_pixel_unchecked(x, y, 1);
    }
    bmp.into()
}

/// A random bitmap with the given foreground density, reproducible from
/// the seed.
pub fn random_bitmap(width: u32, height: u32, density: f64, seed: u64) -> Bitmap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bmp = Bitmap::new(width, height).unwrap().try_into_mut().unwrap();
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(density) {
                bmp.set_pixel_unchecked(x, y, 1);
            }
        }
    }
    bmp.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rect_count() {
        let bmp = filled_rect(16, 16, 5, 5, 5, 5);
        assert_eq!(bmp.count_pixels(), 25);
        assert_eq!(bmp.get_pixel_unchecked(5, 5), 1);
        assert_eq!(bmp.get_pixel_unchecked(9, 9), 1);
        assert_eq!(bmp.get_pixel_unchecked(10, 9), 0);
    }

    #[test]
    fn test_filled_disk_symmetry() {
        let bmp = filled_disk(15, 15, 7, 7, 5);
        assert_eq!(bmp.get_pixel_unchecked(7, 7), 1);
        assert_eq!(bmp.get_pixel_unchecked(7, 2), 1);
        assert_eq!(bmp.get_pixel_unchecked(0, 0), 0);
        // symmetric about the center
        for y in 0..15 {
            for x in 0..15 {
                assert_eq!(
                    bmp.get_pixel_unchecked(x, y),
                    bmp.get_pixel_unchecked(14 - x, 14 - y)
                );
            }
        }
    }

    #[test]
    fn test_random_bitmap_reproducible() {
        let a = random_bitmap(40, 20, 0.45, 42);
        let b = random_bitmap(40, 20, 0.45, 42);
        assert!(a.equals(&b));

        let c = random_bitmap(40, 20, 0.45, 43);
        assert!(!a.equals(&c));
    }
}
