//! Binary hit-or-miss transform
//!
//! The hit-or-miss transform (HMT) marks a pixel as foreground iff every
//! hit cell of the structuring element aligns with a foreground pixel AND
//! every miss cell aligns with a background pixel; don't-care cells are
//! ignored. Logically: `hmt(I, K) = erode(I, K_hits) AND
//! erode(complement(I), K_misses)`.
//!
//! # Border policy
//!
//! Neighborhood cells falling outside the image are background: a hit
//! probing outside the image fails the match, a miss probing outside
//! succeeds. This is the constant-background border (OpenCV
//! `BORDER_CONSTANT` with value 0). The policy is identical for every
//! kernel and every backend.
//!
//! # Backends
//!
//! The transform is exposed behind the [`HitMissBackend`] trait so the
//! iteration driver never depends on how neighborhoods are evaluated:
//!
//! - [`RasterOp`] (default): word-level shift-and-AND over packed rows,
//!   one shift per SEL cell
//! - [`Pointwise`]: per-pixel neighborhood probing; the straightforward
//!   reference the word-level backend is validated against

use crate::{MorphResult, Sel};
use skel_core::{Bitmap, clear_unused_bits};

/// A hit-or-miss evaluation strategy.
pub trait HitMissBackend {
    /// Apply the hit-or-miss transform of `sel` to `bmp`.
    fn hit_miss(&self, bmp: &Bitmap, sel: &Sel) -> MorphResult<Bitmap>;
}

/// Word-level backend: shift-and-AND accumulation at 32-bit granularity.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterOp;

/// Per-pixel backend: probes each neighborhood cell individually.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointwise;

/// Hit-or-miss transform with the default word-level backend.
pub fn hit_miss_transform(bmp: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
    RasterOp.hit_miss(bmp, sel)
}

impl HitMissBackend for RasterOp {
    /// Algorithm:
    ///   1. Set all output bits to 1
    ///   2. For each hit (dx, dy): dest[y] &= shift(src[y + dy], -dx),
    ///      out-of-bounds positions AND with 0 (hit outside fails)
    ///   3. For each miss (dx, dy): dest[y] &= shift(comp[y + dy], -dx),
    ///      out-of-bounds positions AND with 1 (miss outside succeeds)
    fn hit_miss(&self, bmp: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
        let w = bmp.width();
        let h = bmp.height();
        let wpl = bmp.wpl() as usize;

        let mut out_mut = bmp.create_template().try_into_mut().unwrap();

        let src = bmp.data();
        // Complement of the source. Padding bits past the image width flip
        // to 1, which is exactly "outside the row is background" for the
        // miss accumulation below.
        let comp: Vec<u32> = src.iter().map(|&word| !word).collect();

        let dst = out_mut.data_mut();
        for word in dst.iter_mut() {
            *word = 0xFFFF_FFFF;
        }

        let hit_offsets: Vec<_> = sel.hit_offsets().collect();
        let miss_offsets: Vec<_> = sel.miss_offsets().collect();

        for &(dx, dy) in &hit_offsets {
            for y in 0..h as i32 {
                let src_y = y + dy;
                let dst_start = y as usize * wpl;

                if src_y < 0 || src_y >= h as i32 {
                    for word in &mut dst[dst_start..dst_start + wpl] {
                        *word = 0;
                    }
                    continue;
                }

                let src_start = src_y as usize * wpl;
                shift_and_row(
                    &mut dst[dst_start..dst_start + wpl],
                    &src[src_start..src_start + wpl],
                    -dx,
                    0,
                );
            }
        }

        for &(dx, dy) in &miss_offsets {
            for y in 0..h as i32 {
                let src_y = y + dy;
                if src_y < 0 || src_y >= h as i32 {
                    // AND with all-ones is a no-op
                    continue;
                }

                let dst_start = y as usize * wpl;
                let src_start = src_y as usize * wpl;
                shift_and_row(
                    &mut dst[dst_start..dst_start + wpl],
                    &comp[src_start..src_start + wpl],
                    -dx,
                    !0,
                );
            }
        }

        clear_unused_bits(out_mut.data_mut(), w, wpl);
        Ok(out_mut.into())
    }
}

impl HitMissBackend for Pointwise {
    fn hit_miss(&self, bmp: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
        let w = bmp.width();
        let h = bmp.height();

        let mut out_mut = bmp.create_template().try_into_mut().unwrap();

        let hit_offsets: Vec<_> = sel.hit_offsets().collect();
        let miss_offsets: Vec<_> = sel.miss_offsets().collect();

        for y in 0..h {
            for x in 0..w {
                let hits_match = hit_offsets.iter().all(|&(dx, dy)| {
                    let sx = x as i32 + dx;
                    let sy = y as i32 + dy;
                    if sx >= 0 && sx < w as i32 && sy >= 0 && sy < h as i32 {
                        bmp.get_pixel_unchecked(sx as u32, sy as u32) != 0
                    } else {
                        false
                    }
                });

                let misses_match = miss_offsets.iter().all(|&(dx, dy)| {
                    let sx = x as i32 + dx;
                    let sy = y as i32 + dy;
                    if sx >= 0 && sx < w as i32 && sy >= 0 && sy < h as i32 {
                        bmp.get_pixel_unchecked(sx as u32, sy as u32) == 0
                    } else {
                        true // outside is background
                    }
                });

                if hits_match && misses_match {
                    out_mut.set_pixel_unchecked(x, y, 1);
                }
            }
        }

        Ok(out_mut.into())
    }
}

/// Shift src row by `shift` pixels and AND into dst (word-level).
///
/// MSB-first bit ordering: pixel 0 = bit 31. Positive shift = row content
/// moves right, so dst(x) &= src(x - shift). Bit positions vacated by the
/// shift are filled from `fill` (0 to clear, !0 to preserve).
#[allow(clippy::needless_range_loop)]
fn shift_and_row(dst: &mut [u32], src: &[u32], shift: i32, fill: u32) {
    let wpl = dst.len();

    if shift == 0 {
        for i in 0..wpl {
            dst[i] &= src[i];
        }
        return;
    }

    let abs_shift = shift.unsigned_abs() as usize;
    let word_shift = abs_shift / 32;
    let bit_shift = (abs_shift % 32) as u32;

    if word_shift >= wpl {
        // Entire row shifts out of bounds
        for word in dst.iter_mut() {
            *word &= fill;
        }
        return;
    }

    if shift > 0 {
        for i in 0..word_shift {
            dst[i] &= fill;
        }
        if bit_shift == 0 {
            for i in word_shift..wpl {
                dst[i] &= src[i - word_shift];
            }
        } else {
            // First valid word: vacated high bits come from fill
            dst[word_shift] &= (src[0] >> bit_shift) | (fill << (32 - bit_shift));
            for i in (word_shift + 1)..wpl {
                let si = i - word_shift;
                dst[i] &= (src[si] >> bit_shift) | (src[si - 1] << (32 - bit_shift));
            }
        }
    } else {
        let end = wpl - word_shift;
        if bit_shift == 0 {
            for i in 0..end {
                dst[i] &= src[i + word_shift];
            }
        } else {
            for i in 0..end.saturating_sub(1) {
                let si = i + word_shift;
                dst[i] &= (src[si] << bit_shift) | (src[si + 1] >> (32 - bit_shift));
            }
            // Last valid word: vacated low bits come from fill
            if end > 0 {
                dst[end - 1] &= (src[wpl - 1] << bit_shift) | (fill >> (32 - bit_shift));
            }
        }
        for i in end..wpl {
            dst[i] &= fill;
        }
    }
}
