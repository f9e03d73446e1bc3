//! Morphological skeletonization
//!
//! Computes the skeleton of a binary image by iterated hit-or-miss
//! thinning: each pass applies the eight oriented kernels of
//! [`skel_sels`](crate::skel_sels) in sequence, subtracting every match
//! from the image, and the passes repeat until a pass changes nothing
//! (the fixed point) or the iteration cap is hit. The converged result is
//! the thin, connectivity-preserving centerline of the foreground shapes,
//! equivalent to MATLAB's `bwmorph(bw, 'skel', n)`.
//!
//! The driver never mutates the caller's image; it works on copies and
//! returns a fresh bitmap.
//!
//! # Reference
//!
//! Haralick and Shapiro, "Computer and Robot Vision", vol. 1,
//! pp. 170-171.

use crate::hitmiss::{HitMissBackend, RasterOp};
use crate::skel_sels::skel_sels;
use crate::{MorphError, MorphResult, Sel};
use skel_core::Bitmap;

/// Why the iteration stopped.
///
/// Both outcomes are successful; the distinction is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonStop {
    /// A full pass changed nothing: the image is at the fixed point.
    Converged,
    /// The iteration cap was reached before convergence.
    MaxItersReached,
}

/// Result of a skeleton computation.
#[derive(Debug, Clone)]
pub struct SkeletonResult {
    /// The skeletonized image.
    pub image: Bitmap,
    /// Number of full eight-kernel passes performed, in `1..=max_iters`.
    pub iterations: u32,
    /// Why the iteration stopped.
    pub stop: SkeletonStop,
}

/// Apply one full thinning pass: all `sels` in order, each subtracting
/// its hit-or-miss matches from the working image.
///
/// Sequencing matters: element i+1 probes the image already thinned by
/// elements 0..i, not the pass's input.
pub fn skeleton_pass(
    bmp: &Bitmap,
    sels: &[Sel],
    backend: &dyn HitMissBackend,
) -> MorphResult<Bitmap> {
    let mut working = bmp.clone();
    for sel in sels {
        let matched = backend.hit_miss(&working, sel)?;
        debug_assert!(
            matched.sizes_equal(&working),
            "hit-or-miss changed image dimensions"
        );
        working = working.subtract(&matched)?;
    }
    Ok(working)
}

/// Skeletonize a binary image with the default word-level backend.
///
/// Runs thinning passes until the image stops changing or `max_iters`
/// passes have been performed, whichever comes first.
///
/// # Errors
///
/// Returns [`MorphError::InvalidMaxIterations`] if `max_iters` is 0.
pub fn skeletonize(bmp: &Bitmap, max_iters: u32) -> MorphResult<SkeletonResult> {
    skeletonize_with(bmp, max_iters, &RasterOp)
}

/// Skeletonize a binary image with an explicit hit-or-miss backend.
pub fn skeletonize_with(
    bmp: &Bitmap,
    max_iters: u32,
    backend: &dyn HitMissBackend,
) -> MorphResult<SkeletonResult> {
    if max_iters == 0 {
        return Err(MorphError::InvalidMaxIterations);
    }

    let sels = skel_sels();
    let mut current = bmp.clone();
    let mut step = 0u32;

    loop {
        step += 1;
        let previous = current;
        current = skeleton_pass(&previous, &sels, backend)?;
        debug_assert!(
            current.sizes_equal(&previous),
            "thinning pass changed image dimensions"
        );

        if current.equals(&previous) {
            return Ok(SkeletonResult {
                image: current,
                iterations: step,
                stop: SkeletonStop::Converged,
            });
        }
        if step == max_iters {
            return Ok(SkeletonResult {
                image: current,
                iterations: step,
                stop: SkeletonStop::MaxItersReached,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hitmiss::Pointwise;

    fn filled_square(canvas: u32, x0: u32, y0: u32, size: u32) -> Bitmap {
        let mut bmp = Bitmap::new(canvas, canvas).unwrap().try_into_mut().unwrap();
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                bmp.set_pixel_unchecked(x, y, 1);
            }
        }
        bmp.into()
    }

    #[test]
    fn test_invalid_max_iterations() {
        let bmp = Bitmap::new(4, 4).unwrap();
        assert!(matches!(
            skeletonize(&bmp, 0),
            Err(MorphError::InvalidMaxIterations)
        ));
    }

    #[test]
    fn test_all_background_converges_immediately() {
        let bmp = Bitmap::new(10, 10).unwrap();
        let result = skeletonize(&bmp, 100).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.stop, SkeletonStop::Converged);
        assert_eq!(result.image.count_pixels(), 0);
    }

    #[test]
    fn test_isolated_pixel_is_stable() {
        // No skeleton kernel matches a pixel with no foreground neighbors,
        // so a lone pixel survives unchanged.
        let mut bmp_mut = Bitmap::new(9, 9).unwrap().try_into_mut().unwrap();
        bmp_mut.set_pixel_unchecked(4, 4, 1);
        let bmp: Bitmap = bmp_mut.into();

        let result = skeletonize(&bmp, 100).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.stop, SkeletonStop::Converged);
        assert!(result.image.equals(&bmp));
    }

    #[test]
    fn test_filled_square_converges() {
        let bmp = filled_square(16, 5, 5, 5);
        let result = skeletonize(&bmp, 1000).unwrap();

        assert_eq!(result.stop, SkeletonStop::Converged);
        assert!(result.iterations < 1000);
        // The skeleton is a nonempty subset of the original foreground
        assert!(result.image.count_pixels() > 0);
        assert_eq!(result.image.subtract(&bmp).unwrap().count_pixels(), 0);
    }

    #[test]
    fn test_fixed_point_is_idempotent() {
        let bmp = filled_square(16, 5, 5, 5);
        let result = skeletonize(&bmp, 1000).unwrap();
        assert_eq!(result.stop, SkeletonStop::Converged);

        let again = skeleton_pass(&result.image, &skel_sels(), &RasterOp).unwrap();
        assert!(again.equals(&result.image));
    }

    #[test]
    fn test_single_iteration_cap() {
        let bmp = filled_square(16, 5, 5, 5);
        let capped = skeletonize(&bmp, 1).unwrap();

        assert_eq!(capped.iterations, 1);
        assert_eq!(capped.stop, SkeletonStop::MaxItersReached);
        // The capped result is exactly one pass over the input
        let one_pass = skeleton_pass(&bmp, &skel_sels(), &RasterOp).unwrap();
        assert!(capped.image.equals(&one_pass));
        assert!(!capped.image.equals(&bmp));
    }

    #[test]
    fn test_thin_line_is_stable() {
        // A one-pixel-wide line is already a skeleton
        let mut bmp_mut = Bitmap::new(12, 7).unwrap().try_into_mut().unwrap();
        for x in 2..10 {
            bmp_mut.set_pixel_unchecked(x, 3, 1);
        }
        let bmp: Bitmap = bmp_mut.into();

        let result = skeletonize(&bmp, 50).unwrap();
        assert_eq!(result.stop, SkeletonStop::Converged);
        assert!(result.image.equals(&bmp));
    }

    #[test]
    fn test_input_not_mutated() {
        let bmp = filled_square(16, 5, 5, 5);
        let before = bmp.deep_clone();
        let _ = skeletonize(&bmp, 1000).unwrap();
        assert!(bmp.equals(&before));
    }

    #[test]
    fn test_backends_produce_identical_skeletons() {
        let bmp = filled_square(20, 4, 6, 7);
        let fast = skeletonize_with(&bmp, 1000, &RasterOp).unwrap();
        let slow = skeletonize_with(&bmp, 1000, &Pointwise).unwrap();
        assert_eq!(fast.iterations, slow.iterations);
        assert!(fast.image.equals(&slow.image));
    }
}
