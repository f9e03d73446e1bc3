//! skel - Morphological skeletonization of binary images
//!
//! Computes the thin, connectivity-preserving centerline of the
//! foreground shapes in a binary image by iterated hit-or-miss thinning
//! with eight 45-degree-rotated kernels, run to a fixed point or an
//! iteration cap. The converged result is equivalent to MATLAB's
//! `bwmorph(bw, 'skel', n)`.
//!
//! # Example
//!
//! ```
//! use skel::{Bitmap, morph};
//!
//! // A thresholded byte image: 0 background, 255 foreground
//! let raw = vec![255u8; 8 * 8];
//! let bmp = Bitmap::from_raw(&raw, 8, 8).unwrap();
//!
//! let result = morph::skeletonize(&bmp, 1000).unwrap();
//! println!(
//!     "converged after {} passes, {} skeleton pixels",
//!     result.iterations,
//!     result.image.count_pixels()
//! );
//! ```

// Re-export core types (primary data structures used everywhere)
pub use skel_core::*;

// Re-export the morphology crate as a module to avoid name conflicts
pub use skel_morph as morph;
