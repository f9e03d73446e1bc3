//! skel-morph - Hit-or-miss transform and morphological skeletonization
//!
//! This crate provides:
//!
//! - Structuring elements (SEL) with hit, miss, and don't-care cells
//! - The binary hit-or-miss transform, with interchangeable word-level and
//!   per-pixel backends
//! - The eight-orientation skeleton kernel set
//! - The fixed-point skeleton iteration driver
//!
//! The skeleton of a binary image is computed by repeatedly thinning with
//! the eight oriented kernels until a full pass changes nothing (the fixed
//! point) or an iteration cap is reached:
//!
//! ```
//! use skel_core::Bitmap;
//! use skel_morph::{SkeletonStop, skeletonize};
//!
//! let mut bmp = Bitmap::new(16, 16).unwrap().try_into_mut().unwrap();
//! for y in 5..10 {
//!     for x in 5..10 {
//!         bmp.set_pixel_unchecked(x, y, 1);
//!     }
//! }
//! let result = skeletonize(&bmp.into(), 1000).unwrap();
//! assert_eq!(result.stop, SkeletonStop::Converged);
//! ```

mod error;
pub mod hitmiss;
pub mod sel;
pub mod skel_sels;
pub mod skeleton;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

// Re-export the hit-or-miss transform and its backends
pub use hitmiss::{HitMissBackend, Pointwise, RasterOp, hit_miss_transform};

// Re-export the skeleton kernel table
pub use skel_sels::skel_sels;

// Re-export the skeleton driver
pub use skeleton::{SkeletonResult, SkeletonStop, skeleton_pass, skeletonize, skeletonize_with};
