//! Hit-or-miss backend equivalence regression test
//!
//! The word-level RasterOp backend must agree pixel-for-pixel with the
//! per-pixel Pointwise reference on every input, including widths that
//! cross 32-bit word boundaries and shapes touching the image border.
//!
//! Run with:
//! ```
//! cargo test -p skel-morph --test hitmiss_reg
//! ```

use skel_morph::{HitMissBackend, Pointwise, RasterOp, skel_sels, skeletonize_with};
use skel_test::{RegParams, shapes};

#[test]
fn hitmiss_reg() {
    let mut rp = RegParams::new("hitmiss");

    let sels = skel_sels();

    // Random bitmaps at several densities and word-boundary widths
    for (i, &(w, h, density)) in [
        (31u32, 17u32, 0.3f64),
        (32, 16, 0.5),
        (33, 15, 0.5),
        (64, 20, 0.7),
        (97, 11, 0.45),
    ]
    .iter()
    .enumerate()
    {
        let bmp = shapes::random_bitmap(w, h, density, 1000 + i as u64);
        eprintln!("  {}x{} density {}", w, h, density);

        for sel in &sels {
            let fast = RasterOp.hit_miss(&bmp, sel).unwrap();
            let slow = Pointwise.hit_miss(&bmp, sel).unwrap();
            assert!(
                fast.equals(&slow),
                "backends disagree on {}x{} for {:?}",
                w,
                h,
                sel.name()
            );
        }
        rp.compare_values(1.0, 1.0, 0.0);
    }

    // Shapes touching the border exercise the out-of-bounds policy
    let edge_rect = shapes::filled_rect(40, 12, 0, 0, 10, 12);
    for sel in &sels {
        let fast = RasterOp.hit_miss(&edge_rect, sel).unwrap();
        let slow = Pointwise.hit_miss(&edge_rect, sel).unwrap();
        rp.compare_bitmaps(&slow, &fast);
    }

    // Full skeletonization agrees end to end
    let noise = shapes::random_bitmap(50, 34, 0.55, 77);
    let fast = skeletonize_with(&noise, 1000, &RasterOp).unwrap();
    let slow = skeletonize_with(&noise, 1000, &Pointwise).unwrap();
    rp.compare_values(fast.iterations as f64, slow.iterations as f64, 0.0);
    rp.compare_bitmaps(&slow.image, &fast.image);

    assert!(rp.cleanup());
}
