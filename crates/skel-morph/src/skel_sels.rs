//! Structuring elements for morphological skeletonization
//!
//! The skeleton kernel set is the north-facing endpoint template rotated
//! through a full turn in 45-degree steps, giving eight oriented 3x3
//! elements. Thinning with all eight in sequence peels one boundary layer
//! per pass without breaking connectivity.
//!
//! The template family is the classical one; see Haralick and Shapiro,
//! "Computer and Robot Vision", vol. 1, pp. 170-171.
//!
//! Pattern notation: 'x' hit, 'o' miss, ' ' don't care, 'C' center (hit).

use crate::{MorphResult, Sel, SelElement};

// skel_sel_0: north-facing edge
// xxx
//  C
// ooo
const SKEL_SEL_0: &str = "xxx\n C \nooo";

// skel_sel_1: north-east corner
//  x
// oCx
// oo
const SKEL_SEL_1: &str = " x \noCx\noo ";

// skel_sel_2: east-facing edge
// x o
// xCo
// x o
const SKEL_SEL_2: &str = "x o\nxCo\nx o";

// skel_sel_3: north-west corner
//  x
// xCo
//  oo
const SKEL_SEL_3: &str = " x \nxCo\n oo";

// skel_sel_4: west-facing edge
// o x
// oCx
// o x
const SKEL_SEL_4: &str = "o x\noCx\no x";

// skel_sel_5: south-west corner
//  oo
// xCo
//  x
const SKEL_SEL_5: &str = " oo\nxCo\n x ";

// skel_sel_6: south-facing edge
// ooo
//  C
// xxx
const SKEL_SEL_6: &str = "ooo\n C \nxxx";

// skel_sel_7: south-east corner
// oo
// oCx
//  x
const SKEL_SEL_7: &str = "oo \noCx\n x ";

/// Create a skeleton SEL from a string pattern.
///
/// The pattern uses:
/// - 'x' or 'X' for hit (foreground match)
/// - 'o' or 'O' for miss (background match)
/// - ' ' for don't care
/// - 'C' marks the center/origin (treated as hit)
fn sel_from_skel_pattern(pattern: &str, name: &str) -> MorphResult<Sel> {
    let lines: Vec<&str> = pattern.lines().collect();
    let height = lines.len() as u32;
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as u32;

    let mut sel = Sel::new(width, height)?;

    // Find center position (marked with 'C')
    let mut cx = width / 2;
    let mut cy = height / 2;

    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            if ch == 'C' || ch == 'c' {
                cx = x as u32;
                cy = y as u32;
            }
        }
    }

    sel.set_origin(cx, cy)?;

    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let elem = match ch {
                'x' | 'X' | 'C' | 'c' => SelElement::Hit,
                'o' | 'O' => SelElement::Miss,
                _ => SelElement::DontCare,
            };
            sel.set_element(x as u32, y as u32, elem);
        }
    }

    sel.set_name(name);
    Ok(sel)
}

/// Create the eight skeleton SELs, in application order.
///
/// Element i is element 0 rotated by i x 45 degrees. The order is part of
/// the algorithm's contract: within a pass each element is applied to the
/// image already thinned by its predecessors.
pub fn skel_sels() -> Vec<Sel> {
    vec![
        sel_from_skel_pattern(SKEL_SEL_0, "skel_sel_0").unwrap(),
        sel_from_skel_pattern(SKEL_SEL_1, "skel_sel_1").unwrap(),
        sel_from_skel_pattern(SKEL_SEL_2, "skel_sel_2").unwrap(),
        sel_from_skel_pattern(SKEL_SEL_3, "skel_sel_3").unwrap(),
        sel_from_skel_pattern(SKEL_SEL_4, "skel_sel_4").unwrap(),
        sel_from_skel_pattern(SKEL_SEL_5, "skel_sel_5").unwrap(),
        sel_from_skel_pattern(SKEL_SEL_6, "skel_sel_6").unwrap(),
        sel_from_skel_pattern(SKEL_SEL_7, "skel_sel_7").unwrap(),
    ]
}
