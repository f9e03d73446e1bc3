//! skel-test - Regression test support for the skel library
//!
//! Provides a small regression test harness with two modes:
//!
//! - **Compare**: record and report checkpoint failures (default)
//! - **Display**: run tests without failing comparisons, for inspection
//!
//! plus synthetic 1-bpp input generators used by the regression tests in
//! place of image fixtures.
//!
//! # Usage
//!
//! ```
//! use skel_test::{RegParams, shapes};
//!
//! let mut rp = RegParams::new("example");
//! let disk = shapes::filled_disk(15, 15, 7, 7, 5);
//! rp.compare_values(81.0, disk.count_pixels() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to run without comparison

mod params;
pub mod shapes;

pub use params::{RegParams, RegTestMode};
