//! skel-core - Binary image container for the skel skeletonization library
//!
//! This crate provides the 1-bpp image substrate the morphology crate is
//! built on:
//!
//! - [`Bitmap`]: an immutable, cheaply cloneable binary image
//! - [`BitmapMut`]: its exclusive-access mutable counterpart
//! - Word-level logic (XOR, AND-NOT subtraction, inversion)
//! - Pixel-exact comparison and foreground counting
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words, one bit per pixel
//! - Every row starts on a 32-bit boundary (`wpl` words per line)
//! - Pixels are packed MSB to LSB within each word
//! - Unused bits past the image width in the last word of each row are
//!   always zero
//!
//! # Ownership model
//!
//! `Bitmap` uses `Arc` for efficient cloning (shared ownership). To modify
//! pixel data, convert to [`BitmapMut`] via [`Bitmap::try_into_mut`] or
//! [`Bitmap::to_mut`], then convert back with `Into<Bitmap>`.

mod bitmap;
mod error;

pub use bitmap::{
    BACKGROUND, Bitmap, BitmapMut, FOREGROUND, clear_data_bit, clear_unused_bits, get_data_bit,
    set_data_bit,
};
pub use error::{Error, Result};
