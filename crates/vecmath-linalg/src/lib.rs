#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Module to calculate the SVD of 2x2 and 3x3 matrices
pub mod svd;

pub use svd::{svd2, svd3, Svd2, Svd3};
