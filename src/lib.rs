#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod data;

pub use data::{Path, Point, Polygon, Rect, Verb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Malformed constructor input: non-positive count/capacity or
  /// coordinate arrays shorter than the declared count.
  InvalidArgument,
  /// Append attempted beyond the pre-allocated coordinate capacity.
  OutOfCapacity,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidArgument => write!(f, "Invalid argument"),
      Error::OutOfCapacity => write!(f, "Out of capacity"),
    }
  }
}

impl std::error::Error for Error {}
