//! unitconv Core - Shared vocabulary
//!
//! This crate provides the types used throughout unitconv:
//! - `Family`: The quantity families a value can be converted within
//! - `ConversionError`: Structured conversion errors with stable codes

mod error;
mod family;

pub use error::{codes, ConversionError};
pub use family::Family;
