//! A small, dynamically-sized bit field written in pure Rust.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitField`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use light_bitfield::BitField;
//!
//! let mut field = BitField::new(8);
//! field.set(3, 1)?;
//! field.set(7, 1)?;
//! assert_eq!(field.count(), 2);
//! field.flip_at(3)?;
//! assert_eq!(field.count(), 1);
//! assert_eq!(field.get(3)?, Some(0));
//! assert_eq!(field.to_string(), "10000000");
//! # Ok::<(), light_bitfield::BitFieldError>(())
//! ```
//!
//! # Failure modes
//!
//! Reads never fail because of an index: an out-of-range [`get`] is `None`.
//! Single-index writes do: an out-of-range [`set`] is an
//! [`BitFieldError::IndexOutOfRange`]. Ranges that can't be placed on the
//! field make [`get_range`] return `None` and [`set_range`] return
//! `Ok(false)`. Non-integer arguments are a [`BitFieldError::Type`].
//!
//! # Features
//!
//! - `#![no_std]` compatible, needs `alloc`
//! - Resizable at runtime, zero-filled on growth
//! - Single-index and range access with negative "from the end" offsets
//! - Values stored as `value mod 2`
//! - Whole-field and single-bit flip, population count
//! - MSB-first string rendering via `Display`
//! - Iteration over bits (`iter()`, `each()`) and indices (`indices()`,
//!   `each_index()`)
//! - Loosely typed arguments through [`Value`] for dynamically typed callers
//!
//! [`get`]: BitField::get
//! [`set`]: BitField::set
//! [`get_range`]: BitField::get_range
//! [`set_range`]: BitField::set_range

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitfield;
mod error;
mod range;
mod value;

pub use bitfield::{BitField, Indices, Iter};
pub use error::BitFieldError;
pub use value::{Integral, Value};
