//! Closed sum types and fixed-arity product types over type lists.
//!
//! [`struct@Sum`] holds exactly one value out of a list of alternative types,
//! tagged with the position of its type. [`struct@Tuple`] holds one value of
//! each type of a list. Both are written once for every arity up to
//! [`MAX_ARITY`], with alternatives and slots picked by the index tokens of
//! [`index`] and resolved through [`select`].
//!
//! ```rust
//! use sumtup::{index::*, t, tuple, Sum, Tuple};
//!
//! type Shape = Sum![f64, (f64, f64)];
//!
//! fn area(s: &Shape) -> f64 {
//!     s.match_ref(t![
//!         |r: &f64| 3.0 * r * r,
//!         |(w, h): &(f64, f64)| w * h,
//!     ])
//! }
//!
//! let shapes: Tuple![Shape, Shape] = tuple!(Sum::new(1.0), Sum::new((2.0, 3.0)));
//! assert_eq!(area(&shapes[U0]) + area(&shapes[U1]), 9.0);
//! ```
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(rust_2024_compatibility)]
#![allow(edition_2024_expr_fragment_specifier)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod error;
pub mod index;
pub mod select;
pub mod sum;
pub mod tuple;

pub use self::{
    error::AccessError,
    index::MAX_ARITY,
    sum::{repr::SumList, Sum},
    tuple::Tuple,
};
