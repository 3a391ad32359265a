//! Index tokens: type-level naturals used to pick an alternative of a
//! [`Sum`] or a slot of a [`Tuple`] at compile time.
//!
//! Every token is a zero-sized value. The aliases `U0..=U32` name both the
//! type and a value of that type, so the same spelling works in turbofish
//! position and as an argument:
//!
//! ```rust
//! use sumtup::{index::U1, Sum};
//!
//! let s: Sum![i32, &str] = Sum::new("hi");
//! assert_eq!(*s.get(U1), "hi");
//! assert_eq!(*s.get::<_, U1>(U1), "hi");
//! ```
//!
//! [`Sum`]: crate::Sum
//! [`Tuple`]: crate::Tuple

use core::{fmt, marker::PhantomData};

/// The largest arity supported by [`Sum`](crate::Sum) and
/// [`Tuple`](crate::Tuple).
pub const MAX_ARITY: usize = 32;

/// The index zero.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UTerm;

impl fmt::Debug for UTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("U0")
    }
}

/// The successor of `U`.
pub struct UInt<U>(PhantomData<U>);

impl<U> UInt<U> {
    pub const fn new() -> Self {
        UInt(PhantomData)
    }
}

// Written by hand so no bounds land on `U`.
impl<U> Clone for UInt<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for UInt<U> {}

impl<U> Default for UInt<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> PartialEq for UInt<U> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<U> Eq for UInt<U> {}

impl<U> core::hash::Hash for UInt<U> {
    fn hash<H: core::hash::Hasher>(&self, _: &mut H) {}
}

impl<U: Index> fmt::Debug for UInt<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{}", Self::INDEX)
    }
}

/// A type-level index.
pub trait Index: Copy + Default + sealed::Sealed {
    /// The position this token selects.
    const INDEX: usize;

    /// The same position in the width of a [`Sum`](crate::Sum) tag.
    const TAG: u8;

    fn value(self) -> usize {
        Self::INDEX
    }
}

impl Index for UTerm {
    const INDEX: usize = 0;
    const TAG: u8 = 0;
}

impl<U: Index> Index for UInt<U> {
    const INDEX: usize = 1 + U::INDEX;
    const TAG: u8 = 1 + U::TAG;
}

/// Tokens that count a list short enough to build a [`Sum`](crate::Sum) or
/// [`Tuple`](crate::Tuple) from: `U0..=U32`.
#[diagnostic::on_unimplemented(
    message = "type list is longer than `MAX_ARITY`",
    label = "sums and tuples take at most 32 types"
)]
pub trait Arity: Index {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::UTerm {}
    impl<U: Sealed> Sealed for super::UInt<U> {}
}

macro_rules! tokens {
    ($first:ident $(, $prev:ident => $name:ident)* $(,)?) => {
        pub type $first = UTerm;
        #[allow(non_upper_case_globals)]
        pub const $first: $first = UTerm;
        impl Arity for $first {}
        $(
            pub type $name = UInt<$prev>;
            #[allow(non_upper_case_globals)]
            pub const $name: $name = UInt::new();
            impl Arity for $name {}
        )*
    };
}

tokens! {
    U0,
    U0 => U1, U1 => U2, U2 => U3, U3 => U4, U4 => U5, U5 => U6, U6 => U7, U7 => U8,
    U8 => U9, U9 => U10, U10 => U11, U11 => U12, U12 => U13, U13 => U14, U14 => U15,
    U15 => U16, U16 => U17, U17 => U18, U18 => U19, U19 => U20, U20 => U21, U21 => U22,
    U22 => U23, U23 => U24, U24 => U25, U25 => U26, U26 => U27, U27 => U28, U28 => U29,
    U29 => U30, U30 => U31, U31 => U32,
}
