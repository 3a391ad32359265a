//! Type lists and selection of a list element by index.
//!
//! A type list is a right-nested chain of pairs terminated by `()`, usually
//! spelled with the [`T`](crate::T) macro: `T![A, B, C]` is
//! `(A, (B, (C, ())))`. [`Select`] resolves the element at a type-level index;
//! asking for an index past the end is an unsatisfied bound, so it never
//! builds.
//!
//! ```rust
//! use sumtup::{index::U2, select::At, T};
//!
//! let _: At<T![u8, u16, u32], U2> = 7u32;
//! ```

use crate::index::{Index, UInt, UTerm};

/// A type list of statically known length.
pub trait List {
    /// The number of elements in the list.
    const LEN: usize;

    /// The length as an index token, for bounding it by
    /// [`Arity`](crate::index::Arity).
    type Len: Index;
}

impl List for () {
    const LEN: usize = 0;
    type Len = UTerm;
}

impl<Head, Tail: List> List for (Head, Tail) {
    const LEN: usize = 1 + Tail::LEN;
    type Len = UInt<Tail::Len>;
}

/// Picks the element at index `U` out of a type list.
pub trait Select<U: Index>: List {
    /// The element type at index `U`.
    type Output;

    fn select(&self) -> &Self::Output;

    fn select_mut(&mut self) -> &mut Self::Output;

    fn into_selected(self) -> Self::Output;
}

impl<Head, Tail: List> Select<UTerm> for (Head, Tail) {
    type Output = Head;

    fn select(&self) -> &Head {
        &self.0
    }

    fn select_mut(&mut self) -> &mut Head {
        &mut self.0
    }

    fn into_selected(self) -> Head {
        self.0
    }
}

impl<Head, Tail, U> Select<UInt<U>> for (Head, Tail)
where
    Tail: Select<U>,
    U: Index,
{
    type Output = Tail::Output;

    fn select(&self) -> &Self::Output {
        self.1.select()
    }

    fn select_mut(&mut self) -> &mut Self::Output {
        self.1.select_mut()
    }

    fn into_selected(self) -> Self::Output {
        self.1.into_selected()
    }
}

/// The element type of list `L` at index `U`.
pub type At<L, U> = <L as Select<U>>::Output;
