//! The module dealing with the underlying representation of the [`Sum`] type.
//!
//! # Implementation details
//!
//! A sum type is a hand-written tagged union. Its memory layout resembles:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::ManuallyDrop;
//!
//! struct Nil(Infallible);
//! #[repr(C)]
//! union Cons<T, Next> {
//!     data: ManuallyDrop<T>,
//!     next: ManuallyDrop<Next>,
//! }
//!
//! // For example only. Not actually defined.
//! struct RawSum2<T1, T2> {
//!     tag: u8,
//!     data: Cons<T1, Cons<T2, Nil>>,
//! }
//! ```
//!
//! Every alternative sits at offset zero, and the union is as large and as
//! aligned as its largest and most aligned alternative. Sums of a single
//! alternative keep no tag at all.
//!
//! [`Sum`]: crate::Sum

use core::{cmp::Ordering, convert::Infallible, mem::ManuallyDrop, ptr};

use crate::{
    index::{Index, UInt, UTerm},
    select::List,
};

use super::{Complement, Rem};

/// The terminator type of the underlying union of the [`Sum`] type.
///
/// [`Sum`]: crate::Sum
pub struct Nil(pub(super) Infallible);

/// The accumulator type of the underlying union of the [`Sum`] type.
///
/// [`Sum`]: crate::Sum
#[repr(C)]
pub union Cons<T, U> {
    pub(super) data: ManuallyDrop<T>,
    pub(super) next: ManuallyDrop<U>,
}

/// Storage for the discriminant of a [`Sum`].
///
/// [`Sum`]: crate::Sum
pub trait TagCell: Copy {
    #[doc(hidden)]
    fn new(tag: u8) -> Self;

    #[doc(hidden)]
    fn get(self) -> u8;
}

impl TagCell for u8 {
    fn new(tag: u8) -> Self {
        tag
    }

    fn get(self) -> u8 {
        self
    }
}

/// The discriminant of a sum with at most one alternative: always zero, and
/// never stored.
#[derive(Debug, Clone, Copy)]
pub struct Solo;

impl TagCell for Solo {
    fn new(tag: u8) -> Self {
        debug_assert_eq!(tag, 0);
        Solo
    }

    fn get(self) -> u8 {
        0
    }
}

/// The trait that type lists implement to support its corresponding tagged
/// union representation for the [`Sum`] type.
///
/// [`Sum`]: crate::Sum
pub trait SumList: List {
    /// The underlying representation of the `Sum` type.
    type Repr;

    /// Where the discriminant lives.
    type Tag: TagCell;

    #[doc(hidden)]
    type OuterTag: TagCell;

    #[doc(hidden)]
    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8);
}

impl SumList for () {
    type Repr = Nil;
    type Tag = Solo;
    type OuterTag = Solo;

    unsafe fn drop(_: &mut ManuallyDrop<Nil>, _: u8) {}
}

impl<Head, Tail> SumList for (Head, Tail)
where
    Tail: SumList,
{
    type Repr = Cons<Head, Tail::Repr>;
    type Tag = Tail::OuterTag;
    type OuterTag = u8;

    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8) {
        if tag == 0 {
            unsafe { ManuallyDrop::drop(&mut this.data) };
        } else {
            unsafe { Tail::drop(&mut this.next, tag - 1) }
        }
    }
}

/// Tag of the alternative at `position` after removing that position from
/// the list, or `None` when `tag` is `position` itself.
pub(super) fn remove_tag(position: u8, tag: u8) -> Option<u8> {
    match tag.cmp(&position) {
        Ordering::Less => Some(tag),
        Ordering::Equal => None,
        Ordering::Greater => Some(tag - 1),
    }
}

/// Inverse of [`remove_tag`]: where a tag of the shortened list sits once
/// `position` is put back.
pub(super) fn insert_tag(position: u8, tag: u8) -> u8 {
    if tag < position {
        tag
    } else {
        tag + 1
    }
}

/// Placement of alternative `T` at index `U` inside the union of a list.
///
/// Implemented once per position, so for a type that occurs once in the list
/// the index can be left to inference.
pub trait Split<T, U: Index>: SumList {
    /// The list with the alternative at `U` removed.
    type Remainder: SumList;

    /// The list with the alternative at `U` replaced by `T2`.
    type Substitute<T2>: Split<T2, U>;

    #[doc(hidden)]
    fn from_data(data: T) -> Self::Repr;

    /// Every alternative sits at offset zero of the representation.
    #[doc(hidden)]
    fn as_ptr(this: &Self::Repr) -> *const T {
        ptr::from_ref(this).cast()
    }

    #[doc(hidden)]
    fn as_mut_ptr(this: &mut Self::Repr) -> *mut T {
        ptr::from_mut(this).cast()
    }

    /// # Safety
    ///
    /// `this` must hold alternative `U`.
    #[doc(hidden)]
    unsafe fn into_data_unchecked(this: Self::Repr) -> T {
        unsafe { ptr::read(Self::as_ptr(&this)) }
    }
}

impl<Head, Tail: SumList> Split<Head, UTerm> for (Head, Tail) {
    type Remainder = Tail;
    type Substitute<T2> = (T2, Tail);

    fn from_data(data: Head) -> Self::Repr {
        Cons {
            data: ManuallyDrop::new(data),
        }
    }
}

impl<Head, Tail, T, U: Index> Split<T, UInt<U>> for (Head, Tail)
where
    Tail: Split<T, U>,
{
    type Remainder = (Head, Rem<Tail, T, U>);
    type Substitute<T2> = (Head, Tail::Substitute<T2>);

    fn from_data(data: T) -> Self::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::from_data(data)),
        }
    }
}

/// `Sub` embedded in `Self`: element `i` of `Sub` is found at the index
/// given by element `i` of the token list `Map`.
///
/// Used to move a [`Sum`] to a longer list and back. The alternatives of
/// `Self` that `Map` does not mention form the [`Complement`].
///
/// [`Sum`]: crate::Sum
/// [`Complement`]: Sublist::Complement
pub trait Sublist<Sub: SumList, Map>: SumList {
    /// The alternatives of `Self` left over once `Sub` is taken out.
    type Complement: SumList;

    /// Maps a tag of `Sub` to the tag of the same alternative in `Self`.
    #[doc(hidden)]
    fn lift(tag: u8) -> u8;

    /// Maps a tag of `Self` into `Sub`, or into the complement when the
    /// alternative is not part of `Sub`.
    #[doc(hidden)]
    fn project(tag: u8) -> Result<u8, u8>;
}

impl<L: SumList> Sublist<(), ()> for L {
    type Complement = L;

    fn lift(tag: u8) -> u8 {
        unreachable!("the empty list has no tag {tag}")
    }

    fn project(tag: u8) -> Result<u8, u8> {
        Err(tag)
    }
}

impl<L, SubHead, SubTail, Pos, Positions> Sublist<(SubHead, SubTail), (Pos, Positions)> for L
where
    L: Split<SubHead, Pos>,
    Pos: Index,
    SubTail: SumList,
    Rem<L, SubHead, Pos>: Sublist<SubTail, Positions>,
{
    type Complement = Complement<Rem<L, SubHead, Pos>, SubTail, Positions>;

    fn lift(tag: u8) -> u8 {
        match tag.checked_sub(1) {
            None => Pos::TAG,
            Some(rest) => {
                let lifted = <Rem<L, SubHead, Pos> as Sublist<SubTail, Positions>>::lift(rest);
                insert_tag(Pos::TAG, lifted)
            }
        }
    }

    fn project(tag: u8) -> Result<u8, u8> {
        match remove_tag(Pos::TAG, tag) {
            None => Ok(0),
            Some(rest) => {
                let projected = <Rem<L, SubHead, Pos> as Sublist<SubTail, Positions>>::project(rest);
                projected.map(|tag| tag + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{align_of, size_of};

    use super::*;
    use crate::T;

    #[test]
    fn union_layout() {
        type R = <T![u8, u64, [u8; 3]] as SumList>::Repr;
        assert_eq!(size_of::<R>(), size_of::<u64>());
        assert_eq!(align_of::<R>(), align_of::<u64>());

        type Big = <T![u16, [u32; 5]] as SumList>::Repr;
        assert_eq!(size_of::<Big>(), 20);
        assert_eq!(align_of::<Big>(), 4);
    }

    #[test]
    fn tag_cells() {
        static_assertions::assert_type_eq_all!(<T![u32] as SumList>::Tag, Solo);
        static_assertions::assert_type_eq_all!(<T![u32, u32] as SumList>::Tag, u8);
        static_assertions::assert_type_eq_all!(<T![u32, u32, i8] as SumList>::Tag, u8);
    }

    #[test]
    fn remainder_tags() {
        assert_eq!(remove_tag(1, 0), Some(0));
        assert_eq!(remove_tag(1, 1), None);
        assert_eq!(remove_tag(1, 2), Some(1));
        assert_eq!(insert_tag(1, 0), 0);
        assert_eq!(insert_tag(1, 1), 2);
    }

    #[test]
    fn sublist_tags() {
        use crate::index::{U0, U2};

        type Map = T![U2, U0];
        type Full = T![u8, u16, u32];
        type Sub = T![u32, u8];

        assert_eq!(<Full as Sublist<Sub, Map>>::lift(0), 2);
        assert_eq!(<Full as Sublist<Sub, Map>>::lift(1), 0);
        assert_eq!(<Full as Sublist<Sub, Map>>::project(2), Ok(0));
        assert_eq!(<Full as Sublist<Sub, Map>>::project(0), Ok(1));
        assert_eq!(<Full as Sublist<Sub, Map>>::project(1), Err(0));
        static_assertions::assert_type_eq_all!(<Full as Sublist<Sub, Map>>::Complement, T![u16]);
    }
}
