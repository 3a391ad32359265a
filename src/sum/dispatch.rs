//! Exhaustive matching on a [`Sum`].
//!
//! Handlers travel as a type list built with [`t!`](crate::t), one callable
//! per alternative in alternative order. The list is destructured one pair at
//! a time alongside the alternative list, so the handler count must equal the
//! arity for any of these traits to hold; only the handler at the active
//! position is called.
//!
//! [`Sum`]: crate::Sum

use core::mem::ManuallyDrop;

use super::repr::{Nil, SumList};

/// Handler lists taking each alternative by shared reference.
pub trait MatchRef<'a, F, R>: SumList {
    #[doc(hidden)]
    unsafe fn match_ref(this: &'a Self::Repr, tag: u8, handlers: F) -> R;
}

impl<'a, R> MatchRef<'a, (), R> for () {
    unsafe fn match_ref(this: &'a Nil, _: u8, _: ()) -> R {
        match this.0 {}
    }
}

impl<'a, Head, Tail, F, FTail, R> MatchRef<'a, (F, FTail), R> for (Head, Tail)
where
    Head: 'a,
    Tail: MatchRef<'a, FTail, R> + 'a,
    F: FnOnce(&'a Head) -> R,
{
    unsafe fn match_ref(this: &'a Self::Repr, tag: u8, (f, rest): (F, FTail)) -> R {
        if tag == 0 {
            f(unsafe { &*this.data })
        } else {
            unsafe { Tail::match_ref(&*this.next, tag - 1, rest) }
        }
    }
}

/// Handler lists taking each alternative by unique reference.
pub trait MatchMut<'a, F, R>: SumList {
    #[doc(hidden)]
    unsafe fn match_mut(this: &'a mut Self::Repr, tag: u8, handlers: F) -> R;
}

impl<'a, R> MatchMut<'a, (), R> for () {
    unsafe fn match_mut(this: &'a mut Nil, _: u8, _: ()) -> R {
        match this.0 {}
    }
}

impl<'a, Head, Tail, F, FTail, R> MatchMut<'a, (F, FTail), R> for (Head, Tail)
where
    Head: 'a,
    Tail: MatchMut<'a, FTail, R> + 'a,
    F: FnOnce(&'a mut Head) -> R,
{
    unsafe fn match_mut(this: &'a mut Self::Repr, tag: u8, (f, rest): (F, FTail)) -> R {
        if tag == 0 {
            f(unsafe { &mut *this.data })
        } else {
            unsafe { Tail::match_mut(&mut *this.next, tag - 1, rest) }
        }
    }
}

/// Handler lists taking each alternative by value.
pub trait MatchInto<F, R>: SumList {
    #[doc(hidden)]
    unsafe fn match_into(this: Self::Repr, tag: u8, handlers: F) -> R;
}

impl<R> MatchInto<(), R> for () {
    unsafe fn match_into(this: Nil, _: u8, _: ()) -> R {
        match this.0 {}
    }
}

impl<Head, Tail, F, FTail, R> MatchInto<(F, FTail), R> for (Head, Tail)
where
    Tail: MatchInto<FTail, R>,
    F: FnOnce(Head) -> R,
{
    unsafe fn match_into(this: Self::Repr, tag: u8, (f, rest): (F, FTail)) -> R {
        if tag == 0 {
            f(ManuallyDrop::into_inner(unsafe { this.data }))
        } else {
            let next = ManuallyDrop::into_inner(unsafe { this.next });
            unsafe { Tail::match_into(next, tag - 1, rest) }
        }
    }
}
