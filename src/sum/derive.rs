//! Per-trait dispatch over the active alternative.
//!
//! Each trait here is implemented for a type list when every element
//! implements the corresponding standard trait. The recursion walks the list
//! one element per step until the tag reaches zero, which is the linear
//! discriminant scan a hand-unrolled tagged union would perform.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
};

use super::repr::{Cons, Nil, SumList};

/// # Safety
///
/// `this` must hold its head alternative.
unsafe fn head<H, T>(this: &Cons<H, T>) -> &H {
    unsafe { &this.data }
}

/// # Safety
///
/// `this` must hold one of its tail alternatives.
unsafe fn tail<H, T>(this: &Cons<H, T>) -> &T {
    unsafe { &this.next }
}

pub trait SumClone: SumList {
    #[doc(hidden)]
    unsafe fn clone(this: &Self::Repr, tag: u8) -> ManuallyDrop<Self::Repr>;
}

impl SumClone for () {
    unsafe fn clone(this: &Nil, _: u8) -> ManuallyDrop<Nil> {
        match this.0 {}
    }
}

impl<Head: Clone, Tail: SumClone> SumClone for (Head, Tail) {
    unsafe fn clone(this: &Self::Repr, tag: u8) -> ManuallyDrop<Self::Repr> {
        ManuallyDrop::new(if tag == 0 {
            Cons {
                data: ManuallyDrop::new(unsafe { head(this) }.clone()),
            }
        } else {
            Cons {
                next: unsafe { Tail::clone(tail(this), tag - 1) },
            }
        })
    }
}

pub trait SumPartialEq: SumList {
    #[doc(hidden)]
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool;
}

impl SumPartialEq for () {
    unsafe fn eq(this: &Nil, _: &Nil, _: u8) -> bool {
        match this.0 {}
    }
}

impl<Head: PartialEq, Tail: SumPartialEq> SumPartialEq for (Head, Tail) {
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool {
        if tag == 0 {
            unsafe { head(this) == head(other) }
        } else {
            unsafe { Tail::eq(tail(this), tail(other), tag - 1) }
        }
    }
}

pub trait SumPartialOrd: SumPartialEq {
    #[doc(hidden)]
    unsafe fn partial_cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Option<Ordering>;
}

impl SumPartialOrd for () {
    unsafe fn partial_cmp(this: &Nil, _: &Nil, _: u8) -> Option<Ordering> {
        match this.0 {}
    }
}

impl<Head: PartialOrd, Tail: SumPartialOrd> SumPartialOrd for (Head, Tail) {
    unsafe fn partial_cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Option<Ordering> {
        if tag == 0 {
            unsafe { head(this).partial_cmp(head(other)) }
        } else {
            unsafe { Tail::partial_cmp(tail(this), tail(other), tag - 1) }
        }
    }
}

pub trait SumOrd: SumPartialOrd {
    #[doc(hidden)]
    unsafe fn cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Ordering;
}

impl SumOrd for () {
    unsafe fn cmp(this: &Nil, _: &Nil, _: u8) -> Ordering {
        match this.0 {}
    }
}

impl<Head: Ord, Tail: SumOrd> SumOrd for (Head, Tail) {
    unsafe fn cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Ordering {
        if tag == 0 {
            unsafe { head(this).cmp(head(other)) }
        } else {
            unsafe { Tail::cmp(tail(this), tail(other), tag - 1) }
        }
    }
}

pub trait SumHash: SumList {
    #[doc(hidden)]
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H);
}

impl SumHash for () {
    unsafe fn hash<H: Hasher>(this: &Nil, _: u8, _: &mut H) {
        match this.0 {}
    }
}

impl<Head: Hash, Tail: SumHash> SumHash for (Head, Tail) {
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H) {
        if tag == 0 {
            unsafe { head(this) }.hash(state)
        } else {
            unsafe { Tail::hash(tail(this), tag - 1, state) }
        }
    }
}

pub trait SumDebug: SumList {
    #[doc(hidden)]
    unsafe fn debug(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl SumDebug for () {
    unsafe fn debug(this: &Nil, _: u8, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match this.0 {}
    }
}

impl<Head: fmt::Debug, Tail: SumDebug> SumDebug for (Head, Tail) {
    unsafe fn debug(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if tag == 0 {
            fmt::Debug::fmt(unsafe { head(this) }, f)
        } else {
            unsafe { Tail::debug(tail(this), tag - 1, f) }
        }
    }
}

pub trait SumDisplay: SumList {
    #[doc(hidden)]
    unsafe fn display(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl SumDisplay for () {
    unsafe fn display(this: &Nil, _: u8, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match this.0 {}
    }
}

impl<Head: fmt::Display, Tail: SumDisplay> SumDisplay for (Head, Tail) {
    unsafe fn display(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if tag == 0 {
            fmt::Display::fmt(unsafe { head(this) }, f)
        } else {
            unsafe { Tail::display(tail(this), tag - 1, f) }
        }
    }
}
