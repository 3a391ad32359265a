//! The closed sum type.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{self, Deref, DerefMut},
    ptr,
};

pub mod derive;
pub mod dispatch;
pub mod repr;

use self::repr::{Sublist, SumList, TagCell};
use crate::{
    error::AccessError,
    index::{Arity, Index, UTerm},
    select::{At, Select},
};

pub type Repr<S> = <S as SumList>::Repr;

static_assertions::assert_eq_size!(Sum![u64], u64);
static_assertions::assert_eq_size!(Sum![u32, u8], [u32; 2]);
static_assertions::assert_eq_size!(Sum![(), ()], u8);

/// Moves the active alternative of one representation into the
/// representation of another list that holds the same alternative.
///
/// # Safety
///
/// The active alternative of `src` must be an alternative of `B`, and `src`
/// must not be used or dropped afterwards.
unsafe fn relayout<A, B>(src: &ManuallyDrop<A>) -> B {
    let mut dst = MaybeUninit::<B>::uninit();
    let len = mem::size_of::<A>().min(mem::size_of::<B>());
    unsafe {
        ptr::copy_nonoverlapping(
            (src as *const ManuallyDrop<A>).cast::<u8>(),
            dst.as_mut_ptr().cast::<u8>(),
            len,
        );
        dst.assume_init()
    }
}

/// A value of exactly one of the types in list `S`, tagged with the index of
/// that type.
///
/// The alternative is picked by the value's type in [`Sum::new`], or by an
/// index token in [`Sum::with`] when a type appears more than once.
///
/// # Examples
///
/// ```rust
/// use sumtup::{index::*, t, Sum};
///
/// let mut s: Sum![i32, String] = Sum::new(5);
/// assert!(s.is(0));
/// assert_eq!(s.match_ref(t![|n: &i32| n * 2, |s: &String| s.len() as i32]), 10);
///
/// s = Sum::new("hi".to_string());
/// assert!(s.is(1));
/// assert_eq!(s.get(U1), "hi");
/// assert!(s.try_get(U0).is_err());
/// ```
///
/// # Build failures
///
/// A repeated type cannot pick its alternative by value:
///
/// ```compile_fail
/// use sumtup::Sum;
///
/// let s: Sum![u8, u8] = Sum::new(1u8);
/// ```
///
/// A match takes exactly one handler per alternative:
///
/// ```compile_fail
/// use sumtup::{t, Sum};
///
/// let s: Sum![u8, char] = Sum::new(1u8);
/// s.match_ref(t![|_: &u8| ()]);
/// ```
///
/// Indices past the last alternative do not exist:
///
/// ```compile_fail
/// use sumtup::{index::U2, Sum};
///
/// let s: Sum![u8, char] = Sum::new(1u8);
/// s.get(U2);
/// ```
///
/// The empty sum has no alternative to build:
///
/// ```compile_fail
/// use sumtup::{index::U0, Sum};
///
/// let s: Sum![] = Sum::with(U0, ());
/// ```
///
/// And neither does a sum of more than [`MAX_ARITY`](crate::MAX_ARITY)
/// alternatives:
///
/// ```compile_fail
/// use sumtup::{index::U0, Sum};
///
/// let s: Sum![u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8] = Sum::with(U0, 0);
/// ```
pub struct Sum<S: SumList> {
    tag: S::Tag,
    data: ManuallyDrop<Repr<S>>,
}

impl<T> From<T> for Sum![T] {
    /// Construct a `Sum` of one type from a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtup::Sum;
    ///
    /// let s: Sum![i32] = 42.into();
    /// assert_eq!(*s, 42);
    /// ```
    fn from(value: T) -> Self {
        Sum::new(value)
    }
}

impl<T> Deref for Sum![T] {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*<(T, ()) as repr::Split<T, UTerm>>::as_ptr(&self.data) }
    }
}

impl<T> DerefMut for Sum![T] {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *<(T, ()) as repr::Split<T, UTerm>>::as_mut_ptr(&mut self.data) }
    }
}

impl<T> Sum![T] {
    pub fn into_inner(self) -> T {
        let mut this = ManuallyDrop::new(self);
        let data = unsafe { ManuallyDrop::take(&mut this.data) };
        unsafe { <(T, ()) as repr::Split<T, UTerm>>::into_data_unchecked(data) }
    }
}

impl Sum![] {
    /// The empty sum has no values, so holding one proves the code is dead.
    pub fn unreachable(self) -> ! {
        match self.data.0 {}
    }
}

impl<S: SumList> Sum<S> {
    /// The number of alternatives.
    pub const SIZE: usize = S::LEN;

    fn from_parts(tag: u8, data: Repr<S>) -> Self {
        Sum {
            tag: S::Tag::new(tag),
            data: ManuallyDrop::new(data),
        }
    }

    fn tag(&self) -> u8 {
        self.tag.get()
    }

    /// [`Sum::SIZE`] through a value.
    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    /// The discriminant: the position of the active alternative.
    pub fn index(&self) -> usize {
        usize::from(self.tag())
    }

    pub fn is(&self, index: usize) -> bool {
        self.index() == index
    }
}

impl<S: SumList> Sum<S> {
    /// Builds the sum from the alternative whose type is `T`.
    ///
    /// `U` is inferred from `T`, which fails when `T` appears more than once
    /// in `S`; use [`Sum::with`] for those.
    pub fn new<T, U>(value: T) -> Self
    where
        S: repr::Split<T, U>,
        S::Len: Arity,
        U: Index,
    {
        Self::from_parts(U::TAG, S::from_data(value))
    }

    /// Builds alternative `U` from `value`.
    pub fn with<T, U>(_: U, value: T) -> Self
    where
        S: repr::Split<T, U>,
        S::Len: Arity,
        U: Index,
    {
        Self::new::<T, U>(value)
    }

    /// Builds alternative `U` from the value `make` returns.
    pub fn emplace<T, U, F>(index: U, make: F) -> Self
    where
        S: repr::Split<T, U>,
        S::Len: Arity,
        U: Index,
        F: FnOnce() -> T,
    {
        Self::with(index, make())
    }

    /// Borrows alternative `U`.
    ///
    /// # Panics
    ///
    /// Panics if `U` is not the active alternative.
    #[track_caller]
    pub fn get<T, U>(&self, index: U) -> &T
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        match self.try_get(index) {
            Ok(value) => value,
            Err(err) => err.violated(),
        }
    }

    /// Mutably borrows alternative `U`.
    ///
    /// # Panics
    ///
    /// Panics if `U` is not the active alternative.
    #[track_caller]
    pub fn get_mut<T, U>(&mut self, index: U) -> &mut T
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        match self.try_get_mut(index) {
            Ok(value) => value,
            Err(err) => err.violated(),
        }
    }

    /// Moves alternative `U` out of the sum.
    ///
    /// # Panics
    ///
    /// Panics if `U` is not the active alternative.
    #[track_caller]
    pub fn take<T, U>(self, index: U) -> T
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        match self.try_take(index) {
            Ok(value) => value,
            Err(this) => AccessError {
                requested: U::INDEX,
                active: this.index(),
            }
            .violated(),
        }
    }

    pub fn try_get<T, U>(&self, _: U) -> Result<&T, AccessError>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        AccessError::check(U::INDEX, self.index())?;
        Ok(unsafe { &*S::as_ptr(&self.data) })
    }

    pub fn try_get_mut<T, U>(&mut self, _: U) -> Result<&mut T, AccessError>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        AccessError::check(U::INDEX, self.index())?;
        Ok(unsafe { &mut *S::as_mut_ptr(&mut self.data) })
    }

    /// Moves alternative `U` out, or hands the sum back untouched.
    pub fn try_take<T, U>(self, _: U) -> Result<T, Self>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        if self.tag() != U::TAG {
            return Err(self);
        }
        let mut this = ManuallyDrop::new(self);
        Ok(unsafe { S::into_data_unchecked(ManuallyDrop::take(&mut this.data)) })
    }
}

impl<S: SumList> Sum<S> {
    /// Calls the handler of the active alternative with a shared reference to
    /// it and returns the handler's result. The other handlers are dropped
    /// uncalled.
    pub fn match_ref<'a, F, R>(&'a self, handlers: F) -> R
    where
        S: dispatch::MatchRef<'a, F, R>,
    {
        unsafe { S::match_ref(&self.data, self.tag(), handlers) }
    }

    /// Like [`Sum::match_ref`], with a unique reference.
    pub fn match_mut<'a, F, R>(&'a mut self, handlers: F) -> R
    where
        S: dispatch::MatchMut<'a, F, R>,
    {
        let tag = self.tag();
        unsafe { S::match_mut(&mut self.data, tag, handlers) }
    }

    /// Like [`Sum::match_ref`], consuming the sum.
    pub fn match_into<F, R>(self, handlers: F) -> R
    where
        S: dispatch::MatchInto<F, R>,
    {
        let mut this = ManuallyDrop::new(self);
        let tag = this.tag();
        unsafe { S::match_into(ManuallyDrop::take(&mut this.data), tag, handlers) }
    }
}

pub type Rem<S, T, U> = <S as repr::Split<T, U>>::Remainder;
pub type Substitute<S, T, T2, U> = <S as repr::Split<T, U>>::Substitute<T2>;

impl<S: SumList> Sum<S> {
    /// Extracts the alternative of type `T`, or returns the rest as a sum of
    /// the remaining alternatives.
    pub fn try_unwrap<T, U>(self) -> Result<T, Sum<Rem<S, T, U>>>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        let mut this = ManuallyDrop::new(self);
        match repr::remove_tag(U::TAG, this.tag()) {
            None => Ok(unsafe { S::into_data_unchecked(ManuallyDrop::take(&mut this.data)) }),
            Some(tag) => Err(Sum::from_parts(tag, unsafe { relayout(&this.data) })),
        }
    }

    /// Replaces alternative `U` with `f` applied to it; other alternatives
    /// pass through unchanged.
    pub fn map<T, T2, U>(self, _: U, f: impl FnOnce(T) -> T2) -> Sum<Substitute<S, T, T2, U>>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        let mut this = ManuallyDrop::new(self);
        let tag = this.tag();
        if tag != U::TAG {
            return Sum::from_parts(tag, unsafe { relayout(&this.data) });
        }
        let data = f(unsafe { S::into_data_unchecked(ManuallyDrop::take(&mut this.data)) });
        Sum::from_parts(tag, <Substitute<S, T, T2, U> as repr::Split<T2, U>>::from_data(data))
    }
}

pub type Complement<S, S2, UMap> = <S as Sublist<S2, UMap>>::Complement;

impl<S: SumList> Sum<S> {
    /// Converts into a sum over the sub-list `S2`, or into a sum over the
    /// alternatives left out of `S2`.
    ///
    /// `UMap` lists, for every alternative of `S2`, its index in `S`; it can
    /// be inferred when no type repeats.
    pub fn narrow<S2, UMap>(self) -> Result<Sum<S2>, Sum<Complement<S, S2, UMap>>>
    where
        S: Sublist<S2, UMap>,
        S2: SumList,
    {
        let this = ManuallyDrop::new(self);
        match <S as Sublist<S2, UMap>>::project(this.tag()) {
            Ok(tag) => Ok(Sum::from_parts(tag, unsafe { relayout(&this.data) })),
            Err(tag) => Err(Sum::from_parts(tag, unsafe { relayout(&this.data) })),
        }
    }

    /// Converts into a sum over the super-list `S2`, keeping the active value.
    pub fn broaden<S2, UMap>(self) -> Sum<S2>
    where
        S2: Sublist<S, UMap>,
        S2::Len: Arity,
    {
        let this = ManuallyDrop::new(self);
        let tag = <S2 as Sublist<S, UMap>>::lift(this.tag());
        Sum::from_parts(tag, unsafe { relayout(&this.data) })
    }
}

impl<S: SumList, U> ops::Index<U> for Sum<S>
where
    S: Select<U> + repr::Split<At<S, U>, U>,
    U: Index,
{
    type Output = At<S, U>;

    #[track_caller]
    fn index(&self, index: U) -> &Self::Output {
        self.get(index)
    }
}

impl<S: SumList, U> ops::IndexMut<U> for Sum<S>
where
    S: Select<U> + repr::Split<At<S, U>, U>,
    U: Index,
{
    #[track_caller]
    fn index_mut(&mut self, index: U) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<S: derive::SumDebug> fmt::Debug for Sum<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Active<'a, S: derive::SumDebug>(&'a Sum<S>);

        impl<S: derive::SumDebug> fmt::Debug for Active<'_, S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                unsafe { S::debug(&self.0.data, self.0.tag(), f) }
            }
        }

        f.debug_struct("Sum")
            .field("index", &self.index())
            .field("value", &Active(self))
            .finish()
    }
}

impl<S: derive::SumDisplay> fmt::Display for Sum<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsafe { S::display(&self.data, self.tag(), f) }
    }
}

impl<S: SumList> Drop for Sum<S> {
    fn drop(&mut self) {
        let tag = self.tag();
        unsafe { S::drop(&mut self.data, tag) }
    }
}

impl<S: derive::SumClone> Clone for Sum<S> {
    fn clone(&self) -> Self {
        Sum {
            tag: self.tag,
            data: unsafe { S::clone(&self.data, self.tag()) },
        }
    }

    /// Destroys the current alternative and copies in `source`'s.
    ///
    /// The copy is made before the old value is dropped, so a panicking
    /// `clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<S: SumList> Sum<S> {
    /// The tag both sums share, or the order of their discriminants when they
    /// differ.
    fn common_tag(&self, other: &Self) -> Result<u8, Ordering> {
        match self.index().cmp(&other.index()) {
            Ordering::Equal => Ok(self.tag()),
            unequal => Err(unequal),
        }
    }
}

impl<S: derive::SumPartialEq> PartialEq for Sum<S> {
    fn eq(&self, other: &Self) -> bool {
        self.common_tag(other)
            .is_ok_and(|tag| unsafe { S::eq(&self.data, &other.data, tag) })
    }
}

impl<S: derive::SumPartialEq + Eq> Eq for Sum<S> {}

/// Discriminants order first; values of the same alternative compare by
/// value.
impl<S: derive::SumPartialOrd> PartialOrd for Sum<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.common_tag(other) {
            Ok(tag) => unsafe { S::partial_cmp(&self.data, &other.data, tag) },
            Err(order) => Some(order),
        }
    }
}

impl<S: derive::SumOrd + Eq> Ord for Sum<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.common_tag(other) {
            Ok(tag) => unsafe { S::cmp(&self.data, &other.data, tag) },
            Err(order) => order,
        }
    }
}

impl<S: derive::SumHash> Hash for Sum<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.index());
        unsafe { S::hash(&self.data, self.tag(), state) }
    }
}
