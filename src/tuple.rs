//! The fixed-arity product type.

use core::{fmt, ops};

use crate::{
    index::{Arity, Index},
    select::{At, List, Select},
};

/// A heterogeneous product of the types in list `L`.
///
/// Every slot is always initialized; slots are reached through index
/// tokens, so an out-of-range slot is a build failure rather than a runtime
/// check.
///
/// # Examples
///
/// ```rust
/// use sumtup::{index::*, tuple, Tuple};
///
/// let mut t: Tuple![u8, String] = tuple!(1, "one".to_string());
/// t[U0] += 1;
/// t.get_mut(U1).push('!');
/// assert_eq!((t[U0], t.get(U1).as_str()), (2, "one!"));
/// ```
///
/// More than [`MAX_ARITY`](crate::MAX_ARITY) slots do not build:
///
/// ```compile_fail
/// use sumtup::Tuple;
///
/// let t: Tuple![u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8] = Default::default();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple<L: List> {
    slots: L,
}

impl<L: List> Tuple<L> {
    /// The number of slots.
    pub const SIZE: usize = L::LEN;

    pub const fn new(slots: L) -> Self
    where
        L::Len: Arity,
    {
        Tuple { slots }
    }

    /// [`Tuple::SIZE`] through a value.
    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    pub fn get<U: Index>(&self, _: U) -> &At<L, U>
    where
        L: Select<U>,
    {
        self.slots.select()
    }

    pub fn get_mut<U: Index>(&mut self, _: U) -> &mut At<L, U>
    where
        L: Select<U>,
    {
        self.slots.select_mut()
    }

    /// Moves slot `U` out, dropping the others.
    pub fn take<U: Index>(self, _: U) -> At<L, U>
    where
        L: Select<U>,
    {
        self.slots.into_selected()
    }

    pub fn as_inner(&self) -> &L {
        &self.slots
    }

    pub fn into_inner(self) -> L {
        self.slots
    }
}

impl<L: List> From<L> for Tuple<L>
where
    L::Len: Arity,
{
    fn from(slots: L) -> Self {
        Tuple::new(slots)
    }
}

impl<L: List + Default> Default for Tuple<L>
where
    L::Len: Arity,
{
    fn default() -> Self {
        Tuple::new(L::default())
    }
}

impl<L, U> ops::Index<U> for Tuple<L>
where
    L: Select<U>,
    U: Index,
{
    type Output = At<L, U>;

    fn index(&self, index: U) -> &Self::Output {
        self.get(index)
    }
}

impl<L, U> ops::IndexMut<U> for Tuple<L>
where
    L: Select<U>,
    U: Index,
{
    fn index_mut(&mut self, index: U) -> &mut Self::Output {
        self.get_mut(index)
    }
}

/// Type lists whose elements can all be debug-printed.
pub trait ListDebug: List {
    #[doc(hidden)]
    fn fields(&self, f: &mut fmt::DebugTuple<'_, '_>);
}

impl ListDebug for () {
    fn fields(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<Head: fmt::Debug, Tail: ListDebug> ListDebug for (Head, Tail) {
    fn fields(&self, f: &mut fmt::DebugTuple<'_, '_>) {
        f.field(&self.0);
        self.1.fields(f);
    }
}

impl<L: ListDebug> fmt::Debug for Tuple<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("Tuple");
        self.slots.fields(&mut t);
        t.finish()
    }
}
