/// Constructs a [`struct@Sum`] type from a list of alternative types.
///
/// # Examples
///
/// ```rust
/// use sumtup::Sum;
///
/// type MySum = Sum![i32, u32, f64];
/// let s: MySum = Sum::new(42u32);
/// assert!(s.is(1));
/// ```
#[macro_export]
macro_rules! Sum {
    [$($t:ty),* $(,)?] => [$crate::Sum::<$crate::T![$($t,)*]>];
}

/// Constructs a [`struct@Tuple`] type from a list of slot types.
///
/// The value version of the macro is [`tuple`].
///
/// # Examples
///
/// ```rust
/// use sumtup::{index::U1, tuple, Tuple};
///
/// let pair: Tuple![i32, &str] = tuple!(7, "seven");
/// assert_eq!(*pair.get(U1), "seven");
/// ```
#[macro_export]
macro_rules! Tuple {
    [$($t:ty),* $(,)?] => [$crate::Tuple::<$crate::T![$($t,)*]>];
}

/// Constructs a [`struct@Tuple`] value from a list of slot values.
///
/// The type version of the macro is [`Tuple`](macro@Tuple).
#[macro_export]
macro_rules! tuple {
    ($($v:expr),* $(,)?) => ($crate::Tuple::new($crate::t![$($v,)*]));
}

/// Constructs a type list from a list of types.
///
/// The value version of the macro is [`t`].
///
/// # Examples
///
/// ```rust
/// use sumtup::T;
///
/// type MyList = T![i32, u32, f64];
/// let list: MyList = (42i32, (42u32, (42.0f64, ())));
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Constructs a type list value from a list of values.
///
/// The type version of the macro is [`T`]. Handler lists passed to the
/// `match_*` methods of [`struct@Sum`] are built with it.
///
/// # Examples
///
/// ```rust
/// use sumtup::t;
///
/// type MyList = (i32, (u32, (f64, ())));
/// let list: MyList = t![42i32, 42u32, 42.0f64];
/// ```
#[macro_export]
macro_rules! t {
    [] => [()];
    [$head:expr $(, $t:expr)* $(,)?] => [($head, $crate::t!($($t,)*))];
}
