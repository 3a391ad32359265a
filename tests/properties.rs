//! Property tests for the value semantics of `Sum` and `Tuple`.
//!
//! Each property runs over generated alternatives of a three-way sum with a
//! repeated type, so both inferred and explicit construction are covered.

use std::cell::Cell;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sumtup::{index::*, t, tuple, Sum, Tuple};

type Mixed = Sum![i64, String, i64];

fn mixed_strategy() -> impl Strategy<Value = Mixed> {
    prop_oneof![
        any::<i64>().prop_map(|n| Mixed::with(U0, n)),
        "[a-z]{0,12}".prop_map(|s: String| Mixed::new(s)),
        any::<i64>().prop_map(|n| Mixed::with(U2, n)),
    ]
}

/// The discriminant and a rendering of the live value, read through `match`.
fn observe(s: &Mixed) -> (usize, String) {
    s.match_ref(t![
        |n: &i64| (0, n.to_string()),
        |s: &String| (1, s.clone()),
        |n: &i64| (2, n.to_string()),
    ])
}

proptest! {
    #[test]
    fn clone_preserves_discriminant_and_value(s in mixed_strategy()) {
        let copy = s.clone();
        prop_assert_eq!(copy.index(), s.index());
        prop_assert_eq!(observe(&copy), observe(&s));
        prop_assert!(copy == s);
    }

    #[test]
    fn move_preserves_discriminant_and_value(s in mixed_strategy()) {
        let before = observe(&s);
        let moved = s;
        prop_assert_eq!(observe(&moved), before);
    }

    #[test]
    fn is_matches_only_the_discriminant(s in mixed_strategy()) {
        for i in 0..Mixed::SIZE {
            prop_assert_eq!(s.is(i), i == s.index());
        }
    }

    #[test]
    fn match_invokes_exactly_the_active_handler(s in mixed_strategy()) {
        let calls = [Cell::new(0), Cell::new(0), Cell::new(0)];
        let hit = |i: usize| {
            calls[i].set(calls[i].get() + 1);
            i
        };
        let picked = s.match_ref(t![|_: &i64| hit(0), |_: &String| hit(1), |_: &i64| hit(2)]);

        prop_assert_eq!(picked, s.index());
        for (i, count) in calls.iter().enumerate() {
            prop_assert_eq!(count.get(), usize::from(i == s.index()));
        }
    }

    #[test]
    fn checked_access_agrees_with_discriminant(s in mixed_strategy()) {
        prop_assert_eq!(s.try_get(U0).is_ok(), s.is(0));
        prop_assert_eq!(s.try_get(U1).is_ok(), s.is(1));
        prop_assert_eq!(s.try_get(U2).is_ok(), s.is(2));
    }

    #[test]
    fn clone_from_overwrites(a in mixed_strategy(), b in mixed_strategy()) {
        let mut a = a;
        a.clone_from(&b);
        prop_assert_eq!(observe(&a), observe(&b));
    }

    #[test]
    fn tuple_slots_keep_construction_values(a in any::<u16>(), b in ".{0,8}", c in any::<bool>()) {
        let t: Tuple![u16, String, bool] = tuple!(a, b.clone(), c);
        prop_assert_eq!(*t.get(U0), a);
        prop_assert_eq!(t.get(U1), &b);
        prop_assert_eq!(*t.get(U2), c);
    }
}

#[test]
fn concrete_scenario() {
    let mut s: Sum![i32, String] = Sum::new(5);
    assert!(s.is(0));
    assert_eq!(
        s.match_ref(t![|n: &i32| format!("f_int({n})"), |s: &String| format!("f_str({s})")]),
        "f_int(5)"
    );

    s = Sum::new(String::from("hi"));
    assert!(s.is(1));
    assert!(std::panic::catch_unwind(|| {
        let _ = s.get(U0);
    })
    .is_err());
    assert_eq!(
        s.match_ref(t![|n: &i32| format!("f_int({n})"), |s: &String| format!("f_str({s})")]),
        "f_str(hi)"
    );
}
