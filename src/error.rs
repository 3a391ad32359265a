use thiserror::Error;

/// An access to an alternative of a [`Sum`](crate::Sum) that is not the
/// active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("accessed alternative {requested} but the active alternative is {active}")]
pub struct AccessError {
    /// The index the caller asked for.
    pub requested: usize,
    /// The discriminant at the time of the access.
    pub active: usize,
}

impl AccessError {
    pub(crate) fn check(requested: usize, active: usize) -> Result<(), Self> {
        if requested == active {
            Ok(())
        } else {
            Err(AccessError { requested, active })
        }
    }

    /// Reports a broken access contract and does not return.
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub(crate) fn violated(self) -> ! {
        tracing::error!(
            requested = self.requested,
            active = self.active,
            "sum contract violation"
        );
        panic!("{self}")
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn message_names_both_indices() {
        let err = AccessError {
            requested: 0,
            active: 1,
        };
        assert_eq!(
            err.to_string(),
            "accessed alternative 0 but the active alternative is 1"
        );
    }

    #[test]
    fn check() {
        assert_eq!(AccessError::check(3, 3), Ok(()));
        assert_eq!(
            AccessError::check(2, 3),
            Err(AccessError {
                requested: 2,
                active: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "accessed alternative 4 but the active alternative is 0")]
    fn violation_panics() {
        AccessError {
            requested: 4,
            active: 0,
        }
        .violated()
    }
}
