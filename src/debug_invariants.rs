//! Structural self-checks for graph and label tables.

use crate::connectivity_error::ConnectivityError;

/// A value whose internal consistency can be checked on demand.
pub trait DebugInvariants {
    /// First broken invariant, if any.
    fn validate_invariants(&self) -> Result<(), ConnectivityError>;

    /// Panics on a broken invariant in debug builds or under the
    /// `check-invariants` feature; a no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), std::any::type_name::<Self>());
    }
}

/// Panics with `what` and the error when `$check` fails and invariant
/// checking is compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $what:expr) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $check {
            panic!("{} failed invariant check: {}", $what, e);
        }
    };
}
