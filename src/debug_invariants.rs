//! Opt-in structural invariant checking.
//!
//! Stateful structures with internal cross-indexes (the multi-set container,
//! generated meshes) implement [`DebugInvariants`] so corruption is caught
//! where it happens rather than where it is observed. Checks run in debug
//! builds and under the `strict-invariants`/`check-invariants` features;
//! release builds pay nothing.

use crate::error::GridBoxError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), GridBoxError>;
}

/// Runs a fallible check and panics on error when invariant checking is
/// enabled; compiles to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
