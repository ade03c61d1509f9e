// SPDX-License-Identifier: MPL-2.0

use core::fmt;

/// The error type returned from the APIs of this crate.
///
/// Variants correspond 1:1 to the error kinds of the on-wire/ABI contract;
/// no numeric codes are exposed here (see the `raw_errno` module for that
/// opt-in boundary).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// A required handle/reference argument was null or otherwise absent.
    NullArg,
    /// The structure has not been initialized (magic marker missing/stale).
    NotInit,
    /// A context id was outside the configured range.
    BadCtx,
    /// `try_lock` could not acquire the lock without blocking.
    Busy,
    /// The list/region has no elements to operate on.
    Empty,
    /// The allocator has no contiguous run large enough to satisfy a request.
    NoSpace,
    /// An address or size argument falls outside a valid range.
    BadRange,
    /// A slave attach was rejected because published parameters did not match.
    AccessDenied,
    /// Iteration wrapped past the sentinel; non-fatal, forward progress is made.
    ListOverflow,
    /// An argument failed validation that did not fit a more specific kind.
    InvalidArg,
    /// An internal consistency check failed (e.g. stored size vs. layout).
    InternalFault,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::NullArg => "null argument",
            Error::NotInit => "not initialized",
            Error::BadCtx => "context id out of range",
            Error::Busy => "lock busy",
            Error::Empty => "empty",
            Error::NoSpace => "no space",
            Error::BadRange => "argument out of range",
            Error::AccessDenied => "access denied",
            Error::ListOverflow => "list iteration overflow",
            Error::InvalidArg => "invalid argument",
            Error::InternalFault => "internal fault",
        };
        f.write_str(msg)
    }
}

/// `Result` alias used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Opt-in export of the error kinds as the opaque integer codes the original
/// C ABI used. The numeric codes themselves are treated as an external,
/// non-goal contract (spec.md §1); this module exists only so FFI callers
/// that must hand an `int` across a boundary have a single, documented place
/// to do the conversion instead of inventing their own mapping.
#[cfg(feature = "raw_errno")]
pub mod raw_errno {
    use super::Error;

    pub const OK: i32 = 0;
    pub const NULL_ARG: i32 = -1;
    pub const NOT_INIT: i32 = -2;
    pub const BAD_CTX: i32 = -3;
    pub const BUSY: i32 = -4;
    pub const EMPTY: i32 = -5;
    pub const NO_SPACE: i32 = -6;
    pub const BAD_RANGE: i32 = -7;
    pub const ACCESS_DENIED: i32 = -8;
    pub const LIST_OVERFLOW: i32 = -9;
    pub const INVALID_ARG: i32 = -10;
    pub const INTERNAL_FAULT: i32 = -11;

    impl From<Error> for i32 {
        fn from(e: Error) -> i32 {
            match e {
                Error::NullArg => NULL_ARG,
                Error::NotInit => NOT_INIT,
                Error::BadCtx => BAD_CTX,
                Error::Busy => BUSY,
                Error::Empty => EMPTY,
                Error::NoSpace => NO_SPACE,
                Error::BadRange => BAD_RANGE,
                Error::AccessDenied => ACCESS_DENIED,
                Error::ListOverflow => LIST_OVERFLOW,
                Error::InvalidArg => INVALID_ARG,
                Error::InternalFault => INTERNAL_FAULT,
            }
        }
    }
}
