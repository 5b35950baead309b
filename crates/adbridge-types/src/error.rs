//! Unified error interface.
//!
//! Every error enum in the bridge implements [`ErrorCode`] so that
//! calling hosts can branch on stable machine-readable codes instead
//! of display strings, and so retry logic can ask whether a failure is
//! worth retrying at all.
//!
//! # Code convention
//!
//! - UPPER_SNAKE_CASE
//! - Prefixed with the owning crate's domain: `BRIDGE_` for the
//!   runtime, `LUA_` for the Lua adapter
//! - Stable once published (changing a code is a breaking change)
//!
//! # Example
//!
//! ```
//! use adbridge_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum TriggerError {
//!     MissingAppKey,
//!     SdkBusy,
//! }
//!
//! impl ErrorCode for TriggerError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::MissingAppKey => "BRIDGE_MISSING_APP_KEY",
//!             Self::SdkBusy => "BRIDGE_SDK_BUSY",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         // a missing key won't appear on retry; a busy SDK might free up
//!         matches!(self, Self::SdkBusy)
//!     }
//! }
//!
//! assert_eq!(TriggerError::MissingAppKey.code(), "BRIDGE_MISSING_APP_KEY");
//! assert!(!TriggerError::MissingAppKey.is_recoverable());
//! ```

/// Machine-readable error code interface.
///
/// An error is **recoverable** when retrying the same operation later
/// may succeed (transient condition); it is not recoverable when the
/// input or configuration must change first.
pub trait ErrorCode {
    /// Returns the stable machine-readable code for this error.
    fn code(&self) -> &'static str;

    /// Returns whether retrying the operation may succeed.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code follows the bridge conventions.
///
/// Checks that the code is non-empty, carries the expected prefix, and
/// is UPPER_SNAKE_CASE.
///
/// # Panics
///
/// Panics with a descriptive message on any violation; intended for
/// use inside tests.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Asserts the convention for every variant of an error enum at once.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
