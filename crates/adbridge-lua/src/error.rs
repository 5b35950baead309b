//! Error types for the Lua adapter.

use adbridge_types::ErrorCode;
use thiserror::Error;

/// Errors raised while wiring the `ads` module into a Lua state.
///
/// | Code | Recoverable | Meaning |
/// |------|-------------|---------|
/// | `LUA_RUNTIME` | no | the Lua state rejected an operation |
/// | `LUA_MISSING_CALLBACK` | no | a trigger was called without a callback function |
/// | `LUA_BAD_PARAMS` | no | the init params table is malformed |
#[derive(Debug, Error)]
pub enum AdsLuaError {
    /// Lua runtime error.
    #[error("lua error: {0}")]
    Runtime(#[from] mlua::Error),

    /// A trigger was called without a callback function argument.
    #[error("missing callback: {0}")]
    MissingCallback(String),

    /// The init params table is missing or malformed.
    #[error("bad params: {0}")]
    BadParams(String),
}

impl ErrorCode for AdsLuaError {
    fn code(&self) -> &'static str {
        match self {
            Self::Runtime(_) => "LUA_RUNTIME",
            Self::MissingCallback(_) => "LUA_MISSING_CALLBACK",
            Self::BadParams(_) => "LUA_BAD_PARAMS",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adbridge_types::assert_error_codes;

    #[test]
    fn codes_follow_the_crate_prefix() {
        assert_error_codes(
            &[
                AdsLuaError::MissingCallback("init".into()),
                AdsLuaError::BadParams("app_key".into()),
            ],
            "LUA_",
        );
    }

    #[test]
    fn nothing_here_is_recoverable() {
        assert!(!AdsLuaError::MissingCallback("show".into()).is_recoverable());
    }
}
