use std::{env, ffi::OsString, fmt};

/// Environment variable holding the value this function exposes.
pub const SECRET_VAR: &str = "EXAMPLE_SECRET";

/// Rendered in place of the value when [`SECRET_VAR`] is not set.
pub const ABSENT_PLACEHOLDER: &str = "undefined";

/// The configured secret as seen at one point in time.
///
/// `None` means the variable was not set at all. An empty string is a
/// present value and renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretValue(Option<String>);

impl SecretValue {
    /// Reads [`SECRET_VAR`] from the process environment.
    pub fn from_env() -> Self {
        Self::read_with(|key| env::var_os(key))
    }

    /// Reads [`SECRET_VAR`] through `lookup`.
    ///
    /// The value is otherwise passed through untouched. The one exception is a
    /// value that is not valid Unicode: it is kept as present, with invalid
    /// sequences replaced by U+FFFD, since the response body is text.
    pub fn read_with<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        Self(lookup(SECRET_VAR).map(|value| value.to_string_lossy().into_owned()))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_deref().unwrap_or(ABSENT_PLACEHOLDER))
    }
}
