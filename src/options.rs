use crate::constants::method;
use std::time::Duration;
use thiserror::Error;

/// Raw CORS settings, validated and normalized by [`crate::CorsPolicy::new`].
///
/// Blank list entries are dropped. Construction fails with [`ValidationError`] when
/// `allow_all_origins` is combined with `allow_credentials`, or when a method or header name
/// is not a valid HTTP token (for example `"GET,POST"` or `"X Trace"`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CorsOptions {
    /// Answer every origin with `Access-Control-Allow-Origin: *`.
    pub allow_all_origins: bool,
    /// Exact, case-sensitive `Origin` values that are allowed.
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Preflight cache lifetime. Serialized settings carry whole seconds; negative values
    /// are clamped to zero, which suppresses `Access-Control-Max-Age`.
    #[cfg_attr(feature = "serde", serde(with = "max_age_seconds"))]
    pub max_age: Duration,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_all_origins: false,
            allow_origins: Vec::new(),
            allow_methods: vec![
                method::GET.into(),
                method::HEAD.into(),
                method::PUT.into(),
                method::PATCH.into(),
                method::POST.into(),
                method::DELETE.into(),
            ],
            allow_headers: Vec::new(),
            expose_headers: Vec::new(),
            allow_credentials: false,
            max_age: Duration::ZERO,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allow_all_origins cannot be combined with allow_credentials; browsers reject a wildcard origin on credentialed responses"
    )]
    AnyOriginWithCredentials,
    #[error("allowed method `{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("header name `{0}` is not a valid HTTP header token")]
    InvalidHeaderName(String),
}

#[cfg(feature = "serde")]
mod max_age_seconds {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = i64::deserialize(deserializer)?;
        Ok(Duration::from_secs(seconds.max(0).unsigned_abs()))
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
