use crate::constants::method;
use crate::options::{CorsOptions, ValidationError};
use crate::util::{canonical_header_name, is_http_token, normalize_values};
use indexmap::IndexSet;
use std::time::Duration;

/// Validated CORS configuration and the pure predicates evaluated against it.
///
/// Built once, then shared read-only across requests. List settings are normalized here so
/// request evaluation only joins precomputed values.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_all_origins: bool,
    allow_origins: IndexSet<String>,
    allow_methods: Vec<String>,
    allow_headers: Vec<String>,
    expose_headers: Vec<String>,
    allow_credentials: bool,
    max_age: Duration,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        let CorsOptions {
            allow_all_origins,
            allow_origins,
            allow_methods,
            allow_headers,
            expose_headers,
            allow_credentials,
            max_age,
        } = options;

        if allow_all_origins && allow_credentials {
            return Err(ValidationError::AnyOriginWithCredentials);
        }

        let allow_methods = normalize_values(allow_methods)
            .into_iter()
            .map(|value| {
                if is_http_token(&value) {
                    Ok(value.to_ascii_uppercase())
                } else {
                    Err(ValidationError::InvalidMethod(value))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            allow_all_origins,
            allow_origins: allow_origins.into_iter().collect(),
            allow_methods,
            allow_headers: Self::normalize_header_names(allow_headers)?,
            expose_headers: Self::normalize_header_names(expose_headers)?,
            allow_credentials,
            max_age,
        })
    }

    fn normalize_header_names(values: Vec<String>) -> Result<Vec<String>, ValidationError> {
        normalize_values(values)
            .into_iter()
            .map(|value| {
                if is_http_token(&value) {
                    Ok(canonical_header_name(&value))
                } else {
                    Err(ValidationError::InvalidHeaderName(value))
                }
            })
            .collect()
    }

    /// Exact, byte-for-byte allow-list lookup unless every origin is allowed.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allow_all_origins || self.allow_origins.contains(origin)
    }

    /// Whether a preflight for `request_method` is answered here with `204 No Content`.
    ///
    /// Only true when `OPTIONS` is itself one of the allowed methods. Otherwise the preflight
    /// still carries CORS headers but is forwarded downstream.
    pub fn supports_preflight_method(&self, request_method: &str) -> bool {
        request_method.eq_ignore_ascii_case(method::OPTIONS) && self.allows_method(method::OPTIONS)
    }

    pub fn allows_method(&self, method: &str) -> bool {
        self.allow_methods
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(method.trim()))
    }

    pub fn allow_all_origins(&self) -> bool {
        self.allow_all_origins
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    /// Normalized, upper-cased methods in configuration order.
    pub fn allow_methods(&self) -> &[String] {
        &self.allow_methods
    }

    /// Normalized, canonical-cased request headers in configuration order.
    pub fn allow_headers(&self) -> &[String] {
        &self.allow_headers
    }

    pub fn expose_headers(&self) -> &[String] {
        &self.expose_headers
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
