use crate::constants::{method, status};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;
use tracing::{debug, trace};

/// Per-request CORS filter over an immutable [`CorsPolicy`].
///
/// Evaluation is synchronous and lock-free; share one instance behind an `Arc` across
/// every request handler.
#[derive(Debug, Clone)]
pub struct CorsMiddleware {
    policy: CorsPolicy,
}

impl CorsMiddleware {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        Ok(Self::from_policy(CorsPolicy::new(options)?))
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Classifies the request and computes the headers to attach.
    ///
    /// A rejected origin yields `403` with no CORS headers but does not terminate: later
    /// stages still run and the browser blocks the response client-side.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.cross_origin() else {
            trace!(method = request.method, "same-origin request, skipping CORS");
            return CorsDecision::not_applicable();
        };

        let is_preflight = request.method.eq_ignore_ascii_case(method::OPTIONS);

        if !self.policy.is_origin_allowed(origin) {
            debug!(origin, method = request.method, "CORS origin rejected");
            return CorsDecision {
                is_cross_origin: true,
                is_preflight,
                origin_allowed: false,
                headers: Default::default(),
                status: Some(status::FORBIDDEN),
                terminate: false,
            };
        }

        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = HeaderCollection::new();
        if is_preflight {
            headers.extend(builder.build_methods_header());
            headers.extend(builder.build_allowed_headers());
            headers.extend(builder.build_max_age_header());
        }
        headers.extend(builder.build_origin_headers(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        let terminate = is_preflight && self.policy.supports_preflight_method(request.method);
        if terminate {
            debug!(origin, "CORS preflight answered with 204");
        } else {
            trace!(origin, method = request.method, is_preflight, "CORS origin allowed");
        }

        CorsDecision {
            is_cross_origin: true,
            is_preflight,
            origin_allowed: true,
            headers: headers.into_headers(),
            status: terminate.then_some(status::NO_CONTENT),
            terminate,
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
