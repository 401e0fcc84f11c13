use crate::headers::Headers;

/// Outcome of evaluating one request against a [`crate::CorsPolicy`].
///
/// Lives for a single request. Adapters append `headers` to the outgoing response, apply
/// `status` when present, and skip the rest of the pipeline when `terminate` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsDecision {
    /// An `Origin` header was present and non-empty.
    pub is_cross_origin: bool,
    pub is_preflight: bool,
    pub origin_allowed: bool,
    pub headers: Headers,
    /// `403` for a rejected origin, `204` for a short-circuited preflight.
    pub status: Option<u16>,
    /// Respond immediately with `status` and an empty body.
    pub terminate: bool,
}

impl CorsDecision {
    /// Same-origin request: nothing to add, nothing to change.
    pub fn not_applicable() -> Self {
        Self::default()
    }

    pub fn is_forbidden(&self) -> bool {
        self.is_cross_origin && !self.origin_allowed
    }
}
