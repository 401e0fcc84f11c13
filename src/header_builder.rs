use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::policy::CorsPolicy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    /// `Access-Control-Allow-Origin` for an origin that already passed the allow check.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> HeaderCollection {
        if self.policy.allow_all_origins() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            return headers;
        }

        let mut headers = HeaderCollection::with_estimate(4);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.add_vary(header::ORIGIN);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        Self::list_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.policy.allow_methods(),
        )
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        Self::list_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.policy.allow_headers(),
        )
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        Self::list_header(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.policy.expose_headers(),
        )
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let max_age = self.policy.max_age();
        if max_age.is_zero() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.as_secs().to_string());
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if !self.policy.allow_credentials() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        headers
    }

    fn list_header(name: &str, values: &[String]) -> HeaderCollection {
        if values.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(name, values.join(","));
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
