use cors_gate::constants::method;
use cors_gate::{CorsDecision, CorsMiddleware, CorsOptions, RequestContext};
use std::time::Duration;

#[derive(Default)]
pub struct CorsBuilder {
    allow_all_origins: Option<bool>,
    allow_origins: Option<Vec<String>>,
    allow_methods: Option<Vec<String>>,
    allow_headers: Option<Vec<String>>,
    expose_headers: Option<Vec<String>>,
    credentials: Option<bool>,
    max_age: Option<Duration>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_origin(mut self) -> Self {
        self.allow_all_origins = Some(true);
        self
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: Duration) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn options(self) -> CorsOptions {
        let CorsOptions {
            allow_all_origins: default_all_origins,
            allow_origins: default_origins,
            allow_methods: default_methods,
            allow_headers: default_headers,
            expose_headers: default_exposed,
            allow_credentials: default_credentials,
            max_age: default_max_age,
        } = CorsOptions::default();

        CorsOptions {
            allow_all_origins: self.allow_all_origins.unwrap_or(default_all_origins),
            allow_origins: self.allow_origins.unwrap_or(default_origins),
            allow_methods: self.allow_methods.unwrap_or(default_methods),
            allow_headers: self.allow_headers.unwrap_or(default_headers),
            expose_headers: self.expose_headers.unwrap_or(default_exposed),
            allow_credentials: self.credentials.unwrap_or(default_credentials),
            max_age: self.max_age.unwrap_or(default_max_age),
        }
    }

    pub fn build(self) -> CorsMiddleware {
        CorsMiddleware::new(self.options()).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
}

impl RequestBuilder {
    fn with_method(method: &str) -> Self {
        Self {
            method: method.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &CorsMiddleware) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

/// The CORS configuration used throughout the protocol scenarios.
pub fn scenario_cors() -> CorsBuilder {
    cors()
        .origins(["https://foo.com"])
        .methods([method::PUT, method::PATCH, method::OPTIONS])
        .allowed_headers(["Origin"])
        .exposed_headers(["Content-Length"])
        .credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::with_method(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::with_method(method::OPTIONS)
}
