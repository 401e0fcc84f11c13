use std::sync::Arc;
use std::time::Duration;

use cors_gate::{CorsMiddleware, CorsOptions, ValidationError};

pub mod middleware;

pub use middleware::SharedCors;

#[derive(Clone)]
pub struct AppState {
    pub greeting: &'static str,
}

pub fn build_cors() -> Result<SharedCors, ValidationError> {
    let options = CorsOptions {
        allow_origins: vec!["http://localhost:5173".into(), "https://app.example.com".into()],
        allow_methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
        allow_headers: vec!["content-type".into(), "x-requested-with".into()],
        expose_headers: vec!["x-example-trace".into()],
        allow_credentials: true,
        max_age: Duration::from_secs(600),
        ..CorsOptions::default()
    };

    Ok(Arc::new(CorsMiddleware::new(options)?))
}

pub fn build_state() -> AppState {
    AppState {
        greeting: "Welcome to the Axum CORS example!",
    }
}
