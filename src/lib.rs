pub mod constants;
mod context;
mod header_builder;
mod headers;
mod middleware;
mod options;
mod policy;
mod result;
mod util;

pub use context::RequestContext;
pub use headers::{Header, Headers};
pub use middleware::CorsMiddleware;
pub use options::{CorsOptions, ValidationError};
pub use policy::CorsPolicy;
pub use result::CorsDecision;
pub use util::{canonical_header_name, normalize_values};
