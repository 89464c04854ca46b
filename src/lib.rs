//! Security response headers for axum/tower services.
//!
//! ```ignore
//! use secure_headers::middleware::security_headers::{self, Mode, PolicyBuilder};
//!
//! let policy = PolicyBuilder::new(Mode::Api).transport_security(true).build();
//! let app = security_headers::apply(router, policy);
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;

pub use middleware::security_headers::{
    ContentSecurityPolicy, ContentTypeOptions, HeaderRule, Mode, PolicyBuilder, PolicySet,
    SecurityHeaders, SecurityHeadersLayer,
};
