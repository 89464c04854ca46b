//! Security-related response headers.
//!
//! Responsibility:
//! - Clickjacking protection (`X-Frame-Options`)
//! - MIME sniffing protection (`X-Content-Type-Options`)
//! - Content Security Policy
//! - Legacy XSS filter hint (`X-XSS-Protection`)
//! - Optional HSTS (`Strict-Transport-Security`)
//!
//! The policy is built once at startup and shared read-only by every request.
//! The layer only touches response headers; body and status pass through.

pub mod builder;
pub mod policy;
pub mod rule;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::Router;
use axum::http::{Request, Response};
use tower::{Layer, Service};

pub use builder::{Mode, PolicyBuilder};
pub use policy::PolicySet;
pub use rule::{ContentSecurityPolicy, ContentTypeOptions, HeaderRule};

/// Attach the security header policy to every route of `router`.
pub fn apply<S>(router: Router<S>, policy: PolicySet) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    tracing::info!(
        headers = ?policy.header_names(),
        "security headers enabled"
    );
    router.layer(SecurityHeadersLayer::new(policy))
}

#[derive(Debug, Clone)]
pub struct SecurityHeadersLayer {
    policy: Arc<PolicySet>,
}

impl SecurityHeadersLayer {
    pub fn new(policy: PolicySet) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeaders {
            inner,
            policy: Arc::clone(&self.policy),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SecurityHeaders<S> {
    inner: S,
    policy: Arc<PolicySet>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SecurityHeaders<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let policy = Arc::clone(&self.policy);
        let future = self.inner.call(req);

        Box::pin(async move {
            // An inner error leaves no response to decorate; pass it through as is.
            let mut response = future.await?;
            policy.apply(&mut response);
            Ok(response)
        })
    }
}
