//! The header policy applied to every response.
//!
//! Application order:
//! 1. fixed defaults (`X-Frame-Options`, `X-XSS-Protection`)
//! 2. `Strict-Transport-Security`, when enabled
//! 3. configured rules, in order (content-type options, then CSP)
//!
//! Later writes replace earlier ones, so a configured rule always wins over a
//! fixed default for the same header.

use axum::http::{HeaderMap, HeaderName, HeaderValue, Response, header};

use super::builder::{Mode, PolicyBuilder};
use super::rule::HeaderRule;

const FIXED_DEFAULTS: [(HeaderName, HeaderValue); 2] = [
    (header::X_FRAME_OPTIONS, HeaderValue::from_static("deny")),
    (
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySet {
    transport_security: Option<HeaderRule>,
    rules: Vec<HeaderRule>,
}

impl PolicySet {
    /// Callers go through [`PolicyBuilder`], which guarantees one rule per header.
    pub(super) fn new(transport_security: bool, rules: Vec<HeaderRule>) -> Self {
        Self {
            transport_security: transport_security.then_some(HeaderRule::StrictTransportSecurity),
            rules,
        }
    }

    /// Mode defaults with no overrides and transport security off.
    pub fn for_mode(mode: Mode) -> Self {
        PolicyBuilder::new(mode).build()
    }

    pub fn transport_security_enabled(&self) -> bool {
        self.transport_security.is_some()
    }

    pub fn rules(&self) -> &[HeaderRule] {
        &self.rules
    }

    /// Every header this policy may write, in application order.
    pub fn header_names(&self) -> Vec<HeaderName> {
        FIXED_DEFAULTS
            .iter()
            .map(|(name, _)| name.clone())
            .chain(self.transport_security.iter().map(HeaderRule::name))
            .chain(self.rules.iter().map(HeaderRule::name))
            .collect()
    }

    pub fn apply<B>(&self, response: &mut Response<B>) {
        self.apply_to_headers(response.headers_mut());
    }

    pub fn apply_to_headers(&self, headers: &mut HeaderMap) {
        for (name, value) in FIXED_DEFAULTS {
            headers.insert(name, value);
        }

        if let Some(hsts) = &self.transport_security {
            hsts.apply(headers);
        }

        for rule in &self.rules {
            rule.apply(headers);
        }
    }
}

impl Default for PolicySet {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}
