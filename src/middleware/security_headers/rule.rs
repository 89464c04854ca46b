//! Header rules: one unit per security header concern.
//!
//! Every rule writes exactly one header and carries everything it needs to do
//! so. Values are validated when the rule is constructed, so `apply` cannot
//! fail and never looks at the request.

use std::str::FromStr;

use axum::http::{HeaderMap, HeaderName, HeaderValue, header};

use crate::error::PolicyError;

pub const NOSNIFF: HeaderValue = HeaderValue::from_static("nosniff");
pub const HSTS_PRELOAD: HeaderValue =
    HeaderValue::from_static("max-age=31536000; includeSubdomains; preload");

/// Behaviour of the `X-Content-Type-Options` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTypeOptions {
    #[default]
    Nosniff,
    /// Explicitly disables the header.
    None,
}

impl FromStr for ContentTypeOptions {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nosniff" => Ok(Self::Nosniff),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// An opaque `Content-Security-Policy` value.
///
/// The policy grammar is not interpreted; the only check is that the string
/// is a legal header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSecurityPolicy(HeaderValue);

impl ContentSecurityPolicy {
    pub const SELF_ONLY: Self = Self(HeaderValue::from_static("default-src 'self'"));
    pub const NONE: Self = Self(HeaderValue::from_static("default-src 'none'"));

    pub fn new(value: &str) -> Result<Self, PolicyError> {
        HeaderValue::from_str(value)
            .map(Self)
            .map_err(|_| PolicyError::invalid_value(header::CONTENT_SECURITY_POLICY, value))
    }

    pub fn value(&self) -> &HeaderValue {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderRule {
    ContentTypeOptions(ContentTypeOptions),
    ContentSecurityPolicy(ContentSecurityPolicy),
    StrictTransportSecurity,
}

impl HeaderRule {
    /// The header this rule governs.
    pub fn name(&self) -> HeaderName {
        match self {
            Self::ContentTypeOptions(_) => header::X_CONTENT_TYPE_OPTIONS,
            Self::ContentSecurityPolicy(_) => header::CONTENT_SECURITY_POLICY,
            Self::StrictTransportSecurity => header::STRICT_TRANSPORT_SECURITY,
        }
    }

    /// Write this rule's header, replacing any previous value.
    pub fn apply(&self, headers: &mut HeaderMap) {
        match self {
            Self::ContentTypeOptions(ContentTypeOptions::Nosniff) => {
                headers.insert(self.name(), NOSNIFF);
            }
            Self::ContentTypeOptions(ContentTypeOptions::None) => {}
            Self::ContentSecurityPolicy(csp) => {
                headers.insert(self.name(), csp.value().clone());
            }
            Self::StrictTransportSecurity => {
                headers.insert(self.name(), HSTS_PRELOAD);
            }
        }
    }
}

impl From<ContentTypeOptions> for HeaderRule {
    fn from(option: ContentTypeOptions) -> Self {
        Self::ContentTypeOptions(option)
    }
}

impl From<ContentSecurityPolicy> for HeaderRule {
    fn from(csp: ContentSecurityPolicy) -> Self {
        Self::ContentSecurityPolicy(csp)
    }
}
