//! Assembles a [`PolicySet`] from a mode plus optional overrides.

use std::fmt;
use std::str::FromStr;

use super::policy::PolicySet;
use super::rule::{ContentSecurityPolicy, ContentTypeOptions, HeaderRule};

/// Default policy preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browser-facing sites: resources may load from the same origin.
    #[default]
    General,
    /// Machine-readable APIs: nothing may be loaded.
    Api,
}

impl Mode {
    fn default_csp(self) -> ContentSecurityPolicy {
        match self {
            Mode::General => ContentSecurityPolicy::SELF_ONLY,
            Mode::Api => ContentSecurityPolicy::NONE,
        }
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" | "web" | "default" => Ok(Self::General),
            "api" => Ok(Self::Api),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::General => f.write_str("general"),
            Mode::Api => f.write_str("api"),
        }
    }
}

/// Overrides replace the mode's default for their own header only.
/// Transport security is opt-in.
#[derive(Debug, Clone)]
#[must_use]
pub struct PolicyBuilder {
    mode: Mode,
    transport_security: bool,
    content_type_options: Option<ContentTypeOptions>,
    content_security_policy: Option<ContentSecurityPolicy>,
}

impl PolicyBuilder {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            transport_security: false,
            content_type_options: None,
            content_security_policy: None,
        }
    }

    pub fn transport_security(mut self, enabled: bool) -> Self {
        self.transport_security = enabled;
        self
    }

    pub fn content_type_options(mut self, option: ContentTypeOptions) -> Self {
        self.content_type_options = Some(option);
        self
    }

    pub fn content_security_policy(mut self, csp: ContentSecurityPolicy) -> Self {
        self.content_security_policy = Some(csp);
        self
    }

    pub fn build(self) -> PolicySet {
        let content_type = self
            .content_type_options
            .unwrap_or(ContentTypeOptions::Nosniff);
        let csp = self
            .content_security_policy
            .unwrap_or_else(|| self.mode.default_csp());

        tracing::debug!(
            mode = %self.mode,
            transport_security = self.transport_security,
            ?content_type,
            csp = ?csp.value(),
            "security header policy assembled"
        );

        PolicySet::new(
            self.transport_security,
            vec![HeaderRule::from(content_type), HeaderRule::from(csp)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    fn applied(builder: PolicyBuilder) -> HeaderMap {
        let mut headers = HeaderMap::new();
        builder.build().apply_to_headers(&mut headers);
        headers
    }

    #[test]
    fn general_mode_defaults() {
        let headers = applied(PolicyBuilder::new(Mode::General));

        assert_eq!(headers.get("Content-Security-Policy").unwrap(), "default-src 'self'");
        assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    }

    #[test]
    fn api_mode_defaults() {
        let headers = applied(PolicyBuilder::new(Mode::Api));

        assert_eq!(headers.get("Content-Security-Policy").unwrap(), "default-src 'none'");
        assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    }

    #[test]
    fn transport_security_is_off_by_default() {
        assert!(!PolicyBuilder::new(Mode::Api).build().transport_security_enabled());
    }

    #[test]
    fn content_type_override_disables_header() {
        let headers =
            applied(PolicyBuilder::new(Mode::General).content_type_options(ContentTypeOptions::None));

        assert!(headers.get("X-Content-Type-Options").is_none());
        assert_eq!(headers.get("Content-Security-Policy").unwrap(), "default-src 'self'");
    }

    #[test]
    fn csp_override_wins_in_every_mode() {
        for mode in [Mode::General, Mode::Api] {
            let csp = ContentSecurityPolicy::new("script-src 'self'").unwrap();
            let headers = applied(PolicyBuilder::new(mode).content_security_policy(csp));

            assert_eq!(headers.get("Content-Security-Policy").unwrap(), "script-src 'self'");
            assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
        }
    }

    #[test]
    fn one_rule_per_header() {
        let policy = PolicyBuilder::new(Mode::Api)
            .transport_security(true)
            .content_type_options(ContentTypeOptions::None)
            .build();

        let mut names = policy.header_names();
        let total = names.len();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names.dedup();

        assert_eq!(names.len(), total);
    }

    #[test]
    fn mode_parse() {
        assert_eq!("api".parse::<Mode>(), Ok(Mode::Api));
        assert_eq!("Web".parse::<Mode>(), Ok(Mode::General));
        assert_eq!(" general ".parse::<Mode>(), Ok(Mode::General));
        assert!("graphql".parse::<Mode>().is_err());
    }
}
