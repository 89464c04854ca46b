/*
 * Responsibility
 * - Errors raised while assembling a header policy (startup only)
 * - Applying a policy to a response never fails, so nothing here is per-request
 */
use axum::http::HeaderName;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("invalid value for {header}: {value:?}")]
    InvalidHeaderValue { header: HeaderName, value: String },
}

impl PolicyError {
    pub fn invalid_value(header: HeaderName, value: impl Into<String>) -> Self {
        Self::InvalidHeaderValue {
            header,
            value: value.into(),
        }
    }
}
