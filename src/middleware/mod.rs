/*
 * Responsibility
 * - Router-level middleware (re-export)
 * - http: request id, access log, timeout
 * - security_headers: response header policy
 */
pub mod http;
pub mod security_headers;
