use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use secure_headers::{
    ContentSecurityPolicy, ContentTypeOptions, Mode, PolicyBuilder, app, config::Config,
    middleware::security_headers,
};
use tower::ServiceExt;

/// Headers set by the app, minus framing headers axum fills in itself.
fn header_pairs(response: &axum::response::Response) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = response
        .headers()
        .iter()
        .filter(|(k, _)| k.as_str() != header::CONTENT_LENGTH.as_str())
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap().to_string()))
        .collect();
    pairs.sort();
    pairs
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

async fn get_root(app: Router) -> axum::response::Response {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    app.oneshot(req).await.unwrap()
}

#[tokio::test]
async fn general_mode_without_hsts() {
    let app = security_headers::apply(
        Router::new().route("/", get(|| async { StatusCode::NO_CONTENT })),
        PolicyBuilder::new(Mode::General).build(),
    );

    let response = get_root(app).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        header_pairs(&response),
        vec![
            pair("content-security-policy", "default-src 'self'"),
            pair("x-content-type-options", "nosniff"),
            pair("x-frame-options", "deny"),
            pair("x-xss-protection", "1; mode=block"),
        ]
    );
}

#[tokio::test]
async fn api_mode_with_hsts() {
    let app = security_headers::apply(
        Router::new().route("/", get(|| async { StatusCode::NO_CONTENT })),
        PolicyBuilder::new(Mode::Api).transport_security(true).build(),
    );

    let response = get_root(app).await;

    assert_eq!(
        header_pairs(&response),
        vec![
            pair("content-security-policy", "default-src 'none'"),
            pair(
                "strict-transport-security",
                "max-age=31536000; includeSubdomains; preload"
            ),
            pair("x-content-type-options", "nosniff"),
            pair("x-frame-options", "deny"),
            pair("x-xss-protection", "1; mode=block"),
        ]
    );
}

#[tokio::test]
async fn overrides_in_api_mode() {
    let app = security_headers::apply(
        Router::new().route("/", get(|| async { "body" })),
        PolicyBuilder::new(Mode::Api)
            .content_type_options(ContentTypeOptions::None)
            .content_security_policy(ContentSecurityPolicy::new("script-src 'self'").unwrap())
            .build(),
    );

    let response = get_root(app).await;
    let headers = response.headers();

    assert!(headers.get("X-Content-Type-Options").is_none());
    assert_eq!(headers.get("Content-Security-Policy").unwrap(), "script-src 'self'");
    assert_eq!(headers.get("X-Frame-Options").unwrap(), "deny");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"body");
}

#[tokio::test]
async fn configured_server_decorates_health() {
    let config = Config::from_lookup(|key| match key {
        "SECURITY_HEADERS_MODE" => Some("api".to_string()),
        "SECURITY_HEADERS_HSTS" => Some("true".to_string()),
        _ => None,
    })
    .unwrap();

    let req = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let response = app::build_router(&config).oneshot(req).await.unwrap();
    let headers = response.headers();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(headers.get("Content-Security-Policy").unwrap(), "default-src 'none'");
    assert_eq!(
        headers.get("Strict-Transport-Security").unwrap(),
        "max-age=31536000; includeSubdomains; preload"
    );
    assert!(headers.get("x-request-id").is_some());
}
