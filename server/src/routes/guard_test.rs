use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use super::*;

fn app() -> Router {
    Router::new()
        .route("/login", get(|| async { "login" }))
        .route("/dashboard/{*rest}", get(|| async { "dashboard" }))
        .route("/", get(|| async { "home" }))
        .layer(axum::middleware::from_fn(require_session))
}

fn get_req(uri: &str, cookie: Option<&str>) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(response: &Response) -> Option<&HeaderValue> {
    response.headers().get(header::LOCATION)
}

#[test]
fn login_url_encodes_redirect() {
    assert_eq!(login_url("/dashboard/upa"), "/login?redirect=%2Fdashboard%2Fupa");
    assert_eq!(
        login_url("/dashboard/mahasiswa/pengajuan?id=a 1"),
        "/login?redirect=%2Fdashboard%2Fmahasiswa%2Fpengajuan%3Fid%3Da+1"
    );
}

#[test]
fn session_cookie_detection() {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("other=1"));
    assert!(!has_session_cookie(&CookieJar::from_headers(&headers)));

    headers.insert(header::COOKIE, HeaderValue::from_static("better-auth.session_token="));
    assert!(!has_session_cookie(&CookieJar::from_headers(&headers)));

    headers.insert(header::COOKIE, HeaderValue::from_static("better-auth.session_token=abc"));
    assert!(has_session_cookie(&CookieJar::from_headers(&headers)));

    headers.insert(header::COOKIE, HeaderValue::from_static("__Secure-better-auth.session_token=abc"));
    assert!(has_session_cookie(&CookieJar::from_headers(&headers)));
}

#[tokio::test]
async fn dashboard_without_cookie_redirects_to_login() {
    let response = app().oneshot(get_req("/dashboard/upa?tab=done", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response).unwrap(), "/login?redirect=%2Fdashboard%2Fupa%3Ftab%3Ddone");
}

#[tokio::test]
async fn dashboard_with_cookie_passes_through() {
    let response = app()
        .oneshot(get_req("/dashboard/upa", Some("better-auth.session_token=abc")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_cookie_redirects_to_dashboard() {
    let response = app().oneshot(get_req("/login", Some("better-auth.session_token=abc"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response).unwrap(), "/dashboard");
}

#[tokio::test]
async fn public_routes_are_untouched() {
    let response = app().oneshot(get_req("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = app().oneshot(get_req("/login", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
