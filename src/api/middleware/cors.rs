use crate::api::middleware::auth::AppState;
use axum::{
    extract::{Request, State},
    http::header::{HeaderValue, ORIGIN},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_METHODS: &str = "GET, OPTIONS";
const ALLOW_HEADERS: &str = "Authorization, Content-Type";

/// CORS for the storefront-facing routes. The request origin is echoed back
/// only when it is a recognized storefront domain; anything else gets the
/// wildcard. Preflights are answered here with 204 and never reach the
/// handlers.
pub async fn storefront_cors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let allow_origin = allowed_origin(request.headers(), &state.storefront_suffix);

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), &allow_origin);
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut(), &allow_origin);
    response
}

fn allowed_origin(headers: &HeaderMap, suffix: &str) -> String {
    headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .filter(|origin| {
            origin
                .strip_prefix("https://")
                .map(|host| host.ends_with(suffix))
                .unwrap_or(false)
        })
        .map(|origin| origin.to_string())
        .unwrap_or_else(|| "*".to_string())
}

fn apply_cors_headers(headers: &mut HeaderMap, allow_origin: &str) {
    if let Ok(value) = HeaderValue::from_str(allow_origin) {
        headers.insert("access-control-allow-origin", value);
    }
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
