use crate::api::middleware::error::ApiError;
use crate::database::Database;
use crate::models::Store;
use crate::services::AvailabilityService;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub availability_service: AvailabilityService,
    /// Domain suffix recognized as a storefront, e.g. ".mystorefront.com".
    pub storefront_suffix: String,
}

/// Store resolved for the current request, via shop param or operator token.
#[derive(Clone, Debug)]
pub struct StoreContext {
    pub store: Store,
    /// True for the trusted authenticated mode, false for the public
    /// shop-gated mode.
    pub operator: bool,
}

/// Check a shop query value against the expected storefront shape:
/// lowercase name (letters, digits, hyphens) followed by the configured
/// suffix.
pub fn validate_shop_domain(shop: &str, suffix: &str) -> Result<(), ApiError> {
    static SHOP_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = SHOP_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("Invalid shop name regex"));

    let name = shop
        .strip_suffix(suffix)
        .ok_or_else(|| ApiError::BadRequest(format!("Malformed shop parameter: {}", shop)))?;

    if name.is_empty() || !re.is_match(name) {
        return Err(ApiError::BadRequest(format!(
            "Malformed shop parameter: {}",
            shop
        )));
    }

    Ok(())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// Resolve the store for a request: public mode when a shop parameter is
/// given, operator mode (bearer token) otherwise. Missing auth with no shop
/// parameter is a 401; a shop value that fails validation is a 400 and an
/// unknown domain a 404.
pub async fn resolve_store_context(
    state: &AppState,
    shop: Option<&str>,
    headers: &HeaderMap,
) -> Result<StoreContext, ApiError> {
    if let Some(shop) = shop {
        validate_shop_domain(shop, &state.storefront_suffix)?;
        let store = state
            .db
            .get_store_by_domain(shop)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Unknown shop: {}", shop)))?;
        return Ok(StoreContext {
            store,
            operator: false,
        });
    }

    let token = bearer_token(headers).ok_or(ApiError::Unauthorized)?;
    let store_id = state
        .db
        .get_store_id_by_token(token)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    let store = state
        .db
        .get_store(&store_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    Ok(StoreContext {
        store,
        operator: true,
    })
}

/// Route-layer middleware for operator-only endpoints. Inserts a
/// `StoreContext` extension on success.
pub async fn require_operator(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = resolve_store_context(&state, None, request.headers()).await?;
    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}
