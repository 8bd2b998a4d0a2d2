use crate::api::middleware::AppState;
use crate::config::Config;
use crate::database::Database;
use crate::models::{Store, StoreSettings};
use crate::services::AvailabilityService;
use crate::ApiResult;
use rand::RngCore;

/// Seed the configured store with default settings and an operator token if
/// it does not exist yet. Idempotent across restarts.
pub async fn initialize_store(db: &Database, config: &Config) -> ApiResult<()> {
    let Some(domain) = config.bootstrap_store_domain.as_deref() else {
        return Ok(());
    };

    let store = match db.get_store_by_domain(domain).await? {
        Some(store) => store,
        None => {
            let store = Store::new(domain.to_string(), config.bootstrap_store_name.clone());
            db.create_store(&store).await?;
            db.upsert_store_settings(&StoreSettings::defaults(store.id.clone()))
                .await?;
            tracing::info!(domain, store_id = %store.id, "seeded bootstrap store");
            store
        }
    };

    if !db.store_has_operator_token(&store.id).await? {
        let token = generate_token();
        db.create_operator_token(&token, &store.id).await?;
        // Printed once at seed time so the operator can pick it up.
        tracing::info!(store_id = %store.id, token = %token, "issued operator token");
    }

    Ok(())
}

pub fn build_app_state(db: Database, config: &Config) -> AppState {
    AppState {
        availability_service: AvailabilityService::new(db.clone()),
        db,
        storefront_suffix: config.storefront_suffix.clone(),
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
