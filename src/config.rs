use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Domain suffix recognized as a storefront, e.g. ".mystorefront.com".
    pub storefront_suffix: String,
    /// When set, bootstrap seeds this store (with default settings and an
    /// operator token) on startup if it does not exist yet.
    pub bootstrap_store_domain: Option<String>,
    pub bootstrap_store_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://slotdesk.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let storefront_suffix = env::var("STOREFRONT_DOMAIN_SUFFIX")
            .unwrap_or_else(|_| ".mystorefront.com".to_string());
        if !storefront_suffix.starts_with('.') {
            return Err(ConfigError::InvalidStorefrontSuffix);
        }

        let bootstrap_store_domain = env::var("BOOTSTRAP_STORE_DOMAIN").ok();

        let bootstrap_store_name =
            env::var("BOOTSTRAP_STORE_NAME").unwrap_or_else(|_| "Demo Store".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            storefront_suffix,
            bootstrap_store_domain,
            bootstrap_store_name,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("STOREFRONT_DOMAIN_SUFFIX must start with a dot")]
    InvalidStorefrontSuffix,
}
