//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `STORE_API_URL` — base URL of the stock/catalog API
///   (default: `"http://localhost:3333"`)
/// - `CART_STORAGE_PATH` — path of the persisted cart file
///   (default: `"cart-storage.json"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_api_url: String,
    pub storage_path: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            store_api_url: std::env::var("STORE_API_URL")
                .unwrap_or_else(|_| "http://localhost:3333".to_string()),
            storage_path: std::env::var("CART_STORAGE_PATH")
                .unwrap_or_else(|_| "cart-storage.json".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            store_api_url: "http://localhost:3333".to_string(),
            storage_path: "cart-storage.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}
