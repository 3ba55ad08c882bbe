use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Storefront origin allowed by CORS; any origin when unset
    pub cors_allowed_origin: Option<String>,
    /// Largest order-creation body the validator will buffer
    pub max_body_bytes: usize,
    /// Sustained order-creation requests per second per client IP
    pub rate_limit_per_second: u64,
    /// Burst allowance on top of the sustained rate
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            cors_allowed_origin: None,
            max_body_bytes: 64 * 1024,
            rate_limit_per_second: 5,
            rate_limit_burst: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.trim().is_empty()),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            rate_limit_per_second: lookup("RATE_LIMIT_PER_SECOND")
                .and_then(|r| r.parse().ok())
                .unwrap_or(defaults.rate_limit_per_second),
            rate_limit_burst: lookup("RATE_LIMIT_BURST")
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.rate_limit_burst),
        }
    }

    /// Milliseconds between quota replenishments for the configured rate
    pub fn replenish_interval_ms(&self) -> u64 {
        (1000 / self.rate_limit_per_second.max(1)).max(1)
    }

    /// Check if order-creation rate limiting is enabled
    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_per_second > 0 && self.rate_limit_burst > 0
    }
}
