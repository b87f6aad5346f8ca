//! Client configuration.
//!
//! One base address covers every backend service (the FinanceX gateway
//! mounts chat, graph, KPI, and data under path prefixes). The config is
//! built in `main` and handed to the app; nothing reads it from ambient
//! global state.

/// Default backend address (the unified FinanceX API gateway).
const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL that all endpoint paths are joined onto.
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Read `FINANCEX_API_URL`, falling back to the default gateway.
    pub fn from_env() -> Self {
        match std::env::var("FINANCEX_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        assert_eq!(AppConfig::new("http://host:8000/").api_base, "http://host:8000");
        assert_eq!(AppConfig::new("http://host:8000").api_base, "http://host:8000");
    }

    #[test]
    fn default_points_at_local_gateway() {
        assert_eq!(AppConfig::default().api_base, "http://localhost:8000");
    }
}
