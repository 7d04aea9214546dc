// src/config.rs
use std::env;

// SEC requires a descriptive User-Agent ("Company Name contact@email.com").
// Override via SEC_API_USER_AGENT for real use.
const DEFAULT_USER_AGENT: &str = "sec_financials/0.1.0 (admin@example.com)";
const DEFAULT_TICKER: &str = "AAPL";

/// Process-wide configuration, built once in `main` and handed to the
/// EDGAR client. Nothing in here is global mutable state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// User-Agent header sent with every EDGAR request.
    pub user_agent: String,
    /// Ticker processed when none is given on the command line.
    pub default_ticker: String,
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to the
    /// built-in defaults for anything unset.
    pub fn from_env() -> Self {
        let user_agent = env::var("SEC_API_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let default_ticker = env::var("SEC_DEFAULT_TICKER")
            .unwrap_or_else(|_| DEFAULT_TICKER.to_string());

        tracing::debug!("Using User-Agent: {}", user_agent);

        Self {
            user_agent,
            default_ticker,
        }
    }
}
