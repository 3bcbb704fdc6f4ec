//! Environment-driven configuration
use std::env;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the movie-search backend
    pub server_url: String,
}

impl Config {
    /// Load settings from the environment (and a `.env` file if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let server_url = env::var("CINEFIND_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());
        Self {
            server_url: normalize(&server_url),
        }
    }
}

fn normalize(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(normalize("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize("http://localhost:8000"), "http://localhost:8000");
    }
}
