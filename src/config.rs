use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub notice_buffer: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            api_base_url: std::env::var("BOARD_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".into()),
            api_token: std::env::var("BOARD_API_TOKEN").ok(),
            request_timeout_secs: std::env::var("BOARD_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            notice_buffer: std::env::var("BOARD_NOTICE_BUFFER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".into(),
            api_token: None,
            request_timeout_secs: 30,
            notice_buffer: 100,
        }
    }
}
