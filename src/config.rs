use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const ACTIVITIES_PATH: &str = "/api/v1/activity-app/activities/";
const ITEMS_PATH: &str = "/api/v1/activity-app/items/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub require_token: bool,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            require_token: true,
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Runtime environment overrides. In the browser this is the same as [`Config::new`].
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("BACKEND_URL") {
            config.backend_url = url;
        }
        if let Ok(flag) = std::env::var("REQUIRE_TOKEN") {
            config.require_token = !matches!(flag.trim(), "false" | "0");
        }
        if let Ok(secs) = std::env::var("REQUEST_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(0) => config.request_timeout = None,
                Ok(secs) => config.request_timeout = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!("Ignoring invalid REQUEST_TIMEOUT_SECS={:?}", secs),
            }
        }
        config
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    pub fn without_token(mut self) -> Self {
        self.require_token = false;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn activities_url(&self) -> String {
        self.endpoint(ACTIVITIES_PATH)
    }

    pub fn items_url(&self) -> String {
        self.endpoint(ITEMS_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
