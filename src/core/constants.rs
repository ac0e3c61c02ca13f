pub const APP_TITLE: &str = "WORDTRAINER DASHBOARD";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "WORDTRAINER_API_URL";
pub const HEALTH_PATH: &str = "/api/health/";

// Health polling, milliseconds
pub const DEFAULT_POLL_INTERVAL: u64 = 5000;
pub const MIN_POLL_INTERVAL: u64 = 250;
pub const MAX_POLL_INTERVAL: u64 = 600_000;
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 10_000;

pub const DEFAULT_SERVICE_NAME: &str = "wordtrainer-backend";
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;

pub const CONFIG_DIR: &str = ".wordtrainer";
pub const CONFIG_FILE: &str = "dashboard.toml";
pub const SIG_EXIT: &str = "__EXIT__";
