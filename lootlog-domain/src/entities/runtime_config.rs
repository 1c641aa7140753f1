pub const DEFAULT_ENDPOINT_URL: &str = "https://osrs.anthd.com/?add";
pub const DEFAULT_ERROR_THRESHOLD: u32 = 10;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub endpoint_url: String,
    pub error_threshold: u32,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            request_timeout_seconds: 15,
        }
    }
}
