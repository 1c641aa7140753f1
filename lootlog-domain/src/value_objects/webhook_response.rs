// Webhook response value object
// Classifies the status code returned by the logging endpoint

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookResponse {
    /// 400: the payload schema is older than the endpoint accepts.
    OutOfDate,
    /// 401: the auth code was rejected.
    Unauthorized,
    /// 402: the endpoint failed to store the loot.
    LoggingFailed,
    Ignored(u16),
}

impl From<u16> for WebhookResponse {
    fn from(status: u16) -> Self {
        match status {
            400 => WebhookResponse::OutOfDate,
            401 => WebhookResponse::Unauthorized,
            402 => WebhookResponse::LoggingFailed,
            other => WebhookResponse::Ignored(other),
        }
    }
}
