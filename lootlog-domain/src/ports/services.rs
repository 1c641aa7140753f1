use async_trait::async_trait;

#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POSTs a multipart form holding a single text part and returns the
    /// response status. The body is never read. `Err` means no response.
    async fn post_form(&self, url: &str, field: &str, value: String) -> anyhow::Result<u16>;
}
