use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;

use lootlog_domain::{RuntimeConfig, WebhookTransport};

pub struct ReqwestWebhookTransport {
    client: Client,
}

impl ReqwestWebhookTransport {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for ReqwestWebhookTransport {
    async fn post_form(&self, url: &str, field: &str, value: String) -> Result<u16> {
        let form = Form::new().text(field.to_string(), value);
        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status().as_u16();
        // Body is never read; dropping the response releases the connection.
        drop(response);
        Ok(status)
    }
}
