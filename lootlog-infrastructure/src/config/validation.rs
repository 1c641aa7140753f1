use anyhow::{anyhow, Result};
use reqwest::Url;

pub fn validate_endpoint_url(value: &str) -> Result<()> {
    let url = Url::parse(value.trim()).map_err(|err| anyhow!("invalid endpoint_url: {}", err))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!("endpoint_url must be http or https, got {}", other)),
    }
}
