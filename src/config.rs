use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub provider_token: String,
    pub provider_base_url: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let telegram_bot_token = required_var("BOT_TOKEN")?;
        let provider_token = required_var("API_TOKEN")?;

        let provider_base_url = env::var("OWGHAT_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| "https://one-api.ir".to_string());

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token,
            provider_token,
            provider_base_url,
            http_port,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    let value = env::var(name).map_err(|_| anyhow!("{} must be set", name))?;

    if value.trim().is_empty() {
        return Err(anyhow!("{} must be set", name));
    }

    Ok(value)
}
