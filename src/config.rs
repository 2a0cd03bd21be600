use anyhow::Result;

const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub base_url: String,
    pub access_token: String,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    // Read variables
    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let access_token = std::env::var("ACCESS_TOKEN")?;
    Ok(Config {
        base_url,
        access_token,
    })
}
