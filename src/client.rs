use crate::error::AppError;
use crate::pokemon::PokemonList;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can produce the Pokemon list. The service only ever sees
/// this trait, so the HTTP client and the fake are interchangeable.
#[async_trait]
pub trait PokemonApiClient: Send + Sync {
    /// Short identifier, e.g. "http" or "fake".
    fn name(&self) -> &str;

    async fn get_all_pokemons(&self) -> Result<PokemonList, AppError>;
}

pub struct HttpPokemonApiClient {
    api_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpPokemonApiClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_url: api_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PokemonApiClient for HttpPokemonApiClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn get_all_pokemons(&self) -> Result<PokemonList, AppError> {
        let url = self.api_url.as_str();
        tracing::debug!("Fetching Pokemon list from URL: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to make HTTP request to {}: {}", url, e);
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_msg = format!("API request failed with status: {}", status);
            tracing::error!("{}", error_msg);
            return Err(AppError::RemoteServiceError {
                status: Some(status.as_u16()),
                message: error_msg,
            });
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            AppError::from(e)
        })?;

        let list: PokemonList = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            AppError::DecodeError(format!("JSON parsing failed: {}", e))
        })?;

        tracing::debug!("Successfully fetched {} Pokemon", list.len());
        Ok(list)
    }
}
