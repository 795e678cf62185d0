// Composition root: the only place that decides which client a service gets.

use crate::client::{HttpPokemonApiClient, PokemonApiClient};
use crate::config::{AppEnv, Config, PokemonConfig};
use crate::error::AppError;
use crate::fake_client::FakePokemonApiClient;
use crate::service::PokemonService;
use std::sync::Arc;

pub fn build_service(env: AppEnv, config: &PokemonConfig) -> PokemonService {
    let client: Arc<dyn PokemonApiClient> = match env {
        AppEnv::Test => {
            tracing::info!("Using mock client for Pokemon API (env: {})", env);
            Arc::new(FakePokemonApiClient::new())
        }
        AppEnv::Develop | AppEnv::Production => {
            tracing::info!(
                "Using HTTP client for Pokemon API (env: {}, url: {}, timeout: {}s)",
                env,
                config.api_url,
                config.timeout
            );
            Arc::new(HttpPokemonApiClient::new(
                config.api_url.clone(),
                config.timeout(),
            ))
        }
    };

    PokemonService::new(client)
}

/// Reads `APP_ENV`, `POKEMON_API_URL` and `REQUEST_TIMEOUT` and wires a
/// service. `default_env` applies only when `APP_ENV` is unset.
pub fn pokemon_service_factory(default_env: Option<AppEnv>) -> Result<PokemonService, AppError> {
    let config = Config::load(default_env)?;
    Ok(build_service(config.app.env, &config.pokemon))
}
