use crate::client::PokemonApiClient;
use crate::error::AppError;
use crate::pokemon::PokemonList;
use std::sync::Arc;

/// Use-case facing API over whichever client it was built with.
///
/// The client is handed in by the caller (normally [`crate::build_service`]);
/// the service never constructs one itself. Client errors are returned as-is.
#[derive(Clone)]
pub struct PokemonService {
    client: Arc<dyn PokemonApiClient>,
}

impl PokemonService {
    pub fn new(client: Arc<dyn PokemonApiClient>) -> Self {
        Self { client }
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    pub async fn get_all_pokemons(&self) -> Result<PokemonList, AppError> {
        self.client.get_all_pokemons().await
    }

    pub async fn pokemon_names(&self) -> Result<Vec<String>, AppError> {
        let list = self.client.get_all_pokemons().await?;
        Ok(list.names())
    }
}

impl std::fmt::Debug for PokemonService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonService")
            .field("client", &self.client.name())
            .finish()
    }
}
