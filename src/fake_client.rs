use crate::client::PokemonApiClient;
use crate::error::AppError;
use crate::pokemon::{NamedAPIResource, PokemonList};
use async_trait::async_trait;

const FIXTURE_NAMES: [&str; 20] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
    "caterpie",
    "metapod",
    "butterfree",
    "weedle",
    "kakuna",
    "beedrill",
    "pidgey",
    "pidgeotto",
    "pidgeot",
    "rattata",
    "raticate",
];

/// Canned client for the `test` environment. Never touches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakePokemonApiClient;

impl FakePokemonApiClient {
    pub fn new() -> Self {
        Self
    }

    pub fn fixture() -> PokemonList {
        let results = FIXTURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                NamedAPIResource::new(*name, format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1))
            })
            .collect::<Vec<_>>();

        PokemonList {
            count: Some(results.len() as u32),
            next: None,
            previous: None,
            results,
        }
    }
}

#[async_trait]
impl PokemonApiClient for FakePokemonApiClient {
    fn name(&self) -> &str {
        "fake"
    }

    async fn get_all_pokemons(&self) -> Result<PokemonList, AppError> {
        tracing::debug!("Returning fixture Pokemon list");
        Ok(Self::fixture())
    }
}
