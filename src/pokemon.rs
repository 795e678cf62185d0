// pokemon.rs
// This file contains the definitions for the Pokemon list returned by the API.

use serde::{Deserialize, Serialize};

/// One page of the `/pokemon` list endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PokemonList {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedAPIResource>,
}

impl PokemonList {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Names in the order the API returned them.
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|r| r.name.clone()).collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedAPIResource {
    pub name: String,
    pub url: String,
}

impl NamedAPIResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
