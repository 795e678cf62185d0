use pokemon_service::{AppError, pokemon_service_factory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn run() -> Result<(), AppError> {
    let service = pokemon_service_factory(None)?;
    tracing::debug!("Wired {:?}", service);

    let pokemons = service.get_all_pokemons().await?;
    tracing::info!("Fetched {} Pokémon", pokemons.len());

    let output = serde_json::to_string_pretty(&pokemons).map_err(|e| {
        tracing::error!("Failed to serialize Pokémon list: {}", e);
        AppError::EncodeError(e.to_string())
    })?;
    println!("{}", output);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,reqwest=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
