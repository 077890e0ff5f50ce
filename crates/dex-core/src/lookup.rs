use std::sync::Arc;

use dex_client::ResourceProvider;
use dex_types::DexView;

use crate::entity::Pokemon;
use crate::error::LookupError;

/// Run every fetch concurrently; the first failure fails the whole batch
pub async fn fetch_all(pokemon: &Pokemon) -> Result<(), LookupError> {
    tokio::try_join!(
        pokemon.fetch_record(),
        pokemon.fetch_species(),
        pokemon.fetch_evolution_chain(),
        pokemon.fetch_growth_rate(),
        pokemon.fetch_natures(),
        pokemon.fetch_stats(),
        pokemon.fetch_types(),
        pokemon.fetch_weaknesses(),
        pokemon.fetch_moves(),
        pokemon.fetch_type_advantages(),
        pokemon.fetch_type_disadvantages(),
    )?;

    Ok(())
}

/// Look up one Pokémon by name and project it into a render-ready view
pub async fn lookup(
    provider: Arc<dyn ResourceProvider>,
    name: &str,
) -> Result<DexView, LookupError> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(LookupError::EmptyName);
    }

    let pokemon = Pokemon::new(name, provider);
    tracing::info!("Looking up {}", pokemon.lookup_name());

    fetch_all(&pokemon).await?;

    let view = DexView {
        name: pokemon.name().to_string(),
        image_url: pokemon.image_url().to_string(),
        abilities: pokemon.abilities(),
        evolution_chain: pokemon.evolution_chain().await?,
        gender: pokemon.gender_rate().await?,
        growth_rate: pokemon.growth_rate().await?,
        natures: pokemon.natures().await?,
        stats: pokemon.stats().await?,
        types: pokemon.types().await?,
        weaknesses: pokemon.weaknesses().to_vec(),
        moves: pokemon.moves().to_vec(),
        type_advantages: pokemon.type_advantages().to_vec(),
        type_disadvantages: pokemon.type_disadvantages().to_vec(),
    };

    tracing::info!(
        "Loaded {}: {} evolution stages, {} moves",
        view.name,
        view.evolution_chain.len(),
        view.moves.len()
    );

    Ok(view)
}
