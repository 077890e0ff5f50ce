use std::sync::Arc;

use dex_types::{EvolutionStep, MoveEntry, StatEntry};

use super::fake::{FakeProvider, bulbasaur, magcargo};
use crate::entity::Pokemon;
use crate::error::{LookupError, Resource};

fn pokemon(name: &str, provider: FakeProvider) -> (Pokemon, Arc<FakeProvider>) {
    let provider = Arc::new(provider);
    (Pokemon::new(name, provider.clone()), provider)
}

#[tokio::test]
async fn test_record_fetched_once() {
    let (pokemon, provider) = pokemon("bulbasaur", bulbasaur());

    pokemon.fetch_record().await.unwrap();
    pokemon.fetch_record().await.unwrap();

    assert_eq!(provider.hits("pokemon/bulbasaur"), 1);
    assert_eq!(pokemon.name(), "bulbasaur");
}

#[tokio::test]
async fn test_racing_prerequisite_fetches_keep_first_record() {
    let (pokemon, provider) = pokemon("bulbasaur", bulbasaur());

    let (species, types) = tokio::join!(pokemon.fetch_species(), pokemon.fetch_types());

    assert_eq!(species.unwrap().gender_rate, 1);
    assert_eq!(types.unwrap().len(), 2);
    // both fetches found the record missing and retrieved it
    assert_eq!(provider.hits("pokemon/bulbasaur"), 2);

    let record = pokemon.record().unwrap();
    assert_eq!(record.name, "bulbasaur");
    assert!(std::ptr::eq(record, pokemon.fetch_record().await.unwrap()));
    assert_eq!(provider.hits("pokemon/bulbasaur"), 2);
    assert_eq!(provider.hits("pokemon-species/1"), 1);
}

#[tokio::test]
async fn test_accessors_before_load() {
    let (pokemon, provider) = pokemon("bulbasaur", bulbasaur());

    assert_eq!(pokemon.name(), "Data not loaded");
    assert_eq!(pokemon.lookup_name(), "bulbasaur");
    assert!(pokemon.abilities().is_empty());
    assert_eq!(pokemon.image_url(), "");
    assert!(pokemon.weaknesses().is_empty());
    assert!(pokemon.moves().is_empty());
    assert_eq!(provider.hits("pokemon/bulbasaur"), 0);
}

#[tokio::test]
async fn test_evolution_chain_fetches_prerequisites() {
    let (pokemon, provider) = pokemon("bulbasaur", bulbasaur());

    pokemon.fetch_evolution_chain().await.unwrap();

    assert!(pokemon.record().is_some());
    assert!(pokemon.species().is_some());
    assert!(pokemon.evolution_chain_record().is_some());
    assert_eq!(provider.hits("pokemon/bulbasaur"), 1);
    assert_eq!(provider.hits("pokemon-species/1"), 1);
    assert_eq!(provider.hits("evolution-chain/1"), 1);
}

#[tokio::test]
async fn test_evolution_chain_narration() {
    let (pokemon, _provider) = pokemon("bulbasaur", bulbasaur());

    let steps = pokemon.evolution_chain().await.unwrap();

    assert_eq!(
        steps,
        vec![
            EvolutionStep::new("bulbasaur", "Unknown method"),
            EvolutionStep::new("ivysaur", "Level Up (Level 16)"),
            EvolutionStep::new("venusaur", "Level Up (Level 32)"),
        ]
    );
}

#[tokio::test]
async fn test_species_shared_by_dependents() {
    let (pokemon, provider) = pokemon("bulbasaur", bulbasaur());

    pokemon.fetch_evolution_chain().await.unwrap();
    pokemon.fetch_growth_rate().await.unwrap();

    assert_eq!(provider.hits("pokemon-species/1"), 1);
    assert_eq!(pokemon.growth_rate().await.unwrap(), "medium-slow");
    assert_eq!(
        pokemon.gender_rate().await.unwrap(),
        "87.5% male, 12.5% female"
    );
}

#[tokio::test]
async fn test_unnamed_growth_rate_is_unknown() {
    let provider = bulbasaur().with("growth-rate/4", serde_json::json!({ "id": 4 }));
    let (pokemon, _provider) = pokemon("bulbasaur", provider);

    assert_eq!(pokemon.growth_rate().await.unwrap(), "Unknown");
}

#[tokio::test]
async fn test_record_projections() {
    let (pokemon, _provider) = pokemon("bulbasaur", bulbasaur());

    assert_eq!(
        pokemon.stats().await.unwrap(),
        vec![
            StatEntry { name: "hp".to_string(), base_stat: 45 },
            StatEntry { name: "attack".to_string(), base_stat: 49 },
        ]
    );
    assert_eq!(pokemon.types().await.unwrap(), vec!["grass", "poison"]);
    assert_eq!(pokemon.abilities(), vec!["overgrow", "chlorophyll"]);
    assert_eq!(pokemon.image_url(), "https://img.test/1.png");
    assert_eq!(
        pokemon.natures().await.unwrap(),
        vec!["hardy", "bold", "modest"]
    );
}

#[tokio::test]
async fn test_moves_use_first_version_group_level() {
    let (pokemon, _provider) = pokemon("bulbasaur", bulbasaur());

    pokemon.fetch_moves().await.unwrap();

    assert_eq!(
        pokemon.moves(),
        &[
            MoveEntry { name: "vine-whip".to_string(), level: 3 },
            MoveEntry { name: "swords-dance".to_string(), level: 0 },
        ]
    );
}

#[tokio::test]
async fn test_shared_weaknesses_listed_once() {
    let (pokemon, provider) = pokemon("magcargo", magcargo());

    let weaknesses = pokemon.fetch_weaknesses().await.unwrap().to_vec();

    assert_eq!(
        weaknesses,
        vec!["ground", "rock", "water", "fighting", "steel", "grass"]
    );
    assert_eq!(provider.hits("type/10"), 1);
    assert_eq!(provider.hits("type/6"), 1);
}

#[tokio::test]
async fn test_relation_lists() {
    let (pokemon, provider) = pokemon("bulbasaur", bulbasaur());

    pokemon.fetch_type_advantages().await.unwrap();
    pokemon.fetch_type_disadvantages().await.unwrap();

    assert_eq!(
        pokemon.type_advantages(),
        &["ground", "rock", "water", "grass", "fairy"]
    );
    assert_eq!(
        pokemon.type_disadvantages(),
        &["ground", "water", "grass", "electric", "fighting", "poison", "bug", "fairy"]
    );
    // each relation reads the type details on its own
    assert_eq!(provider.hits("type/12"), 2);
}

#[tokio::test]
async fn test_relation_not_refetched_once_set() {
    let (pokemon, provider) = pokemon("magcargo", magcargo());

    pokemon.fetch_weaknesses().await.unwrap();
    pokemon.fetch_weaknesses().await.unwrap();

    assert_eq!(provider.hits("type/10"), 1);
}

#[tokio::test]
async fn test_failed_type_fetch_leaves_weaknesses_unset() {
    let (pokemon, _provider) = pokemon("magcargo", magcargo().without("type/6"));

    let err = pokemon.fetch_weaknesses().await.unwrap_err();

    match err {
        LookupError::NotFound { resource, name } => {
            assert_eq!(resource, Resource::Type);
            assert_eq!(name, "rock");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(pokemon.weaknesses.get().is_none());
    assert!(pokemon.weaknesses().is_empty());
    // the type list itself was still cached
    assert!(pokemon.types.get().is_some());
}

#[tokio::test]
async fn test_unknown_pokemon_is_not_found() {
    let (pokemon, _provider) = pokemon("missingno", bulbasaur());

    let err = pokemon.fetch_record().await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.resource(), Some(Resource::Pokemon));
    assert_eq!(err.to_string(), "Pokémon not found: missingno");
    assert!(pokemon.record().is_none());
}

#[tokio::test]
async fn test_prerequisite_failure_propagates() {
    let (pokemon, provider) = pokemon("bulbasaur", bulbasaur().without("pokemon-species/1"));

    let err = pokemon.fetch_growth_rate().await.unwrap_err();

    assert_eq!(err.resource(), Some(Resource::Species));
    assert!(pokemon.record().is_some());
    assert!(pokemon.species().is_none());
    assert!(pokemon.growth_rate_record().is_none());
    assert_eq!(provider.hits("growth-rate/4"), 0);
}

#[tokio::test]
async fn test_malformed_document() {
    let provider = bulbasaur().with("pokemon-species/1", serde_json::json!({ "gender_rate": "x" }));
    let (pokemon, _provider) = pokemon("bulbasaur", provider);

    let err = pokemon.fetch_species().await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::Malformed {
            resource: Resource::Species,
            ..
        }
    ));
}
