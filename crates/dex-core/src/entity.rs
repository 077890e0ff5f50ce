//! Per-lookup aggregate of every fetched and derived record for one Pokémon.
//!
//! Each cache field is written at most once. Fetches take `&self` so a caller
//! can poll all of them concurrently; two fetches racing on the same missing
//! prerequisite may both retrieve it, and the first one to finish wins.

use std::sync::{Arc, OnceLock};

use dex_client::ResourceProvider;
use dex_types::{
    EvolutionChainRecord, EvolutionStep, GrowthRateRecord, MoveEntry, NatureCatalog,
    PokemonRecord, SpeciesRecord, StatEntry, StatSlot, TypeRecord, TypeSlot,
};
use serde::de::DeserializeOwned;

use crate::derive::{
    NOT_LOADED, OrderedNames, TypeRelation, UNKNOWN_GROWTH_RATE, describe_gender_rate,
    moves_with_levels,
};
use crate::error::{LookupError, Resource};
use crate::evolution;

/// Nature listing path; the limit covers the whole catalog in one page
pub const NATURE_CATALOG_PATH: &str = "nature/?limit=100";

pub struct Pokemon {
    name: String,
    provider: Arc<dyn ResourceProvider>,

    pub(crate) record: OnceLock<PokemonRecord>,
    pub(crate) species: OnceLock<SpeciesRecord>,
    pub(crate) evolution_chain: OnceLock<EvolutionChainRecord>,
    pub(crate) growth_rate: OnceLock<GrowthRateRecord>,
    pub(crate) natures: OnceLock<NatureCatalog>,
    pub(crate) stats: OnceLock<Vec<StatSlot>>,
    pub(crate) types: OnceLock<Vec<TypeSlot>>,
    pub(crate) weaknesses: OnceLock<Vec<String>>,
    pub(crate) moves: OnceLock<Vec<MoveEntry>>,
    pub(crate) type_advantages: OnceLock<Vec<String>>,
    pub(crate) type_disadvantages: OnceLock<Vec<String>>,
}

impl Pokemon {
    /// `name` is used verbatim as the lookup key
    pub fn new(name: impl Into<String>, provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            name: name.into(),
            provider,
            record: OnceLock::new(),
            species: OnceLock::new(),
            evolution_chain: OnceLock::new(),
            growth_rate: OnceLock::new(),
            natures: OnceLock::new(),
            stats: OnceLock::new(),
            types: OnceLock::new(),
            weaknesses: OnceLock::new(),
            moves: OnceLock::new(),
            type_advantages: OnceLock::new(),
            type_disadvantages: OnceLock::new(),
        }
    }

    pub fn lookup_name(&self) -> &str {
        &self.name
    }

    /// Retrieve `url` and decode it, mapping failures onto `resource`/`key`
    async fn load<T: DeserializeOwned>(
        &self,
        resource: Resource,
        key: &str,
        url: &str,
    ) -> Result<T, LookupError> {
        let value = self
            .provider
            .get_json(url)
            .await
            .map_err(|e| LookupError::from_provider(resource, key, e))?;

        serde_json::from_value(value).map_err(|source| LookupError::Malformed {
            resource,
            name: key.to_string(),
            source,
        })
    }

    // ---- fetch layer ----

    /// Base record, `pokemon/{name}`
    pub async fn fetch_record(&self) -> Result<&PokemonRecord, LookupError> {
        if let Some(record) = self.record.get() {
            return Ok(record);
        }

        let url = self.provider.endpoint(&format!("pokemon/{}", self.name));
        let record: PokemonRecord = self
            .load(Resource::Pokemon, &self.name, &url)
            .await
            .inspect_err(|e| tracing::error!("Error fetching Pokémon data: {e}"))?;

        Ok(self.record.get_or_init(|| record))
    }

    pub async fn fetch_species(&self) -> Result<&SpeciesRecord, LookupError> {
        if let Some(species) = self.species.get() {
            return Ok(species);
        }

        let result = async {
            let record = self.fetch_record().await?;
            self.load::<SpeciesRecord>(Resource::Species, &self.name, &record.species.url)
                .await
        }
        .await
        .inspect_err(|e| tracing::error!("Error fetching species data: {e}"))?;

        Ok(self.species.get_or_init(|| result))
    }

    pub async fn fetch_evolution_chain(&self) -> Result<&EvolutionChainRecord, LookupError> {
        if let Some(chain) = self.evolution_chain.get() {
            return Ok(chain);
        }

        let result = async {
            let species = self.fetch_species().await?;
            self.load::<EvolutionChainRecord>(
                Resource::EvolutionChain,
                &self.name,
                &species.evolution_chain.url,
            )
            .await
        }
        .await
        .inspect_err(|e| tracing::error!("Error fetching evolution chain: {e}"))?;

        Ok(self.evolution_chain.get_or_init(|| result))
    }

    pub async fn fetch_growth_rate(&self) -> Result<&GrowthRateRecord, LookupError> {
        if let Some(growth) = self.growth_rate.get() {
            return Ok(growth);
        }

        let result = async {
            let species = self.fetch_species().await?;
            self.load::<GrowthRateRecord>(
                Resource::GrowthRate,
                &self.name,
                &species.growth_rate.url,
            )
            .await
        }
        .await
        .inspect_err(|e| tracing::error!("Error fetching growth rate data: {e}"))?;

        Ok(self.growth_rate.get_or_init(|| result))
    }

    /// Global nature catalog; not specific to this Pokémon
    pub async fn fetch_natures(&self) -> Result<&NatureCatalog, LookupError> {
        if let Some(natures) = self.natures.get() {
            return Ok(natures);
        }

        let url = self.provider.endpoint(NATURE_CATALOG_PATH);
        let catalog: NatureCatalog = self
            .load(Resource::Natures, "nature", &url)
            .await
            .inspect_err(|e| tracing::error!("Error fetching nature data: {e}"))?;

        Ok(self.natures.get_or_init(|| catalog))
    }

    pub async fn fetch_stats(&self) -> Result<&[StatSlot], LookupError> {
        if let Some(stats) = self.stats.get() {
            return Ok(stats.as_slice());
        }

        let record = self
            .fetch_record()
            .await
            .inspect_err(|e| tracing::error!("Error fetching stats data: {e}"))?;

        Ok(self.stats.get_or_init(|| record.stats.clone()).as_slice())
    }

    pub async fn fetch_types(&self) -> Result<&[TypeSlot], LookupError> {
        if let Some(types) = self.types.get() {
            return Ok(types.as_slice());
        }

        let record = self
            .fetch_record()
            .await
            .inspect_err(|e| tracing::error!("Error fetching type data: {e}"))?;

        Ok(self.types.get_or_init(|| record.types.clone()).as_slice())
    }

    pub async fn fetch_moves(&self) -> Result<&[MoveEntry], LookupError> {
        if let Some(moves) = self.moves.get() {
            return Ok(moves.as_slice());
        }

        let record = self
            .fetch_record()
            .await
            .inspect_err(|e| tracing::error!("Error fetching moves: {e}"))?;

        Ok(self
            .moves
            .get_or_init(|| moves_with_levels(&record.moves))
            .as_slice())
    }

    /// Types that deal double damage to any of this Pokémon's types
    pub async fn fetch_weaknesses(&self) -> Result<&[String], LookupError> {
        self.fetch_relation(&self.weaknesses, TypeRelation::Weakness)
            .await
    }

    /// Types that any of this Pokémon's types deal double damage to
    pub async fn fetch_type_advantages(&self) -> Result<&[String], LookupError> {
        self.fetch_relation(&self.type_advantages, TypeRelation::Advantage)
            .await
    }

    /// Types that deal half damage to any of this Pokémon's types
    pub async fn fetch_type_disadvantages(&self) -> Result<&[String], LookupError> {
        self.fetch_relation(&self.type_disadvantages, TypeRelation::Resistance)
            .await
    }

    /// Fetch every type's detail and collect one relation list.
    ///
    /// The list is only published once all types have been read, so a failure
    /// leaves `cell` untouched. Once published, later calls return the cached
    /// list instead of rebuilding it.
    async fn fetch_relation<'a>(
        &'a self,
        cell: &'a OnceLock<Vec<String>>,
        relation: TypeRelation,
    ) -> Result<&'a [String], LookupError> {
        if let Some(names) = cell.get() {
            return Ok(names.as_slice());
        }

        let result = async {
            let types = self.fetch_types().await?;
            let mut names = OrderedNames::default();
            for slot in types {
                let detail: TypeRecord = self
                    .load(Resource::Type, &slot.kind.name, &slot.kind.url)
                    .await?;
                names.extend(relation.select(&detail.damage_relations));
            }
            Ok::<_, LookupError>(names.into_vec())
        }
        .await
        .inspect_err(|e| {
            tracing::error!("Error fetching {}: {e}", relation.label())
        })?;

        Ok(cell.get_or_init(|| result).as_slice())
    }

    // ---- accessors ----

    pub fn name(&self) -> &str {
        self.record
            .get()
            .map_or(NOT_LOADED, |record| record.name.as_str())
    }

    pub fn abilities(&self) -> Vec<String> {
        self.record.get().map_or_else(Vec::new, |record| {
            record
                .abilities
                .iter()
                .map(|slot| slot.ability.name.clone())
                .collect()
        })
    }

    pub fn image_url(&self) -> &str {
        self.record
            .get()
            .and_then(|record| record.sprites.front_default.as_deref())
            .unwrap_or("")
    }

    pub async fn evolution_chain(&self) -> Result<Vec<EvolutionStep>, LookupError> {
        let chain = self.fetch_evolution_chain().await?;
        Ok(evolution::narrate(&chain.chain))
    }

    pub async fn gender_rate(&self) -> Result<String, LookupError> {
        let species = self.fetch_species().await?;
        Ok(describe_gender_rate(species.gender_rate))
    }

    pub async fn growth_rate(&self) -> Result<String, LookupError> {
        let growth = self.fetch_growth_rate().await?;
        if growth.name.is_empty() {
            Ok(UNKNOWN_GROWTH_RATE.to_string())
        } else {
            Ok(growth.name.clone())
        }
    }

    pub async fn natures(&self) -> Result<Vec<String>, LookupError> {
        let catalog = self.fetch_natures().await?;
        Ok(catalog.results.iter().map(|n| n.name.clone()).collect())
    }

    pub async fn stats(&self) -> Result<Vec<StatEntry>, LookupError> {
        let stats = self.fetch_stats().await?;
        Ok(stats
            .iter()
            .map(|slot| StatEntry {
                name: slot.stat.name.clone(),
                base_stat: slot.base_stat,
            })
            .collect())
    }

    pub async fn types(&self) -> Result<Vec<String>, LookupError> {
        let types = self.fetch_types().await?;
        Ok(types.iter().map(|slot| slot.kind.name.clone()).collect())
    }

    /// Empty until [`Pokemon::fetch_weaknesses`] has succeeded
    pub fn weaknesses(&self) -> &[String] {
        self.weaknesses.get().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn moves(&self) -> &[MoveEntry] {
        self.moves.get().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn type_advantages(&self) -> &[String] {
        self.type_advantages.get().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn type_disadvantages(&self) -> &[String] {
        self.type_disadvantages.get().map(Vec::as_slice).unwrap_or_default()
    }

    // ---- raw cached records ----

    pub fn record(&self) -> Option<&PokemonRecord> {
        self.record.get()
    }

    pub fn species(&self) -> Option<&SpeciesRecord> {
        self.species.get()
    }

    pub fn evolution_chain_record(&self) -> Option<&EvolutionChainRecord> {
        self.evolution_chain.get()
    }

    pub fn growth_rate_record(&self) -> Option<&GrowthRateRecord> {
        self.growth_rate.get()
    }

    pub fn nature_catalog(&self) -> Option<&NatureCatalog> {
        self.natures.get()
    }
}
