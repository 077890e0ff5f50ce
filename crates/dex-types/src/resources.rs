//! Shapes of the remote documents the aggregator consumes.
//!
//! Only the fields that are actually read are modelled; everything else in the
//! payloads is ignored by serde.

use serde::{Deserialize, Serialize};

/// `{ name, url }` reference used everywhere by the remote API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `pokemon/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    pub species: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub entry: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionGroupDetail {
    #[serde(default)]
    pub level_learned_at: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Species document, reached through `PokemonRecord::species.url`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Eighths female, or -1 for genderless
    pub gender_rate: i8,
    pub growth_rate: NamedResource,
    pub evolution_chain: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChainRecord {
    pub chain: ChainLink,
}

/// One node of the evolution tree.
///
/// `evolution_details` describes how this node is reached from its parent and is
/// empty on the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedResource,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub item: Option<NamedResource>,
    pub held_item: Option<NamedResource>,
    pub time_of_day: Option<String>,
    pub known_move_type: Option<NamedResource>,
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    pub gender: Option<u8>,
    pub relative_physical_stats: Option<i8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthRateRecord {
    #[serde(default)]
    pub name: String,
}

/// Paged `nature/` listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NatureCatalog {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// `type/{name}`, reached through `TypeSlot::kind.url`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRecord {
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
}
