use serde::{Deserialize, Serialize};

/// One stage of the narrated evolution line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStep {
    pub name: String,
    pub reason: String,
}

impl EvolutionStep {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: u32,
}

/// Move annotated with the level it is learned at (0 when unknown)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub name: String,
    pub level: u32,
}

/// Everything the presentation layer renders for one lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DexView {
    pub name: String,
    pub image_url: String,
    pub abilities: Vec<String>,
    pub evolution_chain: Vec<EvolutionStep>,
    pub gender: String,
    pub growth_rate: String,
    pub natures: Vec<String>,
    pub stats: Vec<StatEntry>,
    pub types: Vec<String>,
    pub weaknesses: Vec<String>,
    pub moves: Vec<MoveEntry>,
    pub type_advantages: Vec<String>,
    pub type_disadvantages: Vec<String>,
}
