//! Pure projections over fetched records.

use std::collections::HashSet;

use dex_types::{DamageRelations, MoveEntry, MoveSlot, NamedResource};

pub const NOT_LOADED: &str = "Data not loaded";
pub const UNKNOWN_GROWTH_RATE: &str = "Unknown";

/// Species gender-rate code (eighths female, -1 genderless) as a label
pub fn describe_gender_rate(rate: i8) -> String {
    match rate {
        -1 => "Genderless".to_string(),
        0 => "Always male".to_string(),
        8 => "Always female".to_string(),
        _ => {
            let female = f64::from(rate) / 8.0 * 100.0;
            let male = 100.0 - female;
            format!("{male}% male, {female}% female")
        }
    }
}

/// Which list of a type's damage relations to collect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRelation {
    /// Types dealing double damage to us
    Weakness,
    /// Types we deal double damage to
    Advantage,
    /// Types dealing half damage to us
    Resistance,
}

impl TypeRelation {
    pub fn select(self, relations: &DamageRelations) -> &[NamedResource] {
        match self {
            TypeRelation::Weakness => &relations.double_damage_from,
            TypeRelation::Advantage => &relations.double_damage_to,
            TypeRelation::Resistance => &relations.half_damage_from,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeRelation::Weakness => "weaknesses",
            TypeRelation::Advantage => "type advantages",
            TypeRelation::Resistance => "type disadvantages",
        }
    }
}

/// Names in first-seen order with duplicates dropped
#[derive(Debug, Default)]
pub struct OrderedNames {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl OrderedNames {
    pub fn extend<'a>(&mut self, resources: impl IntoIterator<Item = &'a NamedResource>) {
        for resource in resources {
            if self.seen.insert(resource.name.clone()) {
                self.names.push(resource.name.clone());
            }
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// Moves with the level from their first version-group entry, 0 if none
pub fn moves_with_levels(moves: &[MoveSlot]) -> Vec<MoveEntry> {
    moves
        .iter()
        .map(|slot| MoveEntry {
            name: slot.entry.name.clone(),
            level: slot
                .version_group_details
                .first()
                .map_or(0, |detail| detail.level_learned_at),
        })
        .collect()
}
