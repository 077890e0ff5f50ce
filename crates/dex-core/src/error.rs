use std::fmt;

use dex_client::ProviderError;

/// Which remote document a failure concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Pokemon,
    Species,
    EvolutionChain,
    GrowthRate,
    Natures,
    Type,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Resource::Pokemon => "Pokémon",
            Resource::Species => "Species data",
            Resource::EvolutionChain => "Evolution chain",
            Resource::GrowthRate => "Growth rate data",
            Resource::Natures => "Nature data",
            Resource::Type => "Type data",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{resource} not found: {name}")]
    NotFound { resource: Resource, name: String },

    #[error("{resource} request failed for {name}: {source}")]
    Transport {
        resource: Resource,
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("{resource} for {name} has an unexpected shape: {source}")]
    Malformed {
        resource: Resource,
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Pokémon name is empty")]
    EmptyName,
}

impl LookupError {
    pub(crate) fn from_provider(resource: Resource, name: &str, err: ProviderError) -> Self {
        match err {
            ProviderError::Status(_) => LookupError::NotFound {
                resource,
                name: name.to_string(),
            },
            other => LookupError::Transport {
                resource,
                name: name.to_string(),
                source: other,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }

    pub fn resource(&self) -> Option<Resource> {
        match self {
            LookupError::NotFound { resource, .. }
            | LookupError::Transport { resource, .. }
            | LookupError::Malformed { resource, .. } => Some(*resource),
            LookupError::EmptyName => None,
        }
    }
}
