mod client;
mod provider;

pub use client::PokeApiClient;
pub use provider::{ProviderError, ResourceProvider};
