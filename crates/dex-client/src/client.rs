use std::time::Duration;

use async_trait::async_trait;
use dex_config::api::ApiConfig;
use reqwest::Client;

use crate::provider::{ProviderError, ResourceProvider};

#[derive(Clone)]
pub struct PokeApiClient {
    base_url: String,
    client: Client,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl ResourceProvider for PokeApiClient {
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, ProviderError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} -> {}", url, status);
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProviderError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = ApiConfig {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            ..ApiConfig::default()
        };
        let client = PokeApiClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint("pokemon/pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
        assert_eq!(
            client.endpoint("/nature/?limit=100"),
            "https://pokeapi.co/api/v2/nature/?limit=100"
        );
    }
}
