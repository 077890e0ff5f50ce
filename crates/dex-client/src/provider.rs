/// Read-only JSON resource source
#[async_trait::async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Absolute URL of a path inside the API namespace, e.g. `pokemon/pikachu`
    fn endpoint(&self, path: &str) -> String;

    /// Fetch a JSON document by absolute URL
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}
