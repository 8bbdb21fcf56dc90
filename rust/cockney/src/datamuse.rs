//! The Datamuse rhyme source.
//!
//! Rhymes are fetched with a single GET per word:
//!
//! ```text
//! GET {endpoint}?rel_rhy={word}[&max={n}]
//! ```
//!
//! The response is a JSON array of objects, each carrying at least a `word`
//! field. The array is already ranked by the service and is passed on in
//! that order.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{CockneyError, RhymeCandidate, RhymeSource};

/// The public Datamuse words endpoint.
pub const DATAMUSE_ENDPOINT: &str = "https://api.datamuse.com/words";

/// Configuration for [`DatamuseRhymeSource`]
#[derive(Clone, Debug)]
pub struct DatamuseConfig {
    /// Base URL of the words API (e.g., "https://api.datamuse.com/words")
    pub endpoint: String,

    /// Optional timeout for requests in seconds (default: 30)
    pub timeout_seconds: Option<u64>,

    /// Optional cap on the number of rhymes requested per word
    pub max_results: Option<usize>,
}

impl Default for DatamuseConfig {
    fn default() -> Self {
        Self {
            endpoint: DATAMUSE_ENDPOINT.to_string(),
            timeout_seconds: Some(30),
            max_results: None,
        }
    }
}

impl DatamuseConfig {
    /// Create a new configuration pointing at `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Limit the number of rhymes requested per word
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }
}

/// One entry of a Datamuse response. Only `word` is required.
#[derive(Debug, Clone, Deserialize)]
struct DatamuseWord {
    word: String,
    #[serde(default)]
    score: Option<u64>,
}

/// Fetches rhymes from a Datamuse-compatible HTTP API.
#[derive(Clone, Debug)]
pub struct DatamuseRhymeSource {
    config: DatamuseConfig,
    client: Client,
}

impl DatamuseRhymeSource {
    /// Create a new source with the given configuration
    pub fn new(config: DatamuseConfig) -> Self {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout_seconds {
            client_builder = client_builder.timeout(std::time::Duration::from_secs(timeout));
        }

        let client = client_builder.build().unwrap_or_else(|error| {
            warn!(%error, "Could not configure the HTTP client; requests will have no timeout");
            Client::new()
        });

        Self { config, client }
    }

    pub fn config(&self) -> &DatamuseConfig {
        &self.config
    }

    /// Build the lookup request for `word`. The service is keyed by the
    /// lowercased word.
    fn request(&self, word: &str) -> reqwest::RequestBuilder {
        let mut query = vec![("rel_rhy", word.to_lowercase())];
        if let Some(max) = self.config.max_results {
            query.push(("max", max.to_string()));
        }

        self.client.get(&self.config.endpoint).query(&query)
    }
}

impl Default for DatamuseRhymeSource {
    fn default() -> Self {
        Self::new(DatamuseConfig::default())
    }
}

#[async_trait]
impl RhymeSource for DatamuseRhymeSource {
    async fn fetch_rhymes(&self, base_form: &str) -> Result<Vec<RhymeCandidate>, CockneyError> {
        let unavailable = |reason: String| CockneyError::SourceUnavailable {
            word: base_form.to_string(),
            reason,
        };

        let response = self
            .request(base_form)
            .send()
            .await
            .map_err(|e| unavailable(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            return Err(unavailable(format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let words: Vec<DatamuseWord> = response
            .json()
            .await
            .map_err(|e| unavailable(format!("Invalid response body: {}", e)))?;

        debug!(word = %base_form, count = words.len(), "Fetched rhymes");

        Ok(words
            .into_iter()
            .inspect(|entry| {
                tracing::trace!(rhyme = %entry.word, score = ?entry.score, "Rhyme candidate")
            })
            .map(|entry| RhymeCandidate::new(entry.word))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DatamuseConfig::new("https://rhymes.example.com/words")
            .with_timeout(5)
            .with_max_results(50);

        assert_eq!(config.endpoint, "https://rhymes.example.com/words");
        assert_eq!(config.timeout_seconds, Some(5));
        assert_eq!(config.max_results, Some(50));
    }

    #[test]
    fn test_default_config_targets_datamuse() {
        let config = DatamuseConfig::default();
        assert_eq!(config.endpoint, DATAMUSE_ENDPOINT);
        assert_eq!(config.timeout_seconds, Some(30));
        assert_eq!(config.max_results, None);
    }

    #[test]
    fn test_request_url_lowercases_the_word() -> anyhow::Result<()> {
        let source = DatamuseRhymeSource::new(DatamuseConfig::default().with_max_results(10));
        let request = source.request("Stair").build()?;

        assert_eq!(
            request.url().as_str(),
            "https://api.datamuse.com/words?rel_rhy=stair&max=10"
        );
        Ok(())
    }

    #[test]
    fn test_response_entries_need_only_a_word() -> anyhow::Result<()> {
        let body = r#"[{"word":"fred astaire","score":312,"numSyllables":3},{"word":"pear"}]"#;
        let words: Vec<DatamuseWord> = serde_json::from_str(body)?;

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "fred astaire");
        assert_eq!(words[0].score, Some(312));
        assert_eq!(words[1].score, None);
        Ok(())
    }
}
