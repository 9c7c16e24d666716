/*!
 * Core translation gateway implementation.
 *
 * This module contains the TranslationService struct, the boundary around
 * the external translation capability. It owns the provider client, the
 * whitespace short-circuit and the failure-to-identity fallback: a provider
 * error never propagates out of `translate_text`, it only shows up as
 * unchanged text and an incremented failure counter.
 */

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

use crate::app_config::{TranslationConfig, TranslationProvider};
use crate::language_utils;
use crate::providers::ollama::Ollama;
use crate::providers::openai::OpenAI;
use crate::providers::{Provider, TranslationRequest};

/// Translation gateway around a single provider client
pub struct TranslationService {
    /// The provider client, boxed so tests can inject a double
    provider: Box<dyn Provider>,
    /// Lowercase ISO code of the target language
    target_language_code: String,
    /// English name of the target language
    target_language_name: String,
    /// Number of provider calls that fell back to the original text
    failure_count: AtomicUsize,
}

impl TranslationService {
    /// Create a translation service from configuration
    ///
    /// Fails when the target language is unknown, the selected provider has
    /// no configuration entry, or its endpoint does not parse as a URL.
    /// Construction failure is fatal to the run; translation failures after
    /// construction never are.
    pub fn new(config: &TranslationConfig, target_language: &str) -> Result<Self> {
        let provider_config = config
            .get_provider_config()
            .ok_or_else(|| anyhow!("No configuration for provider: {}", config.provider))?;

        parse_endpoint(&provider_config.endpoint)?;

        let provider: Box<dyn Provider> = match config.provider {
            TranslationProvider::Ollama => Box::new(Ollama::new(
                &provider_config.endpoint,
                &provider_config.model,
                provider_config.timeout_secs,
            )),
            TranslationProvider::OpenAI => {
                if provider_config.api_key.is_empty() {
                    return Err(anyhow!("OpenAI provider requires an API key"));
                }
                Box::new(OpenAI::new(
                    &provider_config.endpoint,
                    &provider_config.api_key,
                    &provider_config.model,
                    provider_config.timeout_secs,
                ))
            }
        };

        Self::with_provider(provider, target_language)
    }

    /// Create a translation service with an explicit provider
    ///
    /// This is the seam tests use to substitute a mock for the HTTP clients.
    pub fn with_provider(provider: Box<dyn Provider>, target_language: &str) -> Result<Self> {
        let target_language_code = language_utils::normalize_language_code(target_language)
            .context("Cannot initialize translation service")?;
        let target_language_name = language_utils::get_language_name(target_language)?;

        Ok(Self {
            provider,
            target_language_code,
            target_language_name,
            failure_count: AtomicUsize::new(0),
        })
    }

    /// Translate a piece of text, falling back to the original on failure
    ///
    /// Empty or whitespace-only input is returned unchanged without a
    /// provider call. Provider failures are logged, counted and absorbed;
    /// the caller always gets usable text back. One attempt per call, no
    /// retry.
    pub async fn translate_text(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let request = TranslationRequest::new(
            text,
            &self.target_language_code,
            &self.target_language_name,
        );

        match self.provider.translate(&request).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(
                    "Translation failed via {}, keeping original text: {}",
                    self.provider.name(),
                    e
                );
                self.failure_count.fetch_add(1, Ordering::SeqCst);
                text.to_string()
            }
        }
    }

    /// Test the connection to the underlying provider
    pub async fn test_connection(&self) -> Result<()> {
        debug!("Testing connection to provider: {}", self.provider.name());
        self.provider
            .test_connection()
            .await
            .with_context(|| format!("Connection test failed for provider {}", self.provider.name()))
    }

    /// Lowercase ISO code the service translates into
    pub fn target_language_code(&self) -> &str {
        &self.target_language_code
    }

    /// English name of the language the service translates into
    pub fn target_language_name(&self) -> &str {
        &self.target_language_name
    }

    /// Number of translate calls that fell back to the original text
    pub fn failure_count(&self) -> usize {
        self.failure_count.load(Ordering::SeqCst)
    }
}

/// Parse an endpoint string, accepting bare host:port without a scheme
fn parse_endpoint(endpoint: &str) -> Result<Url> {
    if endpoint.is_empty() {
        return Err(anyhow!("Endpoint cannot be empty"));
    }

    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("http://{}", endpoint))?
    };

    if url.host_str().is_none() {
        return Err(anyhow!("Invalid host in endpoint: {}", endpoint));
    }

    Ok(url)
}
