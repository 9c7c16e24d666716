/*!
 * Provider implementations for different translation backends.
 *
 * This module contains client implementations for the supported providers:
 * - Ollama: Local LLM server
 * - OpenAI: OpenAI API integration
 * - Mock: deterministic test double
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single translation request handed to a provider
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// The text to translate
    pub text: String,
    /// Lowercase ISO code of the target language
    pub target_language_code: String,
    /// English name of the target language, used in prompts
    pub target_language_name: String,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        target_language_code: impl Into<String>,
        target_language_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            target_language_code: target_language_code.into(),
            target_language_name: target_language_name.into(),
        }
    }
}

/// Common trait for all translation providers
///
/// The trait is object-safe so the translation service can hold a boxed
/// provider, which is what lets tests inject a mock in place of a real
/// HTTP client.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate a single piece of text
    ///
    /// # Arguments
    /// * `request` - The text and target language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Human-readable provider name for logging
    fn name(&self) -> &str;
}

/// System prompt shared by the LLM-backed providers
pub(crate) fn translation_system_prompt(language_name: &str) -> String {
    format!(
        "You are a translation engine. Translate the text you receive into {}. \
         Preserve comment markers (#, //, /* */, \"\"\"), indentation, whitespace \
         and line breaks exactly as they appear. Output only the translated text, \
         with no explanations and no surrounding quotes.",
        language_name
    )
}

pub mod ollama;
pub mod openai;
pub mod mock;
