use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for resolving the target-language argument
///
/// The CLI accepts either an English language name ("German"), an ISO 639-1
/// code ("de") or an ISO 639-2/T code ("deu"). Providers are handed a
/// lowercase code plus the English name for prompting.

/// Resolve a user-supplied language identifier to an isolang Language
pub fn resolve_language(input: &str) -> Result<Language> {
    let normalized = input.trim().to_lowercase();

    if normalized.is_empty() {
        return Err(anyhow!("Language identifier is empty"));
    }

    // Two-letter ISO 639-1 code
    if normalized.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized) {
            return Ok(lang);
        }
    }

    // Three-letter ISO 639-3 / 639-2T code
    if normalized.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized) {
            return Ok(lang);
        }
    }

    // English language name ("german", "french", ...)
    if let Some(lang) = Language::from_name(&capitalize(&normalized)) {
        return Ok(lang);
    }

    Err(anyhow!("Unknown language identifier: {}", input))
}

/// Normalize a language identifier to a lowercase ISO code
///
/// Prefers the two-letter ISO 639-1 code, falling back to the three-letter
/// ISO 639-3 code for languages without one.
pub fn normalize_language_code(input: &str) -> Result<String> {
    let lang = resolve_language(input)?;

    if let Some(code) = lang.to_639_1() {
        return Ok(code.to_string());
    }

    Ok(lang.to_639_3().to_string())
}

/// Get the English language name for a user-supplied identifier
pub fn get_language_name(input: &str) -> Result<String> {
    Ok(resolve_language(input)?.to_name().to_string())
}

/// Check if two language identifiers refer to the same language
pub fn languages_match(first: &str, second: &str) -> bool {
    match (resolve_language(first), resolve_language(second)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// isolang's name lookup is case-sensitive ("German", not "german")
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
