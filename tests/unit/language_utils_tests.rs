/*!
 * Tests for language identifier resolution
 */

use transdoc::language_utils::{get_language_name, languages_match, normalize_language_code};

/// ISO 639-1, ISO 639-3 codes and English names resolve to the same code
#[test]
fn test_normalize_withCodeAndNameVariants_shouldAgree() {
    assert_eq!(normalize_language_code("de").unwrap(), "de");
    assert_eq!(normalize_language_code("deu").unwrap(), "de");
    assert_eq!(normalize_language_code("German").unwrap(), "de");
    assert_eq!(normalize_language_code("german").unwrap(), "de");
    assert_eq!(normalize_language_code(" FR ").unwrap(), "fr");
}

/// Unknown identifiers are rejected rather than passed through
#[test]
fn test_normalize_withUnknownIdentifier_shouldFail() {
    assert!(normalize_language_code("klingon").is_err());
    assert!(normalize_language_code("zz").is_err());
    assert!(normalize_language_code("").is_err());
}

/// Language names round-trip through resolution
#[test]
fn test_getLanguageName_withCode_shouldReturnEnglishName() {
    assert_eq!(get_language_name("de").unwrap(), "German");
    assert_eq!(get_language_name("fr").unwrap(), "French");
}

/// Matching treats code and name forms as the same language
#[test]
fn test_languagesMatch_withEquivalentForms_shouldReturnTrue() {
    assert!(languages_match("de", "German"));
    assert!(languages_match("deu", "de"));
    assert!(!languages_match("de", "fr"));
    assert!(!languages_match("de", "not-a-language"));
}
