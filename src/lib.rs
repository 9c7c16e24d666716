/*!
 * # transdoc - AI-powered codebase documentation translator
 *
 * A Rust library for translating the documentation of a source tree into
 * another natural language while leaving the code itself untouched.
 *
 * ## Features
 *
 * - Walk a source tree, pruning hidden and vendored directories
 * - Translate documentation files (markdown, text, rst, asciidoc) wholesale
 * - Extract comments from code files (script-style `#` and docstrings,
 *   brace-style line and block comments) and translate only those spans
 * - Pluggable translation providers:
 *   - Ollama (local LLM)
 *   - OpenAI API
 * - Per-file failure isolation: a bad file never aborts the run
 * - Mirrored output tree with a persistent run log
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `file_utils`: File classification, tree walking and filesystem operations
 * - `comment_processor`: Comment extraction and substitution (the core)
 * - `translation`: The translation gateway around a provider client
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for the translation providers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod comment_processor;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use comment_processor::{extract_comments, replace_comments, CommentLabel, CommentSet, CommentSyntax};
pub use file_utils::{FileCategory, FileManager};
pub use language_utils::{get_language_name, languages_match, normalize_language_code};
pub use translation::TranslationService;
pub use errors::{AppError, ProviderError, TranslationError};
