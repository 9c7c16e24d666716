use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::comment_processor::{extract_comments, replace_comments, CommentSet, CommentSyntax};
use crate::file_utils::{FileCategory, FileManager};
use crate::translation::TranslationService;

// @module: Application controller for the translation run

/// Name of the persistent run log written under the output directory
pub const RUN_LOG_FILENAME: &str = "transdoc.run.log";

/// Counters reported at the end of a run
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    /// Files yielded by the walk
    pub files_found: usize,
    /// Files classified as documentation or code and written to the output
    pub files_written: usize,
    /// Files skipped by classification
    pub files_skipped: usize,
    /// Files that failed to read or write
    pub files_failed: usize,
    /// Provider calls that fell back to the original text
    pub translation_fallbacks: usize,
}

/// Main application controller for the documentation translation run
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation gateway, shared sequentially across files
    service: TranslationService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = TranslationService::new(&config.translation, &config.target_language)
            .context("Failed to initialize translation service")?;

        Ok(Self { config, service })
    }

    /// Create a controller with an injected translation service (test seam)
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        Self { config, service }
    }

    /// Probe the provider connection through the gateway
    pub async fn test_connection(&self) -> Result<()> {
        self.service.test_connection().await
    }

    /// Run the main workflow over a source tree
    ///
    /// Walks `source_dir`, classifies each file, translates documentation
    /// wholesale and code comments individually, and writes results to the
    /// mirrored path under `output_dir`. Per-file failures are logged and
    /// counted but never abort the run; only the returned summary reflects
    /// them. The process exits zero after a completed run regardless of how
    /// many individual files failed.
    pub async fn run(&self, source_dir: PathBuf, output_dir: PathBuf) -> Result<RunSummary> {
        let start_time = Instant::now();

        if !source_dir.is_dir() {
            return Err(anyhow!("Source directory does not exist: {:?}", source_dir));
        }

        FileManager::ensure_dir(&output_dir)?;
        let run_log = output_dir.join(RUN_LOG_FILENAME);

        let files =
            FileManager::collect_translatable_files(&source_dir, &self.config.excluded_dirs);

        info!(
            "Found {} files under {:?}, translating into {}",
            files.len(),
            source_dir,
            self.service.target_language_name()
        );
        self.log_run_event(
            &run_log,
            &format!(
                "Run started: {} files, target language {}",
                files.len(),
                self.service.target_language_code()
            ),
        );

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );

        let mut summary = RunSummary {
            files_found: files.len(),
            ..RunSummary::default()
        };

        for file in &files {
            progress.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let category = FileCategory::classify(file);
            if category == FileCategory::Skip {
                summary.files_skipped += 1;
                progress.inc(1);
                continue;
            }

            match self.process_one_file(file, &source_dir, &output_dir, category).await {
                Ok(output_path) => {
                    summary.files_written += 1;
                    debug!("Wrote {:?}", output_path);
                    self.log_run_event(&run_log, &format!("OK {:?}", file));
                }
                Err(e) => {
                    summary.files_failed += 1;
                    error!("Error processing {:?}: {:#}", file, e);
                    self.log_run_event(&run_log, &format!("FAILED {:?}: {:#}", file, e));
                }
            }

            progress.inc(1);
        }

        progress.finish_and_clear();

        summary.translation_fallbacks = self.service.failure_count();

        let elapsed = start_time.elapsed();
        info!(
            "Translation complete in {}: {} written, {} skipped, {} failed, {} fallback(s). Output: {:?}",
            Self::format_duration(elapsed),
            summary.files_written,
            summary.files_skipped,
            summary.files_failed,
            summary.translation_fallbacks,
            output_dir
        );
        self.log_run_event(
            &run_log,
            &format!(
                "Run finished: {} written, {} skipped, {} failed, {} fallback(s)",
                summary.files_written,
                summary.files_skipped,
                summary.files_failed,
                summary.translation_fallbacks
            ),
        );

        Ok(summary)
    }

    /// Translate one file and write it to its mirrored output path
    async fn process_one_file(
        &self,
        file: &Path,
        source_dir: &Path,
        output_dir: &Path,
        category: FileCategory,
    ) -> Result<PathBuf> {
        let content = FileManager::read_to_string(file)?;

        let translated = match category {
            FileCategory::Documentation => self.service.translate_text(&content).await,
            FileCategory::Code(syntax) => self.translate_code(file, &content, syntax).await,
            // Should not reach here given the classifier, but copy through unchanged
            FileCategory::Skip => content,
        };

        let output_path = FileManager::mirror_path(source_dir, file, output_dir)?;
        FileManager::write_to_file(&output_path, &translated)?;

        Ok(output_path)
    }

    /// Translate the comments of a code file, leaving the rest untouched
    async fn translate_code(&self, file: &Path, content: &str, syntax: CommentSyntax) -> String {
        let comments = extract_comments(content, syntax);

        if comments.is_empty() {
            warn!("No comments found in {:?}, copying through unchanged", file);
            return content.to_string();
        }

        debug!("Extracted {} comment span(s) from {:?}", comments.len(), file);

        let mut translations = CommentSet::new();
        for (label, original) in &comments {
            let translated = self.service.translate_text(original).await;
            translations.insert(*label, translated);
        }

        replace_comments(content, &comments, &translations)
    }

    /// Append a line to the persistent run log, never failing the run for it
    fn log_run_event(&self, run_log: &Path, message: &str) {
        if let Err(e) = FileManager::append_to_log_file(run_log, message) {
            debug!("Could not append to run log: {}", e);
        }
    }

    /// Format a duration as a human-readable string
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        if total_secs >= 60 {
            format!("{}m{:02}s", total_secs / 60, total_secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
