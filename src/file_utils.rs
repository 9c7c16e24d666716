use anyhow::{Result, Context};
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::Local;
use log::warn;
use walkdir::WalkDir;

use crate::comment_processor::CommentSyntax;

// @module: File classification, tree walking and filesystem utilities

/// Extensions of files whose whole content is natural-language prose
const DOC_EXTENSIONS: &[&str] = &["md", "txt", "rst", "adoc"];

/// Extensions of code files with `#` line comments and triple-quoted docstrings
const SCRIPT_EXTENSIONS: &[&str] = &["py", "rb", "sh", "pl", "yml", "yaml", "toml"];

/// Extensions of code files with `//` and `/* */` comments
const BRACE_EXTENSIONS: &[&str] = &[
    "rs", "js", "ts", "java", "c", "cpp", "h", "hpp", "cs", "php", "go", "swift", "kt", "scala",
];

/// Extensions of binary or generated artifacts that are never translated
const SKIP_EXTENSIONS: &[&str] = &[
    "pyc", "class", "o", "so", "dll", "exe", "jpg", "jpeg", "png", "gif", "ico", "pdf", "zip",
    "gz", "tar", "lock",
];

/// Directory names pruned from the walk at any depth
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules", "target", "venv", ".venv", "vendor", "__pycache__", "dist", "build",
];

/// Category assigned to a path by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Whole file is prose, translated as one unit
    Documentation,
    /// Source code, only extracted comments are translated
    Code(CommentSyntax),
    /// Hidden, binary or unrecognized, never processed
    Skip,
}

impl FileCategory {
    /// Classify a path by its file name and extension
    ///
    /// Pure function of the path string: hidden files and deny-listed
    /// extensions are skipped before the documentation and code sets are
    /// consulted. Extension matching is case-insensitive.
    pub fn classify<P: AsRef<Path>>(path: P) -> FileCategory {
        let path = path.as_ref();

        if let Some(name) = path.file_name() {
            if name.to_string_lossy().starts_with('.') {
                return FileCategory::Skip;
            }
        }

        let ext = match path.extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => return FileCategory::Skip,
        };

        if SKIP_EXTENSIONS.contains(&ext.as_str()) {
            return FileCategory::Skip;
        }
        if DOC_EXTENSIONS.contains(&ext.as_str()) {
            return FileCategory::Documentation;
        }
        if SCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            return FileCategory::Code(CommentSyntax::ScriptStyle);
        }
        if BRACE_EXTENSIONS.contains(&ext.as_str()) {
            return FileCategory::Code(CommentSyntax::BraceStyle);
        }

        FileCategory::Skip
    }
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Compute the mirrored output path for a source file
    ///
    /// The output tree mirrors the source tree's relative paths exactly.
    pub fn mirror_path<P1: AsRef<Path>, P2: AsRef<Path>, P3: AsRef<Path>>(
        source_root: P1,
        source_file: P2,
        output_root: P3,
    ) -> Result<PathBuf> {
        let relative = source_file
            .as_ref()
            .strip_prefix(source_root.as_ref())
            .with_context(|| {
                format!(
                    "File {:?} is not under source root {:?}",
                    source_file.as_ref(),
                    source_root.as_ref()
                )
            })?;

        Ok(output_root.as_ref().join(relative))
    }

    /// Enumerate candidate files under a root directory
    ///
    /// Recursively descends `root`, pruning any directory whose name is
    /// hidden or appears in `excluded_dirs`. Every surviving file path is
    /// yielded; classification happens downstream. Enumeration order follows
    /// the filesystem and is not guaranteed stable across platforms.
    /// Unreadable entries are logged and skipped, never fatal.
    pub fn collect_translatable_files<P: AsRef<Path>>(
        root: P,
        excluded_dirs: &[String],
    ) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root.as_ref()).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }

            let name = entry.file_name().to_string_lossy();
            !name.starts_with('.') && !excluded_dirs.iter().any(|d| d == name.as_ref())
        });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    warn!("Skipping unreadable entry during walk: {}", e);
                }
            }
        }

        files
    }

    /// Append content to a log file with timestamp
    pub fn append_to_log_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {:?}", path.as_ref()))?;

        writeln!(file, "[{}] {}", timestamp, content)
            .with_context(|| format!("Failed to write to log file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
