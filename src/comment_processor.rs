use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// @module: Comment extraction and substitution

// @const: Triple-quoted docstring blocks, non-greedy, spanning lines
static DOCSTRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(""".*?""")|('''.+?''')"#).unwrap()
});

// @const: C-style block comments, non-greedy, non-nested
static BLOCK_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)/\*.*?\*/").unwrap()
});

/// Comment syntax family of a code file
///
/// This is deliberately coarse: every supported language falls into one of
/// two families, hash-marked line comments or C-style slash comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSyntax {
    /// `#` line comments and triple-quoted docstrings (Python, Ruby, shell, ...)
    ScriptStyle,
    /// `//` line comments and `/* */` block comments (C family, Rust, Go, ...)
    BraceStyle,
}

/// Kind of an extracted comment span
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommentKind {
    /// Triple-quoted multi-line block (script-style files)
    Docstring,
    /// `/* */` block (brace-style files)
    Block,
    /// Single-line comment, either marker
    Line,
}

/// Stable per-file identifier for an extracted comment span
///
/// Docstring and block labels carry a discovery ordinal; line labels carry
/// the zero-based line index. Labels are unique within one file's pass and
/// correlate original and translated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentLabel {
    /// Span kind
    pub kind: CommentKind,
    /// Discovery ordinal or line index, depending on kind
    pub index: usize,
}

impl CommentLabel {
    /// A docstring label with the given discovery ordinal
    pub fn docstring(index: usize) -> Self {
        Self { kind: CommentKind::Docstring, index }
    }

    /// A block-comment label with the given discovery ordinal
    pub fn block(index: usize) -> Self {
        Self { kind: CommentKind::Block, index }
    }

    /// A line-comment label with the given zero-based line index
    pub fn line(index: usize) -> Self {
        Self { kind: CommentKind::Line, index }
    }
}

impl fmt::Display for CommentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CommentKind::Docstring => write!(f, "docstring_{}", self.index),
            CommentKind::Block => write!(f, "block_{}", self.index),
            CommentKind::Line => write!(f, "line_{}", self.index),
        }
    }
}

/// Mapping from label to the exact original comment span, delimiters included
pub type CommentSet = BTreeMap<CommentLabel, String>;

/// Extract comment spans from file content
///
/// This is a heuristic, regex-based extractor, not a tokenizer. It has no
/// awareness of string-literal boundaries or escape sequences: a `#` or `//`
/// inside a string literal is indistinguishable from a real comment marker
/// and will be captured. Likewise any triple-quoted string counts as a
/// docstring. Callers get an empty set, not an error, when nothing matches.
pub fn extract_comments(content: &str, syntax: CommentSyntax) -> CommentSet {
    let mut comments = CommentSet::new();

    match syntax {
        CommentSyntax::ScriptStyle => {
            for (i, m) in DOCSTRING_REGEX.find_iter(content).enumerate() {
                comments.insert(CommentLabel::docstring(i), m.as_str().to_string());
            }

            for (i, line) in content.split('\n').enumerate() {
                if let Some(pos) = line.find('#') {
                    let comment_part = &line[pos + 1..];
                    if !comment_part.trim().is_empty() {
                        comments.insert(CommentLabel::line(i), format!("#{}", comment_part));
                    }
                }
            }
        }
        CommentSyntax::BraceStyle => {
            for (i, m) in BLOCK_COMMENT_REGEX.find_iter(content).enumerate() {
                comments.insert(CommentLabel::block(i), m.as_str().to_string());
            }

            for (i, line) in content.split('\n').enumerate() {
                if let Some(pos) = line.find("//") {
                    let comment_part = &line[pos + 2..];
                    if !comment_part.trim().is_empty() {
                        comments.insert(CommentLabel::line(i), format!("//{}", comment_part));
                    }
                }
            }
        }
    }

    comments
}

/// Substitute translated comment spans back into the original content
///
/// Labels are processed in descending order of their positional index so that
/// spans later in the file are replaced before earlier ones. Each original
/// span is replaced wherever it occurs (whole-string replace-all, not
/// position-anchored splicing); two labels with byte-identical original text
/// therefore both end up with whichever translation is applied last. A label
/// missing from the translation map keeps its original text.
pub fn replace_comments(
    content: &str,
    originals: &CommentSet,
    translations: &CommentSet,
) -> String {
    let mut labels: Vec<&CommentLabel> = originals.keys().collect();
    labels.sort_by(|a, b| b.index.cmp(&a.index));

    let mut updated = content.to_string();
    for label in labels {
        let original = &originals[label];
        if let Some(translated) = translations.get(label) {
            if original != translated {
                updated = updated.replace(original.as_str(), translated.as_str());
            }
        }
    }

    updated
}
