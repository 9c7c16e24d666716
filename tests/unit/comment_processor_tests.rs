/*!
 * Tests for comment extraction and substitution
 *
 * This is the correctness core of the tool, so the known limitations of the
 * heuristic extractor (string-literal confusion, duplicate-span hazard,
 * docstring/line-comment double-counting) are pinned here as current
 * behavior rather than silently inherited.
 */

use transdoc::comment_processor::{
    extract_comments, replace_comments, CommentLabel, CommentSet, CommentSyntax,
};

/// Two hash comments on separate lines yield two line-comment records
#[test]
fn test_extract_scriptStyle_withTwoLineComments_shouldYieldTwoRecords() {
    let content = "x = 1  # set x\ny = 2  # set y";
    let comments = extract_comments(content, CommentSyntax::ScriptStyle);

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[&CommentLabel::line(0)], "# set x");
    assert_eq!(comments[&CommentLabel::line(1)], "# set y");
}

/// Substitution replaces exactly the captured spans, markers included
#[test]
fn test_replace_scriptStyle_withTranslatedComments_shouldKeepCodeIntact() {
    let content = "x = 1  # set x\ny = 2  # set y";
    let originals = extract_comments(content, CommentSyntax::ScriptStyle);

    let mut translations = CommentSet::new();
    translations.insert(CommentLabel::line(0), "# STUB_X".to_string());
    translations.insert(CommentLabel::line(1), "# STUB_Y".to_string());

    let updated = replace_comments(content, &originals, &translations);
    assert_eq!(updated, "x = 1  # STUB_X\ny = 2  # STUB_Y");
}

/// Brace-style input with one block and one line comment yields one of each
#[test]
fn test_extract_braceStyle_withBlockAndLineComment_shouldYieldBoth() {
    let content = "int a; /* init a */ int b; // init b";
    let comments = extract_comments(content, CommentSyntax::BraceStyle);

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[&CommentLabel::block(0)], "/* init a */");
    assert_eq!(comments[&CommentLabel::line(0)], "// init b");
}

/// Block and line comments on the same line are replaced independently
#[test]
fn test_replace_braceStyle_withBlockAndLineComment_shouldReplaceIndependently() {
    let content = "int a; /* init a */ int b; // init b";
    let originals = extract_comments(content, CommentSyntax::BraceStyle);

    let mut translations = CommentSet::new();
    translations.insert(CommentLabel::block(0), "/* BLOCK */".to_string());
    translations.insert(CommentLabel::line(0), "// LINE".to_string());

    let updated = replace_comments(content, &originals, &translations);
    assert_eq!(updated, "int a; /* BLOCK */ int b; // LINE");
}

/// Triple-quoted blocks are captured as docstrings in discovery order
#[test]
fn test_extract_scriptStyle_withDocstrings_shouldLabelByDiscoveryOrder() {
    let content = "\"\"\"first\"\"\"\nx = 1\n'''second'''\n";
    let comments = extract_comments(content, CommentSyntax::ScriptStyle);

    assert_eq!(comments[&CommentLabel::docstring(0)], "\"\"\"first\"\"\"");
    assert_eq!(comments[&CommentLabel::docstring(1)], "'''second'''");
}

/// A blank comment tail (marker followed by whitespace) is not captured
#[test]
fn test_extract_scriptStyle_withBlankCommentTail_shouldSkipLine() {
    let content = "x = 1  #   \ny = 2";
    let comments = extract_comments(content, CommentSyntax::ScriptStyle);
    assert!(comments.is_empty());
}

/// Content without any comment markers produces an empty set, not an error
#[test]
fn test_extract_withNoComments_shouldReturnEmptySet() {
    let script = extract_comments("x = 1\ny = 2\n", CommentSyntax::ScriptStyle);
    let brace = extract_comments("int a = 1;\n", CommentSyntax::BraceStyle);

    assert!(script.is_empty());
    assert!(brace.is_empty());
}

/// Known limitation: a `#` inside a string literal is captured as a comment
#[test]
fn test_extract_scriptStyle_withHashInsideStringLiteral_shouldStillCapture() {
    let content = "s = \"color: #fff\"";
    let comments = extract_comments(content, CommentSyntax::ScriptStyle);

    assert_eq!(comments[&CommentLabel::line(0)], "#fff\"");
}

/// Known limitation: a line inside a docstring that contains `#` is
/// double-counted as both part of the docstring and a line comment
#[test]
fn test_extract_scriptStyle_withHashInsideDocstring_shouldDoubleCount() {
    let content = "\"\"\"header # note\nbody\n\"\"\"\nx = 1\n";
    let comments = extract_comments(content, CommentSyntax::ScriptStyle);

    assert!(comments.contains_key(&CommentLabel::docstring(0)));
    assert_eq!(comments[&CommentLabel::line(0)], "# note");
}

/// Known limitation: byte-identical spans under distinct labels all receive
/// the translation of the highest-index label (it is applied first and
/// replaces every occurrence)
#[test]
fn test_replace_withDuplicateOriginalText_shouldApplyHighestIndexTranslation() {
    let content = "a = 1  # same\nb = 2  # same";
    let originals = extract_comments(content, CommentSyntax::ScriptStyle);
    assert_eq!(originals.len(), 2);

    let mut translations = CommentSet::new();
    translations.insert(CommentLabel::line(0), "# FIRST".to_string());
    translations.insert(CommentLabel::line(1), "# SECOND".to_string());

    let updated = replace_comments(content, &originals, &translations);
    assert_eq!(updated, "a = 1  # SECOND\nb = 2  # SECOND");
}

/// A label missing from the translation map keeps its original text
#[test]
fn test_replace_withMissingTranslation_shouldKeepOriginalSpan() {
    let content = "x = 1  # keep me\ny = 2  # translate me";
    let originals = extract_comments(content, CommentSyntax::ScriptStyle);

    let mut translations = CommentSet::new();
    translations.insert(CommentLabel::line(1), "# DONE".to_string());

    let updated = replace_comments(content, &originals, &translations);
    assert_eq!(updated, "x = 1  # keep me\ny = 2  # DONE");
}

/// Round-trip: after substitution with distinct translations, no original
/// span survives in the output
#[test]
fn test_replace_thenReextract_shouldNotResurrectOriginals() {
    let content = "# alpha\nx = 1\n# beta\ny = 2  # gamma\n";
    let originals = extract_comments(content, CommentSyntax::ScriptStyle);

    let mut translations = CommentSet::new();
    for (label, original) in &originals {
        translations.insert(*label, format!("# T[{}]", original.trim_start_matches('#').trim()));
    }

    let updated = replace_comments(content, &originals, &translations);
    for original in originals.values() {
        assert!(
            !updated.contains(original.as_str()),
            "original span {:?} survived substitution",
            original
        );
    }

    let reextracted = extract_comments(&updated, CommentSyntax::ScriptStyle);
    assert_eq!(reextracted.len(), originals.len());
}

/// Labels display in the kind_index format used by the logs
#[test]
fn test_commentLabel_display_shouldUseKindAndIndex() {
    assert_eq!(CommentLabel::docstring(0).to_string(), "docstring_0");
    assert_eq!(CommentLabel::block(2).to_string(), "block_2");
    assert_eq!(CommentLabel::line(17).to_string(), "line_17");
}
