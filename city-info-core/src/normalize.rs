//! Cleanup of encyclopedia prose before it is written out.

use std::sync::LazyLock;

use regex::Regex;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Column width used when wrapping summaries.
pub const WRAP_WIDTH: usize = 70;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("static regex is valid"));

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("static regex is valid"));

/// Strip parenthetical asides, collapse runs of spaces and wrap to [`WRAP_WIDTH`].
///
/// Embedded newlines are kept as hard breaks. Lines only exceed the width when a
/// single word is longer than it.
pub fn normalize(text: &str) -> String {
    let stripped = PARENTHETICAL.replace_all(text, "");
    let collapsed = SPACE_RUN.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();

    let options = Options::new(WRAP_WIDTH)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::fill(trimmed, options)
}
