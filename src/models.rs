use std::ops::Range;

/// The recognized SPDX header layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// `/*\n * SPDX-FileCopyrightText: ... */` (PHP, TypeScript).
    BlockComment,
    /// `<!--\nSPDX-FileCopyrightText: ...\n-->` (Svelte).
    HtmlComment,
}

impl std::fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderKind::BlockComment => write!(f, "block comment"),
            HeaderKind::HtmlComment => write!(f, "html comment"),
        }
    }
}

/// A header span located inside a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub kind: HeaderKind,
    /// Byte range of the text to replace.
    pub span: Range<usize>,
}

/// What happened to a single file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// No shape matched; the text is returned as it was read.
    Unchanged,
    /// The shapes that were replaced, in the order they were applied.
    Rewritten(Vec<HeaderKind>),
}
