use std::sync::LazyLock;

use regex::Regex;

use crate::models::{HeaderKind, HeaderMatch};

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*\r?\n \* SPDX-FileCopyrightText:.*?\*/")
        .expect("block comment header pattern is valid")
});

/// `/* ... */` header whose first line is an `SPDX-FileCopyrightText` tag.
///
/// The whole comment, delimiters included, is replaced.
pub struct BlockCommentShape;

impl BlockCommentShape {
    pub fn new() -> Self {
        Self
    }
}

impl super::HeaderShape for BlockCommentShape {
    fn find(&self, content: &str) -> Option<HeaderMatch> {
        BLOCK_RE.find(content).map(|m| HeaderMatch {
            kind: HeaderKind::BlockComment,
            span: m.range(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::HeaderShape;

    #[test]
    fn test_finds_php_header() {
        let content = "<?php\n/*\n * SPDX-FileCopyrightText: 2023 A\n *\n * SPDX-License-Identifier: GPL-3.0-or-later\n */\n\nuse foo;\n";
        let m = BlockCommentShape::new().find(content).unwrap();
        assert_eq!(m.kind, HeaderKind::BlockComment);
        assert_eq!(m.span.start, "<?php\n".len());
        assert!(content[m.span.clone()].ends_with("*/"));
        assert_eq!(&content[m.span.end..], "\n\nuse foo;\n");
    }

    #[test]
    fn test_stops_at_first_close() {
        let content = "/*\n * SPDX-FileCopyrightText: 2023 A\n */\ncode();\n/* other */\n";
        let m = BlockCommentShape::new().find(content).unwrap();
        assert_eq!(&content[m.span], "/*\n * SPDX-FileCopyrightText: 2023 A\n */");
    }

    #[test]
    fn test_requires_tag_on_first_line() {
        let content = "/*\n * Some docs\n * SPDX-FileCopyrightText: 2023 A\n */\n";
        assert!(BlockCommentShape::new().find(content).is_none());
    }

    #[test]
    fn test_docblock_is_not_matched() {
        let content = "/**\n * SPDX-FileCopyrightText: 2023 A\n */\n";
        assert!(BlockCommentShape::new().find(content).is_none());
    }
}
