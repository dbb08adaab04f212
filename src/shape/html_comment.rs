use std::sync::LazyLock;

use regex::Regex;

use crate::models::{HeaderKind, HeaderMatch};

// `regex` has no look-around: the markers are matched and only group 1 is replaced.
static HTML_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--\r?\n(SPDX-FileCopyrightText:.*?)\r?\n-->")
        .expect("html comment header pattern is valid")
});

/// `<!--` / `-->` header used by Svelte components.
///
/// Only the lines between the markers are replaced; the markers stay in place.
pub struct HtmlCommentShape;

impl HtmlCommentShape {
    pub fn new() -> Self {
        Self
    }
}

impl super::HeaderShape for HtmlCommentShape {
    fn find(&self, content: &str) -> Option<HeaderMatch> {
        let inner = HTML_RE.captures(content)?.get(1)?;
        Some(HeaderMatch {
            kind: HeaderKind::HtmlComment,
            span: inner.range(),
        })
    }
}
