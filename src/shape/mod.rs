use crate::models::HeaderMatch;

pub mod block_comment;
pub mod html_comment;

/// A recognized layout of SPDX header block.
pub trait HeaderShape {
    /// Locate the first span of this shape in `content`, if any.
    fn find(&self, content: &str) -> Option<HeaderMatch>;
}

/// Every supported shape, in the order they are applied to a file.
pub fn all() -> Vec<Box<dyn HeaderShape>> {
    vec![
        Box::new(block_comment::BlockCommentShape::new()),
        Box::new(html_comment::HtmlCommentShape::new()),
    ]
}
