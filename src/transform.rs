use crate::license::attribution;
use crate::license::template::HeaderTemplate;
use crate::models::RewriteOutcome;
use crate::shape;

/// Replace the SPDX header(s) in `content` with the rendered license header.
///
/// Shapes are applied in [`shape::all`] order, each on the output of the previous one,
/// and each replaces its first match only. Text matching no shape is returned as-is.
pub fn rewrite_headers(content: &str, template: &HeaderTemplate) -> (String, RewriteOutcome) {
    let mut text = content.to_string();
    let mut replaced = Vec::new();

    for shape in shape::all() {
        let Some(found) = shape.find(&text) else {
            continue;
        };
        let holders = attribution::extract(&text[found.span.clone()]);
        let header = template.render(&holders);
        text.replace_range(found.span, &header);
        replaced.push(found.kind);
    }

    let outcome = if replaced.is_empty() {
        RewriteOutcome::Unchanged
    } else {
        RewriteOutcome::Rewritten(replaced)
    };
    (text, outcome)
}
