use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use walkdir::WalkDir;

use crate::config::RewriteConfig;
use crate::detector::is_candidate;
use crate::models::RewriteOutcome;
use crate::transform::rewrite_headers;

/// Rewrite the header of every candidate file under `root`.
///
/// Every candidate is written back, changed or not. The first walk, read or write
/// error aborts the pass. Returns the number of candidate files visited.
///
/// Symlinked directories are not descended into, but a symlink to a regular file
/// counts as a file and its target is rewritten through the link. Broken links
/// are skipped.
pub fn rewrite_tree(root: &Path, config: &RewriteConfig) -> Result<usize> {
    let mut visited = 0;

    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.path().is_file() || !is_candidate(entry.path(), &config.suffixes) {
            continue;
        }

        let outcome = rewrite_file(entry.path(), config)?;
        if let RewriteOutcome::Rewritten(kinds) = &outcome {
            let kinds: Vec<String> = kinds.iter().map(ToString::to_string).collect();
            debug!("Rewrote {} ({})", entry.path().display(), kinds.join(", "));
        }
        visited += 1;
    }

    debug!("Visited {} files under {}", visited, root.display());
    Ok(visited)
}

/// Read `path`, replace its SPDX header and write the full result back.
pub fn rewrite_file(path: &Path, config: &RewriteConfig) -> Result<RewriteOutcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let (rewritten, outcome) = rewrite_headers(&content, &config.template);
    std::fs::write(path, rewritten).with_context(|| format!("writing {}", path.display()))?;
    Ok(outcome)
}
