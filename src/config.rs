use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::license::template::HeaderTemplate;

/// File suffixes whose headers are rewritten.
pub const DEFAULT_SUFFIXES: &[&str] = &[".php", ".ts", ".svelte"];

/// Everything a rewrite pass needs besides the root directory.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Allowed suffixes, with the leading dot.
    pub suffixes: Vec<String>,
    /// Header that replaces each matched SPDX block.
    pub template: HeaderTemplate,
}

impl Default for RewriteConfig {
    /// The UNIMOODLE header applied to PHP, TypeScript and Svelte sources.
    fn default() -> Self {
        RewriteConfig {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            template: HeaderTemplate::default(),
        }
    }
}

/// The directory the executable lives in; the whole tree below it is rewritten.
pub fn scan_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(dir.to_path_buf())
}
