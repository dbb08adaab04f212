use std::path::Path;

/// Whether `path` has one of the allowed suffixes (given with the leading dot, e.g. `.php`).
///
/// Only the last extension counts: `foo.php.json` is not a candidate, `foo.d.ts` is.
pub fn is_candidate(path: &Path, suffixes: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    suffixes
        .iter()
        .any(|s| s.strip_prefix('.').unwrap_or(s) == ext)
}
