use std::sync::LazyLock;

use regex::Regex;

/// Contact address appended to the project's own SPDX lines; dropped from the holder.
pub const CONTACT_ADDRESS: &str = "<direccion.area.estrategia.digital@uva.es>";

static COPYRIGHT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"SPDX-FileCopyrightText:(.*?)(?:{})?\r?\n",
        regex::escape(CONTACT_ADDRESS)
    ))
    .expect("copyright line pattern is valid")
});

/// Extract the copyright holders from a matched header span, in order of appearance.
///
/// Each holder is the text after `SPDX-FileCopyrightText:` up to the end of its line,
/// minus a trailing [`CONTACT_ADDRESS`], trimmed of surrounding whitespace. Lines may end
/// in `\n` or `\r\n`; a tag whose line is not terminated within the span is not counted.
pub fn extract(span: &str) -> Vec<String> {
    COPYRIGHT_LINE_RE
        .captures_iter(span)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}
