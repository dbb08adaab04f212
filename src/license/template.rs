/// License boilerplate placed before the generated `@copyright` lines.
pub const HEADER_PREFIX: &str = r#"// This file is part of Moodle - http://moodle.org/
//
// Moodle is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Moodle is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Moodle.  If not, see <http://www.gnu.org/licenses/>.
// Project implemented by the "Recovery, Transformation and Resilience Plan.
// Funded by the European Union - Next GenerationEU".
//
// Produced by the UNIMOODLE University Group: Universities of
// Valladolid, Complutense de Madrid, UPV/EHU, León, Salamanca,
// Illes Balears, Valencia, Rey Juan Carlos, La Laguna, Zaragoza, Málaga,
// Córdoba, Extremadura, Vigo, Las Palmas de Gran Canaria y Burgos.

/**
 * Version details
 *
 * @package    local_mail
"#;

/// Closing docblock lines placed after the generated `@copyright` lines.
pub const HEADER_SUFFIX: &str = r#"
 * @author     UNIMOODLE Group (Coordinator) <direccion.area.estrategia.digital@uva.es>
 * @license    http://www.gnu.org/copyleft/gpl.html GNU GPL v3 or later
 */
"#;

/// Marker that starts every generated holder line.
pub const COPYRIGHT_TAG: &str = " * @copyright  ";

/// The replacement header: a prefix, one line per holder, and a suffix.
#[derive(Debug, Clone)]
pub struct HeaderTemplate {
    pub prefix: String,
    pub suffix: String,
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        HeaderTemplate {
            prefix: HEADER_PREFIX.to_string(),
            suffix: HEADER_SUFFIX.to_string(),
        }
    }
}

impl HeaderTemplate {
    /// Render the header for the given holders.
    ///
    /// Leading newlines of the prefix and surrounding newlines of the suffix are
    /// dropped, so the result ends on the closing ` */` with no trailing newline.
    pub fn render(&self, holders: &[String]) -> String {
        let mut out = self.prefix.trim_start_matches('\n').to_string();
        for holder in holders {
            out.push_str(COPYRIGHT_TAG);
            out.push_str(holder.trim());
            out.push('\n');
        }
        out.push_str(self.suffix.trim_matches('\n'));
        out
    }
}
