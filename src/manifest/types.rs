//! Manifest type and line format

use indexmap::IndexMap;
use tracing::debug;

/// Package name to pinned version, in file order
pub type Manifest = IndexMap<String, String>;

const PIN_SEPARATOR: &str = "==";

/// Parse manifest content
///
/// Blank lines, `#` comments (indented or not) and lines that are not `name==version` are
/// skipped. When a package appears twice the last line wins.
pub fn parse(content: &str) -> Manifest {
    let mut manifest = Manifest::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let Some((name, version)) = parse_line(line) else {
            debug!("Skipping line {}: {:?}", index + 1, line);
            continue;
        };

        manifest.insert(name.to_string(), version.to_string());
    }

    manifest
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (name, version) = line.split_once(PIN_SEPARATOR)?;
    let (name, version) = (name.trim(), version.trim());
    if name.is_empty() || version.is_empty() {
        return None;
    }
    Some((name, version))
}

/// Render a manifest as `name==version` lines in iteration order
pub fn render(manifest: &Manifest) -> String {
    manifest
        .iter()
        .map(|(name, version)| format!("{name}{PIN_SEPARATOR}{version}\n"))
        .collect()
}

/// Sort entries by lowercase package name
///
/// The sort is stable, so names equal ignoring case keep their relative order.
pub fn sort_by_name_case_insensitive(manifest: &Manifest) -> Manifest {
    let mut sorted = manifest.clone();
    sorted.sort_by_cached_key(|name, _| name.to_lowercase());
    sorted
}
