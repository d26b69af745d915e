//! Lenient version ordering for pinned requirement versions
//!
//! Pinned versions in a requirements file are not guaranteed to be valid
//! PEP 440 or semver strings, so comparison works on loosely tokenized
//! versions instead of rejecting anything unusual.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[A-Za-z]+").expect("component pattern is valid"));

/// A single version component
///
/// Variant order matters: alphabetic components sort below numeric ones,
/// so `1.0a1` < `1.0.1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Component {
    Alpha(String),
    Numeric(u64),
}

/// A version split into comparable components
///
/// Ordering is component-wise; a version that is a strict prefix of another
/// sorts lower (`1.0` < `1.0.0`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LooseVersion {
    components: Vec<Component>,
}

impl LooseVersion {
    /// Parse a version string leniently.
    ///
    /// Digit runs become numeric components, letter runs become alphabetic
    /// components, and every other character acts as a separator.
    /// Returns `None` when nothing comparable is found or a numeric
    /// component overflows.
    pub fn parse(version: &str) -> Option<Self> {
        let components = COMPONENT
            .find_iter(version)
            .map(|m| {
                let token = m.as_str();
                if token.as_bytes()[0].is_ascii_digit() {
                    token.parse().ok().map(Component::Numeric)
                } else {
                    Some(Component::Alpha(token.to_string()))
                }
            })
            .collect::<Option<Vec<_>>>()?;

        if components.is_empty() {
            return None;
        }

        Some(Self { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

/// Compare two version strings, `None` if either fails to parse
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    Some(LooseVersion::parse(a)?.cmp(&LooseVersion::parse(b)?))
}

/// Whether `current` sorts strictly below `latest`
///
/// Unparseable input is never outdated.
pub fn is_outdated(current: &str, latest: &str) -> bool {
    compare(current, latest) == Some(Ordering::Less)
}
