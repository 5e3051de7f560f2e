//! Country search over the registry.
//!
//! The index is derived from the registry rather than kept as a
//! separate list, so a country added there is immediately searchable
//! with the same name and region.

use std::sync::LazyLock;

use crate::region::Region;
use crate::registry;

/// Maximum results returned per query.
pub const MAX_RESULTS: usize = 8;

/// Countries surfaced first, in this order, when they match. These are
/// the major esports hubs users search for most.
const PRIORITY: [&str; 10] = ["US", "CA", "DE", "FR", "GB", "KR", "JP", "CN", "BR", "AU"];

/// One searchable country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEntry {
    pub alpha2: &'static str,
    pub name: &'static str,
    pub region: Region,
}

fn priority_rank(alpha2: &str) -> usize {
    PRIORITY
        .iter()
        .position(|&code| code == alpha2)
        .unwrap_or(PRIORITY.len())
}

/// Index built once from the registry: every country with an esports
/// region except Antarctica, priority hubs first, the rest sorted by
/// name.
static INDEX: LazyLock<Vec<SearchEntry>> = LazyLock::new(|| {
    let mut entries: Vec<SearchEntry> = registry::entries()
        .iter()
        .filter_map(|entry| {
            let region = entry.region.filter(|&r| r != Region::Antarctica)?;
            Some(SearchEntry {
                alpha2: entry.alpha2,
                name: entry.name,
                region,
            })
        })
        .collect();
    entries.sort_by(|a, b| {
        priority_rank(a.alpha2)
            .cmp(&priority_rank(b.alpha2))
            .then_with(|| a.name.cmp(b.name))
    });
    entries
});

pub fn index() -> &'static [SearchEntry] {
    &INDEX
}

/// Case-insensitive substring search over names and alpha-2 codes.
/// Empty or whitespace-only queries return nothing.
pub fn query(input: &str) -> Vec<SearchEntry> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    INDEX
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&needle)
                || entry.alpha2.to_lowercase().contains(&needle)
        })
        .take(MAX_RESULTS)
        .copied()
        .collect()
}
