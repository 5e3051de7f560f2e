//! Flag-image URL resolution with cascading fallback sources.
//!
//! Four providers are tried in rank order; each load failure advances
//! the rank. Terminal failure hides the image, except Antarctica,
//! which has no ISO-assigned flag and degrades to a snowflake glyph.

use std::time::Duration;

use tracing::debug;

use crate::region::{Region, SelectionSet};
use crate::resolver;

/// Flag providers in fallback order. The templates differ in casing
/// convention per provider: flagsapi.com wants the code uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FlagSource {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

impl FlagSource {
    pub const ALL: [FlagSource; 4] = [
        FlagSource::Primary,
        FlagSource::Secondary,
        FlagSource::Tertiary,
        FlagSource::Quaternary,
    ];

    pub fn template(self) -> &'static str {
        match self {
            FlagSource::Primary => "https://flagcdn.com/w40/{code}.png",
            FlagSource::Secondary => "https://flagpedia.net/data/flags/mini/{code}.png",
            FlagSource::Tertiary => "https://flagsapi.com/{CODE}/flat/32.png",
            FlagSource::Quaternary => "https://flagicons.lipis.dev/flags/4x3/{code}.svg",
        }
    }

    pub fn next(self) -> Option<FlagSource> {
        match self {
            FlagSource::Primary => Some(FlagSource::Secondary),
            FlagSource::Secondary => Some(FlagSource::Tertiary),
            FlagSource::Tertiary => Some(FlagSource::Quaternary),
            FlagSource::Quaternary => None,
        }
    }
}

/// Placeholder code when nothing resolves at all.
pub const UNKNOWN_CODE: &str = "unknown";

/// Glyph substituted for Antarctica after the cascade is exhausted.
pub const ANTARCTICA_GLYPH: &str = "\u{2744}";

/// Lowercase alpha-2 code suitable for the flag providers.
///
/// Special cases first, then the numeric id, then the name, then the
/// universal resolver; as a last resort the first two characters of an
/// unresolvable raw id, or the literal `"unknown"`.
pub fn code_for_flag(id: Option<&str>, name: &str) -> String {
    if let Some(alpha2) = resolver::special_case(id, name) {
        return alpha2.to_lowercase();
    }

    if let Some(id) = id.filter(|value| !value.is_empty() && *value != "undefined") {
        if let Some(alpha2) = resolver::numeric_to_alpha2(id) {
            return alpha2.to_lowercase();
        }
    }

    if !name.is_empty() {
        if let Some(alpha2) = resolver::code_from_name(name) {
            return alpha2.to_lowercase();
        }
    }

    let raw = id.filter(|value| !value.is_empty() && *value != "undefined");
    if let Some(alpha2) = resolver::resolve(raw.unwrap_or(name)) {
        return alpha2.to_lowercase();
    }

    if let Some(raw) = raw {
        let lower = raw.to_lowercase();
        let cut = lower
            .char_indices()
            .nth(2)
            .map_or(lower.len(), |(index, _)| index);
        return lower[..cut].to_string();
    }

    UNKNOWN_CODE.to_string()
}

/// Flag URL for one source rank.
pub fn flag_url(id: Option<&str>, name: &str, source: FlagSource) -> String {
    let code = code_for_flag(id, name);
    source
        .template()
        .replace("{code}", &code)
        .replace("{CODE}", &code.to_uppercase())
}

/// What an image element should render for a flag record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagDisplay {
    /// Load from the given source rank.
    Source(FlagSource),
    /// All sources exhausted; render nothing.
    Hidden,
    /// All sources exhausted for Antarctica; render a glyph.
    Placeholder(&'static str),
}

/// Per-image fallback state. Lives as long as the displaying element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRecord {
    code: String,
    name: String,
    display: FlagDisplay,
}

impl FlagRecord {
    pub fn new(id: Option<&str>, name: &str) -> Self {
        Self {
            code: code_for_flag(id, name),
            name: name.to_string(),
            display: FlagDisplay::Source(FlagSource::Primary),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display(&self) -> FlagDisplay {
        self.display
    }

    /// URL to load, or `None` once the cascade is exhausted.
    pub fn url(&self) -> Option<String> {
        match self.display {
            FlagDisplay::Source(source) => Some(
                source
                    .template()
                    .replace("{code}", &self.code)
                    .replace("{CODE}", &self.code.to_uppercase()),
            ),
            FlagDisplay::Hidden | FlagDisplay::Placeholder(_) => None,
        }
    }

    /// Advances to the next source on a load failure. After the last
    /// source the record reports hidden (or the Antarctica glyph) and
    /// further failures are no-ops.
    pub fn on_load_failure(&mut self) {
        match self.display {
            FlagDisplay::Source(source) => match source.next() {
                Some(next) => {
                    debug!(code = %self.code, ?next, "flag source failed, falling back");
                    self.display = FlagDisplay::Source(next);
                }
                None => {
                    self.display = if self.code == "aq" {
                        FlagDisplay::Placeholder(ANTARCTICA_GLYPH)
                    } else {
                        FlagDisplay::Hidden
                    };
                }
            },
            FlagDisplay::Hidden | FlagDisplay::Placeholder(_) => {}
        }
    }
}

/// One batch of flag codes to warm up after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadTier {
    pub delay: Duration,
    pub codes: Vec<&'static str>,
}

/// Staggered warm-up plan for frequently viewed esports countries.
/// The tiers spread requests out to avoid bandwidth spikes; execution
/// is best-effort and failures are ignored.
pub fn preload_plan() -> Vec<PreloadTier> {
    vec![
        PreloadTier {
            delay: Duration::from_secs(1),
            codes: vec!["us", "gb", "de", "fr", "br", "kr", "jp", "cn", "au", "ca"],
        },
        PreloadTier {
            delay: Duration::from_secs(3),
            codes: vec![
                "se", "dk", "no", "fi", "nl", "be", "ch", "at", "it", "es", "pl", "cz", "ua",
                "ru", "tr",
            ],
        },
        PreloadTier {
            delay: Duration::from_secs(6),
            codes: vec![
                "mx", "ar", "cl", "pe", "co", "in", "th", "vn", "ph", "id", "my", "sg", "za",
                "eg", "il",
            ],
        },
    ]
}

fn region_codes(region: Region) -> &'static [&'static str] {
    match region {
        Region::NorthAmerica => &["us", "ca", "mx"],
        Region::SouthAmerica => &["br", "ar", "cl", "pe", "co", "uy", "ve", "ec", "bo", "py"],
        Region::Europe => &[
            "de", "gb", "fr", "se", "dk", "no", "fi", "nl", "be", "ch", "at", "it", "es", "pl",
            "cz", "ua", "ru",
        ],
        Region::Asia => &[
            "kr", "jp", "cn", "in", "th", "vn", "ph", "id", "my", "sg", "kz", "uz", "mn",
        ],
        Region::Oceania => &["au", "nz", "fj", "pg", "sb", "vu", "to", "ws", "ki", "tv"],
        Region::Mena => &["tr", "za", "eg", "il", "ae", "sa", "qa", "kw", "bh", "om", "ye"],
        Region::AfricaNonMena => &["ng", "gh", "ke", "tz", "ug", "rw", "zm", "zw", "bw", "na"],
        Region::Antarctica => &["aq"],
        // Parent tags expand through their children below.
        Region::Americas | Region::AsiaPacific => &[],
    }
}

/// Warm-up batch for the currently selected regions, parents expanded
/// to their children. Short delay so it never blocks the selection
/// interaction itself.
pub fn region_preload_plan(selection: &SelectionSet) -> Option<PreloadTier> {
    if selection.is_empty() {
        return None;
    }

    let mut codes: Vec<&'static str> = Vec::new();
    for region in selection.iter() {
        if region.is_parent() {
            for &child in region.covers() {
                codes.extend_from_slice(region_codes(child));
            }
        } else {
            codes.extend_from_slice(region_codes(region));
        }
    }
    codes.sort_unstable();
    codes.dedup();

    Some(PreloadTier {
        delay: Duration::from_millis(500),
        codes,
    })
}
