//! Highlight matching between a search target and rendered map shapes.
//!
//! The geometry source and the search index use different,
//! non-normalized name strings for the same entities, so equality is
//! layered: numeric-code equivalence, exact name equality, a curated
//! abbreviation table, and a Kosovo fallback for the one shape that
//! ships without a numeric id.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::resolver;

/// The most recent search result, compared against every rendered
/// shape during interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTarget {
    /// Alpha-2 code from the search index.
    pub code: String,
    /// Display name from the search index.
    pub name: String,
}

impl HighlightTarget {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Canonical lowercase name -> abbreviated/alternate forms as the
/// geometry source ships them. Matching is symmetric: either side of a
/// pair may be the abbreviation.
static ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("solomon islands", &["solomon is.", "solomon is"]),
    (
        "central african republic",
        &["central african rep.", "central african rep", "car"],
    ),
    (
        "democratic republic of congo",
        &["dem. rep. congo", "dem rep congo", "drc", "dr congo"],
    ),
    (
        "democratic republic of the congo",
        &["dem. rep. congo", "dem rep congo", "drc", "dr congo"],
    ),
    ("dominican republic", &["dominican rep.", "dominican rep"]),
    ("equatorial guinea", &["eq. guinea", "eq guinea"]),
    ("falkland islands", &["falkland is.", "falkland is"]),
    (
        "french southern and antarctic lands",
        &["fr. s. antarctic lands", "french southern territories"],
    ),
    ("south sudan", &["s. sudan", "s sudan"]),
    (
        "bosnia and herzegovina",
        &["bosnia and herz.", "bosnia and herz", "bosnia"],
    ),
    ("western sahara", &["w. sahara", "w sahara"]),
    ("north cyprus", &["n. cyprus", "n cyprus", "northern cyprus"]),
    ("northern cyprus", &["n. cyprus", "n cyprus"]),
    ("united states of america", &["united states", "usa", "us"]),
    ("united kingdom", &["uk", "great britain", "britain"]),
    ("south korea", &["korea", "republic of korea"]),
    (
        "north korea",
        &["korea", "democratic people's republic of korea", "dprk"],
    ),
];

fn expansions_of(full: &str) -> &'static [&'static str] {
    ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == full)
        .map(|(_, abbrevs)| *abbrevs)
        .unwrap_or(&[])
}

/// Symmetric abbreviation check over lowercased, trimmed names.
fn abbreviation_match(a: &str, b: &str) -> bool {
    expansions_of(a).contains(&b) || expansions_of(b).contains(&a)
}

/// Decides whether a rendered shape corresponds to the search target.
///
/// First success wins: numeric-code equivalence, exact
/// case-insensitive name equality, symmetric abbreviation lookup, then
/// the Kosovo fallback (the map source has no numeric id for it).
pub fn is_match(
    target: &HighlightTarget,
    candidate_id: Option<&str>,
    candidate_name: &str,
) -> bool {
    if let Some(expected) = resolver::alpha2_to_numeric(&target.code) {
        if candidate_id == Some(expected) {
            return true;
        }
    }

    let target_name = target.name.to_lowercase().trim().to_string();
    let candidate_name = candidate_name.to_lowercase().trim().to_string();

    if !target_name.is_empty() && target_name == candidate_name {
        return true;
    }

    if abbreviation_match(&target_name, &candidate_name) {
        return true;
    }

    if (target_name == "kosovo" || target.code.eq_ignore_ascii_case("XK"))
        && candidate_name == "kosovo"
        && candidate_id.is_none()
    {
        return true;
    }

    // Any Kosovo-flavored target matches any Kosovo-flavored shape;
    // the geometry source has shipped several variants over time.
    target_name.contains("kosovo") && candidate_name.contains("kosovo")
}

/// How long a fresh target is shielded from hover events over other
/// countries.
pub const PROTECTION_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active target.
    Idle,
    /// Within the protection window; other-country hovers are ignored.
    Protected,
    /// Window elapsed; the target persists until a genuinely different
    /// country is hovered.
    Persistent,
}

/// What the caller should do with a hover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverOutcome {
    /// No target active; handle the hover normally.
    Pass,
    /// The hover is over the target itself; keep everything as is.
    Retained,
    /// Protected target; the hover must not override or clear it.
    Suppressed,
    /// Persistent target cleared by hovering a different country.
    Cleared,
}

/// Time-boxed highlight state owned by the UI controller.
///
/// The clock is injected so the transitions stay synchronous and
/// testable; the UI drives re-evaluation from its own timers and must
/// clear those timers on teardown.
#[derive(Debug, Default)]
pub struct HighlightState {
    active: Option<(HighlightTarget, Instant)>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&HighlightTarget> {
        self.active.as_ref().map(|(target, _)| target)
    }

    pub fn phase(&self, now: Instant) -> Phase {
        match &self.active {
            None => Phase::Idle,
            Some((_, set_at)) if now.duration_since(*set_at) < PROTECTION_WINDOW => {
                Phase::Protected
            }
            Some(_) => Phase::Persistent,
        }
    }

    /// Installs a new target, entering the protection window.
    pub fn set(&mut self, target: HighlightTarget, now: Instant) {
        debug!(code = %target.code, name = %target.name, "highlight target set");
        self.active = Some((target, now));
    }

    /// Explicit dismiss.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Feeds a hover event over a country shape into the state machine.
    pub fn on_hover(
        &mut self,
        candidate_id: Option<&str>,
        candidate_name: &str,
        now: Instant,
    ) -> HoverOutcome {
        let phase = self.phase(now);
        let Some(target) = self.target() else {
            return HoverOutcome::Pass;
        };

        if is_match(target, candidate_id, candidate_name) {
            return HoverOutcome::Retained;
        }

        match phase {
            Phase::Protected => HoverOutcome::Suppressed,
            Phase::Persistent => {
                debug!(candidate = %candidate_name, "persistent highlight cleared by hover");
                self.active = None;
                HoverOutcome::Cleared
            }
            Phase::Idle => HoverOutcome::Pass,
        }
    }

    /// Hovering off the map clears a persistent target; a protected one
    /// stays.
    pub fn on_hover_off(&mut self, now: Instant) -> HoverOutcome {
        match self.phase(now) {
            Phase::Persistent => {
                self.active = None;
                HoverOutcome::Cleared
            }
            Phase::Protected => HoverOutcome::Suppressed,
            Phase::Idle => HoverOutcome::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(code: &str, name: &str) -> HighlightTarget {
        HighlightTarget::new(code, name)
    }

    #[test]
    fn matches_by_numeric_equivalence() {
        assert!(is_match(&target("US", "United States"), Some("840"), "United States of America"));
        assert!(!is_match(&target("US", "United States"), Some("124"), "Canada"));
    }

    #[test]
    fn matches_by_exact_name_case_insensitive() {
        assert!(is_match(&target("DE", "Germany"), None, "GERMANY"));
        assert!(is_match(&target("DE", "Germany"), Some("276"), " germany "));
    }

    #[test]
    fn abbreviation_match_is_symmetric() {
        let full = target("CD", "Democratic Republic of Congo");
        assert!(is_match(&full, None, "Dem. Rep. Congo"));
        let abbreviated = target("CD", "Dem. Rep. Congo");
        assert!(is_match(&abbreviated, None, "Democratic Republic of Congo"));
    }

    #[test]
    fn kosovo_matches_despite_missing_id() {
        assert!(is_match(&target("XK", "Kosovo"), None, "Kosovo"));
        assert!(is_match(&target("XK", "Republic of Kosovo"), None, "Kosovo"));
        assert!(!is_match(&target("XK", "Kosovo"), Some("688"), "Serbia"));
    }

    #[test]
    fn unrelated_shapes_do_not_match() {
        assert!(!is_match(&target("FR", "France"), Some("276"), "Germany"));
        assert!(!is_match(&target("GN", "Guinea"), Some("598"), "Papua New Guinea"));
    }

    #[test]
    fn protected_window_suppresses_other_hovers() {
        let t0 = Instant::now();
        let mut state = HighlightState::new();
        state.set(target("DE", "Germany"), t0);

        assert_eq!(state.phase(t0), Phase::Protected);
        assert_eq!(state.on_hover(Some("250"), "France", t0), HoverOutcome::Suppressed);
        assert!(state.target().is_some());
        assert_eq!(state.on_hover(Some("276"), "Germany", t0), HoverOutcome::Retained);
    }

    #[test]
    fn persistent_target_cleared_by_different_country() {
        let t0 = Instant::now();
        let mut state = HighlightState::new();
        state.set(target("DE", "Germany"), t0);

        let later = t0 + PROTECTION_WINDOW;
        assert_eq!(state.phase(later), Phase::Persistent);
        assert_eq!(state.on_hover(Some("276"), "Germany", later), HoverOutcome::Retained);
        assert_eq!(state.on_hover(Some("250"), "France", later), HoverOutcome::Cleared);
        assert_eq!(state.phase(later), Phase::Idle);
        assert_eq!(state.on_hover(Some("250"), "France", later), HoverOutcome::Pass);
    }

    #[test]
    fn hover_off_clears_only_persistent() {
        let t0 = Instant::now();
        let mut state = HighlightState::new();
        state.set(target("JP", "Japan"), t0);

        assert_eq!(state.on_hover_off(t0), HoverOutcome::Suppressed);
        assert!(state.target().is_some());

        let later = t0 + PROTECTION_WINDOW;
        assert_eq!(state.on_hover_off(later), HoverOutcome::Cleared);
        assert!(state.target().is_none());
    }

    #[test]
    fn explicit_clear_dismisses() {
        let t0 = Instant::now();
        let mut state = HighlightState::new();
        state.set(target("BR", "Brazil"), t0);
        state.clear();
        assert_eq!(state.phase(t0), Phase::Idle);
    }
}
