//! Esports region hierarchy and selection filters.
//!
//! Two-level hierarchy: three parent regions (Americas, Europe,
//! Asia-Pacific) covering seven sub-regions. Europe doubles as its own
//! sub-region tag. Antarctica has no parent and is only visible when
//! selected directly.

use std::collections::BTreeSet;

use crate::registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Americas,
    Europe,
    AsiaPacific,
    NorthAmerica,
    SouthAmerica,
    Mena,
    Oceania,
    Asia,
    AfricaNonMena,
    Antarctica,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::Americas,
        Region::Europe,
        Region::AsiaPacific,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Mena,
        Region::Oceania,
        Region::Asia,
        Region::AfricaNonMena,
        Region::Antarctica,
    ];

    /// Display label, matching the labels used by the control panel.
    pub fn label(self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia-Pacific",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Mena => "MENA",
            Region::Oceania => "Oceania",
            Region::Asia => "Asia",
            Region::AfricaNonMena => "Africa (non-MENA)",
            Region::Antarctica => "Antarctica",
        }
    }

    pub fn is_parent(self) -> bool {
        matches!(self, Region::Americas | Region::Europe | Region::AsiaPacific)
    }

    /// Parent tag that covers this sub-region for visibility purposes.
    /// Antarctica has none. Europe is covered by itself.
    pub fn parent(self) -> Option<Region> {
        match self {
            Region::NorthAmerica | Region::SouthAmerica => Some(Region::Americas),
            Region::Europe | Region::Mena => Some(Region::Europe),
            Region::Asia | Region::Oceania | Region::AfricaNonMena => Some(Region::AsiaPacific),
            _ => None,
        }
    }

    /// Sub-regions a selected parent makes visible.
    pub fn covers(self) -> &'static [Region] {
        match self {
            Region::Americas => &[Region::NorthAmerica, Region::SouthAmerica],
            Region::Europe => &[Region::Europe, Region::Mena],
            Region::AsiaPacific => &[Region::Asia, Region::Oceania, Region::AfricaNonMena],
            _ => &[],
        }
    }

    /// Children removed when this parent is toggled off. Differs from
    /// [`Region::covers`] only for Europe, which never cascades itself.
    fn cascade_children(self) -> &'static [Region] {
        match self {
            Region::Americas => &[Region::NorthAmerica, Region::SouthAmerica],
            Region::Europe => &[Region::Mena],
            Region::AsiaPacific => &[Region::Asia, Region::Oceania, Region::AfricaNonMena],
            _ => &[],
        }
    }
}

/// Region assigned to a country, or `None` when the country has no
/// esports region. Unassigned is a displayable state, not an error.
pub fn region_of(alpha2: &str) -> Option<Region> {
    registry::by_alpha2(&alpha2.to_ascii_uppercase()).and_then(|entry| entry.region)
}

/// The user's active region filters.
///
/// Selecting a parent does not insert its children; visibility is
/// computed by transparent expansion in [`SelectionSet::is_visible`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<Region>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, region: Region) -> bool {
        self.selected.contains(&region)
    }

    pub fn iter(&self) -> impl Iterator<Item = Region> + '_ {
        self.selected.iter().copied()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Toggle a filter on or off.
    ///
    /// Toggling a parent off also removes its children. When a toggle
    /// drops the last selected parent, Antarctica is removed as well:
    /// it was only reachable as an auxiliary filter alongside a real
    /// region.
    pub fn toggle(&mut self, region: Region) {
        if self.selected.remove(&region) {
            let parents_before = self.parent_count() + usize::from(region.is_parent());
            for &child in region.cascade_children() {
                self.selected.remove(&child);
            }
            if parents_before == 1 && self.parent_count() == 0 {
                self.selected.remove(&Region::Antarctica);
            }
        } else {
            self.selected.insert(region);
        }
    }

    fn parent_count(&self) -> usize {
        self.selected.iter().filter(|r| r.is_parent()).count()
    }

    /// Whether a country with the given region passes the active
    /// filters. An empty selection shows nothing as selected.
    pub fn is_visible(&self, country_region: Option<Region>) -> bool {
        let Some(region) = country_region else {
            return false;
        };
        if self.selected.is_empty() {
            return false;
        }
        if self.selected.contains(&region) {
            return true;
        }
        self.selected
            .iter()
            .any(|selected| selected.covers().contains(&region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_of_known_countries() {
        assert_eq!(region_of("US"), Some(Region::NorthAmerica));
        assert_eq!(region_of("us"), Some(Region::NorthAmerica));
        assert_eq!(region_of("BR"), Some(Region::SouthAmerica));
        assert_eq!(region_of("DE"), Some(Region::Europe));
        assert_eq!(region_of("SA"), Some(Region::Mena));
        assert_eq!(region_of("KR"), Some(Region::Asia));
        assert_eq!(region_of("AU"), Some(Region::Oceania));
        assert_eq!(region_of("ZA"), Some(Region::AfricaNonMena));
        assert_eq!(region_of("AQ"), Some(Region::Antarctica));
        assert_eq!(region_of("XK"), Some(Region::Europe));
    }

    #[test]
    fn region_of_unassigned_and_unknown() {
        // Greenland is registered but carries no esports region.
        assert_eq!(region_of("GL"), None);
        assert_eq!(region_of("ZZ"), None);
        assert_eq!(region_of(""), None);
    }

    #[test]
    fn parent_covers_children() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Americas);
        assert!(set.is_visible(Some(Region::NorthAmerica)));
        assert!(set.is_visible(Some(Region::SouthAmerica)));
        assert!(!set.is_visible(Some(Region::Europe)));
        assert!(!set.is_visible(Some(Region::Antarctica)));
    }

    #[test]
    fn europe_covers_itself_and_mena() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Europe);
        assert!(set.is_visible(Some(Region::Europe)));
        assert!(set.is_visible(Some(Region::Mena)));
        assert!(!set.is_visible(Some(Region::Asia)));
    }

    #[test]
    fn empty_selection_shows_nothing() {
        let set = SelectionSet::new();
        assert!(!set.is_visible(Some(Region::Europe)));
        assert!(!set.is_visible(None));
    }

    #[test]
    fn antarctica_requires_direct_selection() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Americas);
        set.toggle(Region::Europe);
        set.toggle(Region::AsiaPacific);
        assert!(!set.is_visible(Some(Region::Antarctica)));
        set.toggle(Region::Antarctica);
        assert!(set.is_visible(Some(Region::Antarctica)));
    }

    #[test]
    fn deselecting_parent_cascades_children() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Americas);
        set.toggle(Region::NorthAmerica);
        set.toggle(Region::Americas);
        assert!(set.is_empty());
    }

    #[test]
    fn deselecting_europe_cascades_mena_only() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Europe);
        set.toggle(Region::Mena);
        set.toggle(Region::AsiaPacific);
        set.toggle(Region::Europe);
        assert!(!set.contains(Region::Mena));
        assert!(set.contains(Region::AsiaPacific));
    }

    #[test]
    fn child_toggle_never_touches_parent() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Americas);
        set.toggle(Region::NorthAmerica);
        set.toggle(Region::NorthAmerica);
        assert!(set.contains(Region::Americas));
    }

    #[test]
    fn antarctica_dropped_with_last_parent() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Europe);
        set.toggle(Region::Antarctica);
        set.toggle(Region::Europe);
        assert!(set.is_empty());
    }

    #[test]
    fn antarctica_kept_while_a_parent_remains() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Europe);
        set.toggle(Region::Americas);
        set.toggle(Region::Antarctica);
        set.toggle(Region::Europe);
        assert!(set.contains(Region::Antarctica));
        assert!(set.contains(Region::Americas));
    }

    #[test]
    fn toggle_is_idempotent_reselect() {
        let mut set = SelectionSet::new();
        set.toggle(Region::Asia);
        set.toggle(Region::Asia);
        assert!(!set.contains(Region::Asia));
        set.toggle(Region::Asia);
        assert!(set.contains(Region::Asia));
        assert_eq!(set.iter().count(), 1);
    }
}
