use foundation::extent::Extent;

use crate::region::RegionId;

/// Default scroll offset beyond which the nav bar condenses.
pub const DEFAULT_CONDENSE_AT: f64 = 50.0;

/// Derived navigation chrome state.
///
/// Purely cosmetic: recomputed from the final sample of each pass and
/// reported only on change. `active` highlighting probes slightly below the
/// nav bar so a section counts as current while its heading sits under the
/// chrome; when spans overlap, the later section in document order wins.
#[derive(Debug)]
pub struct NavModel {
    condense_at: f64,
    lookahead: f64,
    condensed: bool,
    active: Option<RegionId>,
}

impl NavModel {
    pub fn new(condense_at: f64, lookahead: f64) -> Self {
        Self {
            condense_at,
            lookahead,
            condensed: false,
            active: None,
        }
    }

    pub fn condensed(&self) -> bool {
        self.condensed
    }

    pub fn active(&self) -> Option<&RegionId> {
        self.active.as_ref()
    }

    /// Recomputes nav state; returns the new active section if it changed.
    pub fn update<'a>(
        &mut self,
        scroll_y: f64,
        sections: impl Iterator<Item = (&'a RegionId, Extent)>,
    ) -> Option<Option<RegionId>> {
        self.condensed = scroll_y > self.condense_at;

        let probe = scroll_y + self.lookahead;
        let mut current: Option<RegionId> = None;
        for (id, extent) in sections {
            if extent.contains_offset(probe) {
                current = Some(id.clone());
            }
        }

        if current != self.active {
            self.active = current.clone();
            Some(current)
        } else {
            None
        }
    }
}

impl Default for NavModel {
    fn default() -> Self {
        Self::new(DEFAULT_CONDENSE_AT, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::NavModel;
    use crate::region::RegionId;
    use foundation::extent::Extent;

    fn sections() -> Vec<(RegionId, Extent)> {
        vec![
            (RegionId::new("hero"), Extent::new(0.0, 800.0)),
            (RegionId::new("overview"), Extent::new(800.0, 800.0)),
            (RegionId::new("colonies"), Extent::new(1600.0, 800.0)),
        ]
    }

    #[test]
    fn reports_change_only_once() {
        let mut nav = NavModel::new(50.0, 100.0);
        let s = sections();

        let changed = nav.update(0.0, s.iter().map(|(id, e)| (id, *e)));
        assert_eq!(changed, Some(Some(RegionId::new("hero"))));

        // Same section: no change reported.
        assert_eq!(nav.update(200.0, s.iter().map(|(id, e)| (id, *e))), None);

        let changed = nav.update(900.0, s.iter().map(|(id, e)| (id, *e)));
        assert_eq!(changed, Some(Some(RegionId::new("overview"))));
    }

    #[test]
    fn condenses_past_the_threshold() {
        let mut nav = NavModel::new(50.0, 100.0);
        let s = sections();
        nav.update(0.0, s.iter().map(|(id, e)| (id, *e)));
        assert!(!nav.condensed());
        nav.update(51.0, s.iter().map(|(id, e)| (id, *e)));
        assert!(nav.condensed());
    }

    #[test]
    fn last_matching_section_wins() {
        let mut nav = NavModel::new(50.0, 0.0);
        let overlapping = vec![
            (RegionId::new("a"), Extent::new(0.0, 1000.0)),
            (RegionId::new("b"), Extent::new(500.0, 1000.0)),
        ];
        nav.update(600.0, overlapping.iter().map(|(id, e)| (id, *e)));
        assert_eq!(nav.active(), Some(&RegionId::new("b")));
    }

    #[test]
    fn no_section_past_the_end() {
        let mut nav = NavModel::new(50.0, 100.0);
        let s = sections();
        nav.update(900.0, s.iter().map(|(id, e)| (id, *e)));
        let changed = nav.update(10_000.0, s.iter().map(|(id, e)| (id, *e)));
        assert_eq!(changed, Some(None));
        assert_eq!(nav.active(), None);
    }
}
