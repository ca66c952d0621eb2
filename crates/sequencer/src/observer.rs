use foundation::extent::{Extent, Viewport};
use runtime::coalescer::{Direction, ScrollSample};

use crate::region::RegionId;

/// Default visible fraction required before a region counts as in view.
pub const DEFAULT_THRESHOLD: f64 = 0.12;

/// One discrete membership transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Enter {
        region: RegionId,
        direction: Direction,
    },
    Exit {
        region: RegionId,
    },
}

#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub transitions: Vec<Transition>,
    /// Regions under observation whose anchor has never been measured (or
    /// was cleared). Each region is reported at most once until an anchor
    /// is set again.
    pub missing_anchors: Vec<RegionId>,
}

#[derive(Debug)]
struct Tracked {
    id: RegionId,
    anchor: Option<Extent>,
    in_view: bool,
    warned_missing: bool,
}

/// Converts coalesced scroll samples into discrete enter/exit transitions.
///
/// Ordering contract:
/// - Samples are folded in arrival order, so per region `Enter` and `Exit`
///   strictly alternate starting with `Enter`, even when an entire
///   enter+exit pair happens inside a single coalesced batch.
/// - Within one sample, regions are evaluated in observation order.
///
/// Regions without an anchor are skipped silently; the host is responsible
/// for measuring anchors and re-measuring them on resize.
#[derive(Debug)]
pub struct ViewportObserver {
    threshold: f64,
    tracked: Vec<Tracked>,
}

impl ViewportObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            tracked: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Registers a region for monitoring. Idempotent.
    pub fn observe(&mut self, region: RegionId) {
        if self.tracked.iter().any(|t| t.id == region) {
            return;
        }
        self.tracked.push(Tracked {
            id: region,
            anchor: None,
            in_view: false,
            warned_missing: false,
        });
    }

    /// Records the measured extent for a region's anchor.
    ///
    /// Returns `false` if the region is not under observation.
    pub fn set_anchor(&mut self, region: &str, extent: Extent) -> bool {
        match self.tracked.iter_mut().find(|t| t.id.as_str() == region) {
            Some(t) => {
                t.anchor = Some(extent);
                t.warned_missing = false;
                true
            }
            None => false,
        }
    }

    /// Drops a region's anchor (its page element went away). The region
    /// silently stops producing transitions; this is not an error.
    pub fn clear_anchor(&mut self, region: &str) -> bool {
        match self.tracked.iter_mut().find(|t| t.id.as_str() == region) {
            Some(t) => {
                t.anchor = None;
                t.in_view = false;
                true
            }
            None => false,
        }
    }

    pub fn anchor(&self, region: &str) -> Option<Extent> {
        self.tracked
            .iter()
            .find(|t| t.id.as_str() == region)
            .and_then(|t| t.anchor)
    }

    /// Anchored regions in observation order, for nav derivation.
    pub fn anchors(&self) -> impl Iterator<Item = (&RegionId, Extent)> {
        self.tracked
            .iter()
            .filter_map(|t| t.anchor.map(|a| (&t.id, a)))
    }

    pub fn is_in_view(&self, region: &str) -> bool {
        self.tracked
            .iter()
            .find(|t| t.id.as_str() == region)
            .is_some_and(|t| t.in_view)
    }

    /// Runs one recomputation pass over a batch of coalesced samples.
    pub fn sweep(&mut self, viewport: Viewport, samples: &[ScrollSample]) -> SweepOutcome {
        let mut out = SweepOutcome::default();

        for t in &mut self.tracked {
            if t.anchor.is_none() && !t.warned_missing {
                t.warned_missing = true;
                out.missing_anchors.push(t.id.clone());
            }
        }

        for sample in samples {
            let vp = viewport.at_scroll(sample.offset);
            for t in &mut self.tracked {
                let Some(anchor) = t.anchor else {
                    continue;
                };
                let in_view = vp.visible_fraction(&anchor) >= self.threshold;
                if in_view == t.in_view {
                    continue;
                }
                t.in_view = in_view;
                out.transitions.push(if in_view {
                    Transition::Enter {
                        region: t.id.clone(),
                        direction: sample.direction,
                    }
                } else {
                    Transition::Exit {
                        region: t.id.clone(),
                    }
                });
            }
        }

        out
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
