use std::collections::BTreeSet;

use crate::region::{EffectId, RegionId};

/// Monotonic idempotence ledger for one-shot effects.
///
/// Membership only grows: once a `(region, effect)` pair is recorded there
/// is no unfire/reset for the rest of the session. This is the single
/// authority on "has been attempted" — it replaces per-chart init flags.
#[derive(Debug, Default)]
pub struct OneShotGate {
    fired: BTreeSet<(RegionId, EffectId)>,
}

impl OneShotGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pair and returns `true` exactly on the first call for
    /// it; every later call returns `false`. Redundant calls are the
    /// designed-for case, not an error.
    pub fn try_fire(&mut self, region: &RegionId, effect: &EffectId) -> bool {
        self.fired.insert((region.clone(), effect.clone()))
    }

    pub fn has_fired(&self, region: &RegionId, effect: &EffectId) -> bool {
        self.fired.contains(&(region.clone(), effect.clone()))
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}
