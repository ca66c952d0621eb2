use std::fmt;

/// Identity of a named scrollable content area ("overview", "colonies", ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one unit of delayed work tied to a region.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EffectId(String);

impl EffectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declarative description of one staged effect.
///
/// `delay_ms` is relative to the moment the batch is staged, not to the
/// previous effect. `repeat` exempts the effect from the one-shot gate;
/// `replay_upward` allows it to run on upward re-entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectSpec {
    pub id: EffectId,
    pub delay_ms: u64,
    pub repeat: bool,
    pub replay_upward: bool,
}

impl EffectSpec {
    pub fn new(id: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            id: EffectId::new(id),
            delay_ms,
            repeat: false,
            replay_upward: false,
        }
    }

    pub fn repeatable(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn replay_upward(mut self) -> Self {
        self.replay_upward = true;
        self
    }
}

/// Region membership state.
///
/// The full lifecycle is Outside -> Entering -> Active -> Exiting ->
/// Outside, but the observer only reports binary enter/exit, so the
/// intermediate states collapse within a single pass and are never
/// observable here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Outside,
    Active,
}

#[derive(Debug, Clone)]
pub struct Region {
    pub id: RegionId,
    pub effects: Vec<EffectSpec>,
    pub phase: Phase,
}

impl Region {
    pub fn new(id: impl Into<String>, effects: Vec<EffectSpec>) -> Self {
        Self {
            id: RegionId::new(id),
            effects,
            phase: Phase::Outside,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DuplicateRegion;

/// Registry of all regions, in registration (document) order.
///
/// Regions are registered once at startup and never removed; lookups are
/// linear because a story site has a handful of sections at most.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, region: Region) -> Result<(), DuplicateRegion> {
        if self.get(region.id.as_str()).is_some() {
            return Err(DuplicateRegion);
        }
        self.regions.push(region);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id.as_str() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{EffectSpec, Phase, Region, RegionRegistry};

    #[test]
    fn registry_preserves_document_order() {
        let mut reg = RegionRegistry::new();
        reg.register(Region::new("hero", vec![])).unwrap();
        reg.register(Region::new("overview", vec![])).unwrap();
        reg.register(Region::new("colonies", vec![])).unwrap();

        let ids: Vec<_> = reg.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "overview", "colonies"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut reg = RegionRegistry::new();
        reg.register(Region::new("hero", vec![])).unwrap();
        assert!(reg.register(Region::new("hero", vec![])).is_err());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn regions_start_outside() {
        let r = Region::new("overview", vec![EffectSpec::new("counters", 0)]);
        assert_eq!(r.phase, Phase::Outside);
        assert!(!r.is_active());
    }

    #[test]
    fn effect_spec_flags_default_off() {
        let e = EffectSpec::new("init-chart", 100);
        assert!(!e.repeat);
        assert!(!e.replay_upward);
        let e = e.repeatable().replay_upward();
        assert!(e.repeat);
        assert!(e.replay_upward);
    }
}
