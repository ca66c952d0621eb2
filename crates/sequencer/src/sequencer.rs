use std::collections::BTreeMap;

use foundation::extent::{Extent, Viewport};
use runtime::coalescer::{Direction, ScrollCoalescer, ScrollSample};
use runtime::debounce::Debounce;
use runtime::event_bus::Event;
use runtime::frame::Frame;
use runtime::metrics::Metrics;
use runtime::timer::TimerQueue;

use crate::config::{ConfigError, RegionConfig, SequencerConfig};
use crate::events::{EffectError, SequencerBus, SequencerEvent, SkipReason};
use crate::gate::OneShotGate;
use crate::handlers::{ResizeHandler, ResizeHandlers};
use crate::nav::NavModel;
use crate::observer::{Transition, ViewportObserver};
use crate::region::{EffectId, Phase, RegionId, RegionRegistry};
use crate::stager::{self, StageDecision};

/// Context handed to collaborator actions.
///
/// This is the explicit replacement for the ambient globals rendering
/// modules used to share: collaborators get what they need passed in and
/// own nothing of the sequencer's state.
pub struct EffectContext<'a> {
    pub frame: Frame,
    pub region: &'a RegionId,
    pub effect: &'a EffectId,
    pub metrics: &'a mut Metrics,
}

pub type EffectAction = Box<dyn FnMut(&mut EffectContext<'_>) -> Result<(), EffectError>>;

/// A gate-approved effect waiting on the timer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StagedEffect {
    region: RegionId,
    effect: EffectId,
}

/// Top-level coordinator: owns the region registry, gate, observer, timer
/// queue, action registry, resize handler list, event bus, and metrics for
/// the whole session.
///
/// Host protocol:
/// - `scroll(offset)` at whatever rate the platform delivers input;
/// - `resize(viewport)` on window changes (debounced internally);
/// - `set_anchor`/`clear_anchor` whenever the host re-measures the page;
/// - `advance(frame)` exactly once per display frame.
///
/// All effect execution happens inside `advance`, so state mutation is
/// single-threaded and synchronous by construction.
pub struct SectionSequencer {
    viewport: Viewport,
    regions: RegionRegistry,
    observer: ViewportObserver,
    gate: OneShotGate,
    nav: NavModel,
    coalescer: ScrollCoalescer,
    timers: TimerQueue<StagedEffect>,
    actions: BTreeMap<EffectId, EffectAction>,
    resize_handlers: ResizeHandlers,
    resize_debounce: Debounce,
    resize_dirty: bool,
    pending_viewport: Option<Viewport>,
    bus: SequencerBus,
    metrics: Metrics,
}

impl SectionSequencer {
    pub fn new(config: &SequencerConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;

        let viewport = Viewport {
            top_inset: config.top_inset,
            ..viewport
        };

        let mut seq = Self {
            viewport,
            regions: RegionRegistry::new(),
            observer: ViewportObserver::new(config.threshold),
            gate: OneShotGate::new(),
            nav: NavModel::new(config.nav_condense_at, config.top_inset + 50.0),
            coalescer: ScrollCoalescer::new(),
            timers: TimerQueue::new(),
            actions: BTreeMap::new(),
            resize_handlers: ResizeHandlers::new(),
            resize_debounce: Debounce::new(config.resize_debounce_ms),
            resize_dirty: false,
            pending_viewport: None,
            bus: SequencerBus::new(),
            metrics: Metrics::new(),
        };
        for region_config in &config.regions {
            seq.register_region(region_config)?;
        }
        Ok(seq)
    }

    /// Startup-only region registration; regions are never removed during a
    /// session.
    pub fn register_region(&mut self, config: &RegionConfig) -> Result<(), ConfigError> {
        let region = config.to_region();
        if self.regions.get(region.id.as_str()).is_some() {
            return Err(ConfigError::DuplicateRegion(config.id.clone()));
        }
        self.observer.observe(region.id.clone());
        let _ = self.regions.register(region);
        Ok(())
    }

    /// Binds a collaborator action to an effect id. Rebinding replaces the
    /// previous action.
    pub fn register_action(&mut self, effect: impl Into<String>, action: EffectAction) {
        self.actions.insert(EffectId::new(effect), action);
    }

    pub fn register_resize_handler(&mut self, name: impl Into<String>, handler: ResizeHandler) {
        self.resize_handlers.register(name, handler);
    }

    /// Records a measured anchor. Returns `false` for unknown regions.
    pub fn set_anchor(&mut self, region: &str, extent: Extent) -> bool {
        self.observer.set_anchor(region, extent)
    }

    pub fn clear_anchor(&mut self, region: &str) -> bool {
        self.observer.clear_anchor(region)
    }

    /// Raw scroll input; cheap enough to call per platform event.
    pub fn scroll(&mut self, offset: f64) {
        self.coalescer.push(offset);
    }

    /// Window geometry changed. Applied after the debounce quiet period.
    pub fn resize(&mut self, viewport: Viewport) {
        self.pending_viewport = Some(viewport);
        self.resize_dirty = true;
    }

    /// The once-per-frame tick: applies debounced resizes, runs at most one
    /// recomputation pass over coalesced scroll input, then fires due
    /// effects.
    pub fn advance(&mut self, frame: Frame) {
        if self.resize_dirty {
            self.resize_debounce.signal(frame.time);
            self.resize_dirty = false;
        }
        if self.resize_debounce.fire_if_ready(frame.time) {
            if let Some(vp) = self.pending_viewport.take() {
                self.viewport = Viewport {
                    top_inset: self.viewport.top_inset,
                    ..vp
                };
            }
            self.metrics.inc_counter("resize.fired", 1);
            self.resize_handlers.dispatch(self.viewport);
            // Membership must reflect the new geometry even without scroll
            // input; a synthetic stationary sample resweeps in place.
            // Regions revealed by the resize count as downward entries so
            // their one-shot effects still run.
            let resweep = ScrollSample {
                offset: self.coalescer.offset(),
                direction: Direction::Down,
            };
            self.run_pass(frame, &[resweep]);
        }

        let samples = self.coalescer.take();
        if !samples.is_empty() {
            self.metrics.inc_counter("scroll.samples", samples.len() as u64);
            self.metrics.inc_counter("scroll.passes", 1);
            self.run_pass(frame, &samples);
        }

        self.fire_due(frame);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn nav(&self) -> &NavModel {
        &self.nav
    }

    pub fn is_active(&self, region: &str) -> bool {
        self.regions.get(region).is_some_and(|r| r.is_active())
    }

    /// Effects staged but not yet due.
    pub fn pending_effects(&self) -> usize {
        self.timers.len()
    }

    pub fn events(&self) -> &[Event<SequencerEvent>] {
        self.bus.events()
    }

    pub fn drain_events(&mut self) -> Vec<Event<SequencerEvent>> {
        self.bus.drain()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn run_pass(&mut self, frame: Frame, samples: &[ScrollSample]) {
        let outcome = self.observer.sweep(self.viewport, samples);

        for region in outcome.missing_anchors {
            self.bus.emit(frame, SequencerEvent::AnchorMissing { region });
        }

        for transition in outcome.transitions {
            match transition {
                Transition::Enter { region, direction } => self.on_enter(frame, region, direction),
                Transition::Exit { region } => self.on_exit(frame, region),
            }
        }

        // Nav derives from where the pass ended up, not from mid-batch
        // positions.
        if let Some(sample) = samples.last() {
            if let Some(active) = self.nav.update(sample.offset, self.observer.anchors()) {
                self.bus.emit(frame, SequencerEvent::NavChanged { active });
            }
        }
    }

    fn on_enter(&mut self, frame: Frame, region_id: RegionId, direction: Direction) {
        self.metrics.inc_counter("region.enters", 1);
        self.bus.emit(
            frame,
            SequencerEvent::RegionEntered {
                region: region_id.clone(),
                direction,
            },
        );

        let Some(region) = self.regions.get_mut(region_id.as_str()) else {
            return;
        };
        region.phase = Phase::Active;
        let effects = region.effects.clone();

        // The direction filter runs before the gate: an upward entry must
        // leave the gate untouched so a later downward entry can still fire
        // a never-fired effect. The gate records only effects that are
        // actually scheduled.
        for decision in stager::stage(frame.time, direction, &effects) {
            match decision {
                StageDecision::Schedule { effect, due } => {
                    let repeat = effects
                        .iter()
                        .find(|s| s.id == effect)
                        .is_some_and(|s| s.repeat);
                    if !repeat && !self.gate.try_fire(&region_id, &effect) {
                        self.metrics.inc_counter("effect.skipped", 1);
                        self.bus.emit(
                            frame,
                            SequencerEvent::EffectSkipped {
                                region: region_id.clone(),
                                effect,
                                reason: SkipReason::AlreadyFired,
                            },
                        );
                        continue;
                    }
                    self.timers.schedule(
                        due,
                        StagedEffect {
                            region: region_id.clone(),
                            effect: effect.clone(),
                        },
                    );
                    self.bus.emit(
                        frame,
                        SequencerEvent::EffectScheduled {
                            region: region_id.clone(),
                            effect,
                            due,
                        },
                    );
                }
                StageDecision::SkipUpward { effect } => {
                    self.metrics.inc_counter("effect.skipped", 1);
                    self.bus.emit(
                        frame,
                        SequencerEvent::EffectSkipped {
                            region: region_id.clone(),
                            effect,
                            reason: SkipReason::UpwardReentry,
                        },
                    );
                }
            }
        }
    }

    fn on_exit(&mut self, frame: Frame, region_id: RegionId) {
        self.metrics.inc_counter("region.exits", 1);
        if let Some(region) = self.regions.get_mut(region_id.as_str()) {
            region.phase = Phase::Outside;
        }
        self.bus
            .emit(frame, SequencerEvent::RegionExited { region: region_id });
    }

    fn fire_due(&mut self, frame: Frame) {
        for (_due, staged) in self.timers.drain_due(frame.time) {
            match self.actions.get_mut(&staged.effect) {
                None => {
                    self.metrics.inc_counter("effect.skipped", 1);
                    self.bus.emit(
                        frame,
                        SequencerEvent::EffectSkipped {
                            region: staged.region,
                            effect: staged.effect,
                            reason: SkipReason::NoAction,
                        },
                    );
                }
                Some(action) => {
                    let result = {
                        let mut ctx = EffectContext {
                            frame,
                            region: &staged.region,
                            effect: &staged.effect,
                            metrics: &mut self.metrics,
                        };
                        action(&mut ctx)
                    };
                    match result {
                        Ok(()) => {
                            self.metrics.inc_counter("effect.fired", 1);
                            self.bus.emit(
                                frame,
                                SequencerEvent::EffectFired {
                                    region: staged.region,
                                    effect: staged.effect,
                                },
                            );
                        }
                        Err(error) => {
                            self.metrics.inc_counter("effect.failed", 1);
                            self.bus.emit(
                                frame,
                                SequencerEvent::EffectFailed {
                                    region: staged.region,
                                    effect: staged.effect,
                                    error,
                                },
                            );
                        }
                    }
                }
            }
        }
    }
}
