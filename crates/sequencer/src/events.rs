use foundation::time::Time;
use runtime::coalescer::Direction;
use runtime::event_bus::EventBus;

use crate::region::{EffectId, RegionId};

/// Collaborator failure surfaced by an effect action.
///
/// Effect failures are isolated per effect and never fatal; the message is
/// carried for the event log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectError {
    pub message: String,
}

impl EffectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for EffectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EffectError {}

/// Why a staged or gated effect did not run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The one-shot gate had already recorded the pair.
    AlreadyFired,
    /// Upward re-entry and the effect does not replay upward.
    UpwardReentry,
    /// No collaborator action is bound to the effect id.
    NoAction,
}

/// Everything observable the sequencer does, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerEvent {
    RegionEntered {
        region: RegionId,
        direction: Direction,
    },
    RegionExited {
        region: RegionId,
    },
    EffectScheduled {
        region: RegionId,
        effect: EffectId,
        due: Time,
    },
    EffectFired {
        region: RegionId,
        effect: EffectId,
    },
    EffectFailed {
        region: RegionId,
        effect: EffectId,
        error: EffectError,
    },
    EffectSkipped {
        region: RegionId,
        effect: EffectId,
        reason: SkipReason,
    },
    AnchorMissing {
        region: RegionId,
    },
    NavChanged {
        active: Option<RegionId>,
    },
}

pub type SequencerBus = EventBus<SequencerEvent>;
