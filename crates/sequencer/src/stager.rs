use foundation::time::Time;
use runtime::coalescer::Direction;

use crate::region::{EffectId, EffectSpec};

/// What the stager decided for one effect in a batch.
///
/// Decisions are plain data so staging policy can be unit-tested without a
/// timer; the sequencer applies `Schedule` decisions to its timer queue.
#[derive(Debug, Clone, PartialEq)]
pub enum StageDecision {
    Schedule { effect: EffectId, due: Time },
    SkipUpward { effect: EffectId },
}

/// Stages a batch of effects at independent relative delays.
///
/// Each effect is due at `now + delay_ms`, measured from this call — not
/// from the previous effect's completion. Upward entries skip effects that
/// do not replay upward. The stager never deduplicates: the one-shot gate
/// is the sole idempotence guard.
pub fn stage(now: Time, direction: Direction, batch: &[EffectSpec]) -> Vec<StageDecision> {
    batch
        .iter()
        .map(|spec| {
            if direction == Direction::Up && !spec.replay_upward {
                StageDecision::SkipUpward {
                    effect: spec.id.clone(),
                }
            } else {
                StageDecision::Schedule {
                    effect: spec.id.clone(),
                    due: now.after_millis(spec.delay_ms),
                }
            }
        })
        .collect()
}

/// Builds an evenly staggered reveal batch: `prefix-0 .. prefix-(n-1)` at
/// `index * step_ms`. The list-of-reveal-elements pattern.
pub fn staggered(prefix: &str, count: usize, step_ms: u64) -> Vec<EffectSpec> {
    (0..count)
        .map(|i| EffectSpec::new(format!("{prefix}-{i}"), i as u64 * step_ms))
        .collect()
}
