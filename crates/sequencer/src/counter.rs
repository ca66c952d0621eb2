use foundation::ease::ease_out_quad;

/// Precomputed eased counter animation.
///
/// The plan yields one display value per frame at a fixed fps; the final
/// frame is the exact target regardless of floating point drift along the
/// way. The host maps plan frames onto real display updates.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterPlan {
    target: f64,
    decimals: usize,
    frames: u32,
}

/// Decimal places in the target's shortest representation: `33.3` animates
/// with one decimal, whole numbers floor along the way.
fn decimals_of(target: f64) -> usize {
    let s = target.to_string();
    s.split_once('.').map_or(0, |(_, frac)| frac.len())
}

impl CounterPlan {
    pub fn new(target: f64, duration_ms: u64, fps: u32) -> Self {
        let frame_duration_ms = 1000.0 / fps.max(1) as f64;
        let frames = (duration_ms as f64 / frame_duration_ms).round().max(1.0) as u32;
        Self {
            target,
            decimals: decimals_of(target),
            frames,
        }
    }

    /// Total frame count, final frame included.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Eased value at 1-based `frame`; the last frame is exactly the target.
    pub fn value_at(&self, frame: u32) -> f64 {
        if frame >= self.frames {
            return self.target;
        }
        let progress = frame as f64 / self.frames as f64;
        self.target * ease_out_quad(progress)
    }

    /// Display string at `frame`: intermediate integer values are floored,
    /// fractional targets keep their precision throughout.
    pub fn display_at(&self, frame: u32) -> String {
        let value = self.value_at(frame);
        if self.decimals > 0 {
            format!("{value:.prec$}", prec = self.decimals)
        } else if frame >= self.frames {
            format!("{}", self.target as i64)
        } else {
            format!("{}", value.floor() as i64)
        }
    }

    pub fn display_values(&self) -> Vec<String> {
        (1..=self.frames).map(|f| self.display_at(f)).collect()
    }
}
