/// Scroll direction relative to the previous sample.
///
/// Equal offsets count as `Up`: a non-moving "scroll" must never replay
/// entrance animations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// One raw scroll sample with its derived direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub direction: Direction,
}

/// Buffers raw scroll samples between frames.
///
/// Hosts deliver scroll input at whatever rate the platform produces it;
/// the sequencer drains the buffer once per frame and runs a single
/// recomputation pass over the drained samples. Coalescing is a performance
/// measure only: because the pass replays samples in arrival order, a
/// transition that happened mid-batch is still observed.
#[derive(Debug)]
pub struct ScrollCoalescer {
    last_offset: f64,
    pending: Vec<ScrollSample>,
}

impl Default for ScrollCoalescer {
    fn default() -> Self {
        Self {
            last_offset: 0.0,
            pending: Vec::new(),
        }
    }
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset (last pushed sample, or 0 before any input).
    pub fn offset(&self) -> f64 {
        self.last_offset
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn push(&mut self, offset: f64) {
        let direction = if offset > self.last_offset {
            Direction::Down
        } else {
            Direction::Up
        };
        self.last_offset = offset;
        self.pending.push(ScrollSample { offset, direction });
    }

    /// Drains buffered samples in arrival order.
    pub fn take(&mut self) -> Vec<ScrollSample> {
        std::mem::take(&mut self.pending)
    }
}
