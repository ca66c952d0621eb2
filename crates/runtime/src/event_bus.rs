use crate::frame::Frame;

/// A frame-stamped event record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<K> {
    pub frame_index: u64,
    pub kind: K,
}

/// Append-only, typed event log.
///
/// The bus is the engine's logging layer: library code emits structured
/// events here and never writes to stdout. Hosts and tests drain the log;
/// kinds are a caller-supplied closed enum so assertions stay structural.
#[derive(Debug, Default)]
pub struct EventBus<K> {
    events: Vec<Event<K>>,
}

impl<K> EventBus<K> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, frame: Frame, kind: K) {
        self.events.push(Event {
            frame_index: frame.index,
            kind,
        });
    }

    pub fn events(&self) -> &[Event<K>] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Event<K>> {
        std::mem::take(&mut self.events)
    }
}
