pub mod coalescer;
pub mod debounce;
pub mod event_bus;
pub mod frame;
pub mod metrics;
pub mod timer;

pub use coalescer::*;
pub use debounce::*;
pub use event_bus::*;
pub use frame::*;
pub use timer::*;
