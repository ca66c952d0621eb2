pub mod config;
pub mod counter;
pub mod events;
pub mod gate;
pub mod handlers;
pub mod nav;
pub mod observer;
pub mod parallax;
pub mod region;
pub mod sequencer;
pub mod stager;

pub use config::*;
pub use events::*;
pub use gate::*;
pub use observer::*;
pub use region::*;
pub use sequencer::*;
pub use stager::*;
