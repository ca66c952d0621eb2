pub mod ease;
pub mod extent;
pub mod time;

// Foundation crate: small, well-tested primitives only.
pub use ease::*;
pub use extent::*;
pub use time::*;
