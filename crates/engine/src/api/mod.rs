//! API layer - entry points that drive the engine from outside the host.

pub mod replay;

pub use replay::{HostEvent, Replay, ReplayScript, StepReport};
