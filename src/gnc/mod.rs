pub mod guidance;

pub use guidance::{autopilot, Phase};
