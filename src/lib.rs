pub mod config;
pub mod error;
pub mod gnc;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use config::Constants;
pub use error::SimError;
pub use gnc::Phase;
pub use orbital::Apsides;
pub use sim::{run, RunSummary};
pub use vehicle::{presets, Engine, Vehicle};
