pub mod integrator;
pub mod runner;

pub use integrator::step;
pub use runner::{run, RunSummary};
