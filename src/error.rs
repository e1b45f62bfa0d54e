use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// A numerical fault detected after a single integration step.
///
/// Carries the mission time at which the state went bad; the driver adds the
/// failing step index when it wraps this into a [`SimError`].
#[derive(Debug, Error)]
#[error("{detail} at t={time:.2} s")]
pub struct StepFault {
    pub time: f64,
    pub detail: String,
}

/// Top-level simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// Malformed constants or construction errors. Fatal before the loop starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A per-step numerical fault. The run is aborted; rows already written
    /// are preserved.
    #[error("numerical fault at step {step}: {fault}")]
    Numerical {
        step: usize,
        #[source]
        fault: StepFault,
    },

    /// Output file fault.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
