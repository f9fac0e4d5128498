//! Errors raised when a simulation is set up with state the integrator
//! cannot handle.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies start at exactly the same position.
    CoincidentBodies { first: usize, second: usize },
    /// A body was given a negative mass.
    NegativeMass { index: usize, mass: f64 },
    /// A body's position, velocity, mass or radius is NaN or infinite.
    NonFiniteState { index: usize },
    /// The anchor index does not name a body in the collection.
    AnchorOutOfRange { index: usize, len: usize },
    /// A configuration value is outside its allowed range.
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentBodies { first, second } => write!(
                f,
                "Bodies {} and {} start at the same position",
                first, second
            ),
            SimError::NegativeMass { index, mass } => {
                write!(f, "Body {} has negative mass {}", index, mass)
            }
            SimError::NonFiniteState { index } => {
                write!(f, "Body {} has a non-finite position, velocity, mass or radius", index)
            }
            SimError::AnchorOutOfRange { index, len } => write!(
                f,
                "Anchor index {} is out of range for {} bodies",
                index, len
            ),
            SimError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

pub type SimResult<T> = Result<T, SimError>;
