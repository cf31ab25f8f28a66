use std::fmt;

use crate::ecs::RideStatus;

/// Errors returned by dispatcher operations. A failed call leaves the pool and ride log untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Every driver in the pool is currently assigned.
    NoDriversAvailable,
    /// Unknown rider/driver handle, unknown location, or a route rejected by config.
    InvalidArgument(String),
    InvalidTransition { from: RideStatus, to: RideStatus },
    /// The shared dispatcher lock was poisoned by a panicking holder.
    Unavailable(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoDriversAvailable => f.write_str("Drivers are not available"),
            DispatchError::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            DispatchError::InvalidTransition { from, to } => {
                write!(f, "ride cannot move from {from} to {to}")
            }
            DispatchError::Unavailable(message) => write!(f, "dispatcher unavailable: {message}"),
        }
    }
}

impl std::error::Error for DispatchError {}
