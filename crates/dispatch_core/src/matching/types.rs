use crate::ecs::DriverHandle;

/// A driver as seen by the matching algorithm: roster position is the slice index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverCandidate {
    pub driver: DriverHandle,
    pub available: bool,
}
