use thiserror::Error;

/// Error returned when accessing or popping the front or back of an empty
/// ring queue.
///
/// Carries no data; the private field keeps construction inside the crate.
#[derive(Error, Clone, Copy, PartialEq, Eq)]
#[error("ring queue is empty")]
pub struct UnderflowError(());

impl std::fmt::Debug for UnderflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "UnderflowError")
    }
}

impl UnderflowError {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}
