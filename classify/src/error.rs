use thiserror::Error;

/// Errors raised by the classification routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// `max` does not fit a bounded buffer. Index 0 is never written, so the
    /// largest usable index is `capacity - 1`.
    #[error("max {max} is out of range for a buffer of capacity {capacity} (largest index is {})", .capacity.saturating_sub(1))]
    OutOfRange { max: usize, capacity: usize },

    /// A buffer of `cells` bytes could not be allocated.
    #[error("could not allocate a marker buffer of {cells} cells")]
    AllocationFailed { cells: usize },
}

/// Type alias for Results using ClassifyError
pub type Result<T> = std::result::Result<T, ClassifyError>;
