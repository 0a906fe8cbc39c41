//! Byte-cell output buffer addressed by index (1-based).
//!
//! Cell 0 is never written. A bounded buffer of capacity `c` can therefore
//! hold markers for `1..=c - 1`; a growable buffer resizes itself to
//! `max + 1` cells before a run starts.

use serde::Deserialize;

use crate::config::BufferConfig;
use crate::error::{ClassifyError, Result};

/// Capacity of the default buffer.
pub const DEFAULT_CAPACITY: usize = 500;

/// What a buffer does when a run needs more cells than it has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the run with [`ClassifyError::OutOfRange`] before writing anything.
    #[default]
    Reject,
    /// Resize to `max + 1` cells. Fails with [`ClassifyError::AllocationFailed`]
    /// when the allocator refuses.
    Grow,
}

impl OverflowPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Grow => "grow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBuffer {
    cells: Vec<u8>,
    policy: OverflowPolicy,
    /// Highest index written by the latest run.
    len: usize,
}

impl MarkerBuffer {
    /// Buffer of `capacity` zeroed cells. Aborts like `vec!` if the allocation
    /// fails; use [`MarkerBuffer::try_new`] for sizes that come from input.
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            cells: vec![0; capacity],
            policy,
            len: 0,
        }
    }

    pub fn try_new(capacity: usize, policy: OverflowPolicy) -> Result<Self> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(capacity)
            .map_err(|_| ClassifyError::AllocationFailed { cells: capacity })?;
        cells.resize(capacity, 0);
        Ok(Self {
            cells,
            policy,
            len: 0,
        })
    }

    /// Fixed-capacity buffer that rejects runs past `capacity - 1`.
    pub fn bounded(capacity: usize) -> Self {
        Self::new(capacity, OverflowPolicy::Reject)
    }

    /// Empty buffer that grows on demand.
    pub fn growable() -> Self {
        Self::new(0, OverflowPolicy::Grow)
    }

    pub fn from_config(config: &BufferConfig) -> Result<Self> {
        Self::try_new(config.capacity, config.overflow)
    }

    /// Number of cells, including the unused cell 0.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Largest index a run may reach, or `None` when the buffer grows.
    pub fn max_index(&self) -> Option<usize> {
        match self.policy {
            OverflowPolicy::Reject => Some(self.capacity().saturating_sub(1)),
            OverflowPolicy::Grow => None,
        }
    }

    /// Number of markers written by the latest run.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marker byte stored at index `n`, for `n` in `1..=len()`.
    pub fn get(&self, n: usize) -> Option<u8> {
        if n == 0 || n > self.len {
            return None;
        }
        self.cells.get(n).copied()
    }

    /// Marker bytes for indices `1..=len()`, in order.
    pub fn markers(&self) -> &[u8] {
        if self.len == 0 {
            return &[];
        }
        &self.cells[1..=self.len]
    }

    /// Zero every cell and forget the latest run.
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.len = 0;
    }

    /// Make indices `1..=max` addressable and start a new run.
    ///
    /// Nothing is written, and the previous run stays visible, when this fails.
    pub(crate) fn prepare(&mut self, max: usize) -> Result<()> {
        if max > 0 && max >= self.cells.len() {
            let out_of_range = ClassifyError::OutOfRange {
                max,
                capacity: self.cells.len(),
            };
            match self.policy {
                OverflowPolicy::Reject => return Err(out_of_range),
                OverflowPolicy::Grow => {
                    // usize::MAX + 1 cells cannot exist
                    let cells = max.checked_add(1).ok_or(out_of_range)?;
                    tracing::debug!(from = self.cells.len(), to = cells, "growing marker buffer");
                    self.cells
                        .try_reserve_exact(cells - self.cells.len())
                        .map_err(|_| ClassifyError::AllocationFailed { cells })?;
                    self.cells.resize(cells, 0);
                }
            }
        }
        self.len = 0;
        Ok(())
    }

    /// Store `byte` at index `n`. Callers write indices in increasing order
    /// after a successful [`MarkerBuffer::prepare`].
    pub(crate) fn put(&mut self, n: usize, byte: u8) {
        self.cells[n] = byte;
        self.len = n;
    }
}

impl Default for MarkerBuffer {
    fn default() -> Self {
        Self::bounded(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_bounded_at_500() {
        let buffer = MarkerBuffer::default();
        assert_eq!(buffer.capacity(), 500);
        assert_eq!(buffer.policy(), OverflowPolicy::Reject);
        assert_eq!(buffer.max_index(), Some(499));
        assert!(buffer.is_empty());
        assert_eq!(buffer.markers(), &[] as &[u8]);
    }

    #[test]
    fn prepare_rejects_past_last_cell() {
        let mut buffer = MarkerBuffer::bounded(4);
        assert_eq!(buffer.prepare(3), Ok(()));
        assert_eq!(
            buffer.prepare(4),
            Err(ClassifyError::OutOfRange {
                max: 4,
                capacity: 4
            })
        );
        assert_eq!(buffer.capacity(), 4);
    }

    #[test]
    fn zero_capacity_accepts_only_empty_runs() {
        let mut buffer = MarkerBuffer::bounded(0);
        assert_eq!(buffer.max_index(), Some(0));
        assert_eq!(buffer.prepare(0), Ok(()));
        assert!(buffer.prepare(1).is_err());
    }

    #[test]
    fn growable_resizes_once_per_larger_run() {
        let mut buffer = MarkerBuffer::growable();
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.max_index(), None);

        assert_eq!(buffer.prepare(0), Ok(()));
        assert_eq!(buffer.capacity(), 0);

        assert_eq!(buffer.prepare(10), Ok(()));
        assert_eq!(buffer.capacity(), 11);

        assert_eq!(buffer.prepare(4), Ok(()));
        assert_eq!(buffer.capacity(), 11);
    }

    #[test]
    fn growing_past_the_allocator_fails_without_panicking() {
        let mut buffer = MarkerBuffer::growable();
        assert_eq!(
            buffer.prepare(usize::MAX - 1),
            Err(ClassifyError::AllocationFailed { cells: usize::MAX })
        );
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.prepare(3), Ok(()));
    }

    #[test]
    fn oversized_config_capacity_is_an_error() {
        let capacity = isize::MAX as usize + 1;
        let config = BufferConfig {
            capacity,
            overflow: OverflowPolicy::Reject,
        };
        assert_eq!(
            MarkerBuffer::from_config(&config),
            Err(ClassifyError::AllocationFailed { cells: capacity })
        );
        assert_eq!(
            MarkerBuffer::from_config(&BufferConfig::default()).map(|b| b.capacity()),
            Ok(DEFAULT_CAPACITY)
        );
    }

    #[test]
    fn get_is_limited_to_latest_run() {
        let mut buffer = MarkerBuffer::bounded(8);
        assert_eq!(buffer.prepare(3), Ok(()));
        buffer.put(1, 1);
        buffer.put(2, 2);
        buffer.put(3, b'F');

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(0), None);
        assert_eq!(buffer.get(3), Some(b'F'));
        assert_eq!(buffer.get(4), None);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.get(1), None);
    }

    #[test]
    fn overflow_policy_serializes_lowercase() {
        assert_eq!(OverflowPolicy::Reject.as_str(), "reject");
        assert_eq!(OverflowPolicy::Grow.as_str(), "grow");
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Reject);
    }
}
