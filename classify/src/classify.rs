//! The classification loop.

use std::iter::FusedIterator;

use crate::buffer::MarkerBuffer;
use crate::error::Result;
use crate::marker::Marker;

/// Classify a single index. The first matching rule wins: 15, then 3, then 5.
///
/// Index 0 is a multiple of everything and classifies as [`Marker::FizzBuzz`];
/// the loop itself never produces it.
pub fn classify_one(n: usize) -> Marker {
    if n % 15 == 0 {
        Marker::FizzBuzz
    } else if n % 3 == 0 {
        Marker::Fizz
    } else if n % 5 == 0 {
        Marker::Buzz
    } else {
        Marker::Number(n)
    }
}

/// Counting loop over `1..=max`, yielding `(n, marker)` in increasing order.
///
/// Starts with the counter at 0 and is done once the counter reaches `max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    counter: usize,
    max: usize,
}

impl Classifier {
    pub fn new(max: usize) -> Self {
        Self { counter: 0, max }
    }

    /// Last index produced, 0 before the first step.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn is_done(&self) -> bool {
        self.counter >= self.max
    }
}

impl Iterator for Classifier {
    type Item = (usize, Marker);

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        self.counter += 1;
        Some((self.counter, classify_one(self.counter)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max - self.counter;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Classifier {}

impl FusedIterator for Classifier {}

/// Classify `1..=max` into `buffer`, one marker at index `n`.
///
/// A bounded buffer that cannot address `max` fails with
/// [`crate::ClassifyError::OutOfRange`] and is left untouched. A growable
/// buffer is resized first; it fails with
/// [`crate::ClassifyError::AllocationFailed`] only when `max + 1` cells cannot
/// be allocated.
pub fn classify(max: usize, buffer: &mut MarkerBuffer) -> Result<()> {
    if let Err(err) = buffer.prepare(max) {
        tracing::warn!(max, capacity = buffer.capacity(), "classification rejected: {err}");
        return Err(err);
    }

    for (n, marker) in Classifier::new(max) {
        buffer.put(n, marker.as_byte());
    }

    tracing::debug!(max, written = buffer.len(), "classification complete");
    Ok(())
}

/// Classify `1..=max` into a fresh default buffer (capacity 500, rejecting).
pub fn fizzbuzz(max: usize) -> Result<MarkerBuffer> {
    let mut buffer = MarkerBuffer::default();
    classify(max, &mut buffer)?;
    Ok(buffer)
}
