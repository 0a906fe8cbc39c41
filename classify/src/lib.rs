//! Multiple-of-3/5/15 classification into a 1-based marker buffer.
//!
//! For every `n` in `1..=max` the routine stores one byte-sized marker at
//! position `n` of a [`MarkerBuffer`]:
//!
//! - `*` for multiples of 15
//! - `F` for multiples of 3
//! - `B` for multiples of 5
//! - the raw numeric value of `n` otherwise
//!
//! ```
//! use fizzbuzz_classify::fizzbuzz;
//!
//! let buffer = fizzbuzz(5)?;
//! assert_eq!(buffer.markers(), &[1, 2, b'F', 4, b'B']);
//! # Ok::<(), fizzbuzz_classify::ClassifyError>(())
//! ```

pub mod buffer;
pub mod classify;
pub mod config;
pub mod error;
pub mod marker;

pub use buffer::{DEFAULT_CAPACITY, MarkerBuffer, OverflowPolicy};
pub use classify::{Classifier, classify, classify_one, fizzbuzz};
pub use config::{BufferConfig, CONFIG_FILENAME, ConfigError, load_buffer_config};
pub use error::{ClassifyError, Result};
pub use marker::Marker;
