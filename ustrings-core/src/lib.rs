//! Extraction of printable Unicode text runs from binary input
//!
//! A byte stream is decoded as UTF-8 into code points, each code point is
//! classified against the enabled Unicode categories, and consecutive
//! printable code points are grouped into runs. A run long enough to qualify
//! is emitted as one line, optionally prefixed with a byte offset.
//!
//! # Architecture
//!
//! - [`decoder`]: pull-based UTF-8 decoding with replacement on bad bytes
//! - [`category`]: the printable predicate built from a [`Configuration`]
//! - [`accumulator`]: the Idle/Accumulating run state machine
//! - [`emitter`]: line formatting and output
//! - [`scanner`]: ties the pieces together for one stream at a time
//!
//! # Example
//!
//! ```rust
//! use ustrings_core::{scan, Configuration};
//!
//! let config = Configuration::builder()
//!     .punctuation(false)
//!     .emit_offsets(true)
//!     .build()
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! scan(&b"AB3!!!hello!!!CD"[..], &config, &mut out).unwrap();
//! assert_eq!(out, b"12: hello\n");
//! ```

pub mod accumulator;
pub mod category;
pub mod config;
pub mod decoder;
pub mod emitter;
pub mod error;
pub mod scanner;

pub use accumulator::{ByteCursor, Run, RunAccumulator, RunState, ScanSummary};
pub use category::{Category, CategoryPredicate};
pub use config::{Configuration, ConfigurationBuilder, TrailingRunPolicy};
pub use decoder::{CodePoint, Decoder};
pub use emitter::{format_line, CollectingEmitter, EmittedRun, Emitter, LineEmitter};
pub use error::{CoreError, Result};
pub use scanner::{scan, scan_bytes, Scanner};
