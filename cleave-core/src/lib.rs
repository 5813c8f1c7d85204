//! Word and grapheme segmentation for line-oriented text
//!
//! Each input line is broken into words, each word into user-perceived
//! characters (extended grapheme clusters), and the result is written as a
//! delimited encoding that keeps the structure recoverable.
//!
//! # Architecture
//!
//! - **segment**: the two word boundary strategies and the grapheme split
//! - **receiver**: the state machine that turns events into delimited output
//! - **processor**: per-line orchestration and run statistics
//!
//! # Example
//!
//! ```rust
//! use cleave_core::{LineProcessor, Strategy};
//!
//! let mut processor = LineProcessor::new(Strategy::Unicode);
//! let mut out = Vec::new();
//!
//! let changed = processor
//!     .process_reader("Hi, you.\n".as_bytes(), &mut out)
//!     .unwrap();
//!
//! assert_eq!(changed, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "H\ni\n \ny\no\nu\n \n\n");
//! assert_eq!(processor.stats().words, 2);
//! ```

pub mod config;
pub mod error;
pub mod processor;
pub mod receiver;
pub mod segment;

pub use config::{ProcessorConfig, ProcessorConfigBuilder};
pub use error::{CoreError, Result};
pub use processor::{LineProcessor, RunStatistics};
pub use receiver::{Delimiters, Placement, Receiver, ReceiverState, StreamReceiver};
pub use segment::{SegmentStats, Segmenter, Strategy};
