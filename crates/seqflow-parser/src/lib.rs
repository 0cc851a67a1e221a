//! Seqflow Parser
//!
//! Classifies the lines of a PlantUML sequence diagram produced by clang-uml.
//! The notation is line oriented, so classification works one line at a time
//! and never fails: anything outside the recognized vocabulary becomes
//! [`SequenceLine::Other`].
//!
//! # Example
//!
//! ```
//! use seqflow_parser::{SequenceLine, parse_line};
//!
//! assert_eq!(parse_line("alt [ready]"), SequenceLine::Alt("[ready]"));
//! assert_eq!(parse_line("a -> b : tick()"), SequenceLine::Message(" tick()"));
//! assert_eq!(parse_line("note over a"), SequenceLine::Other);
//! ```

mod line;
mod parser;

pub use line::SequenceLine;
pub use parser::{parse, parse_line};
