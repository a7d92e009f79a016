//! Application Layer
//!
//! Use cases that orchestrate the catalog and the LLM port.

mod conversation;

pub use conversation::*;
