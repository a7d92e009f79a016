//! Domain Services
//!
//! Stateless helpers over the domain entities, plus the shared catalog handle.

pub mod builtin;
mod catalog_handle;
mod json_extract;
mod personalized;
mod seed_formatter;

pub use catalog_handle::*;
pub use json_extract::*;
pub use personalized::*;
pub use seed_formatter::*;
