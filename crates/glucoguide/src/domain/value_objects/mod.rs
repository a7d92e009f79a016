//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod category;
mod diabetes_type;
mod seed_format;

pub use category::*;
pub use diabetes_type::*;
pub use seed_format::*;
