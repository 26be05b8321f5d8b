//! # ipgate common
//!
//! Pure IPv4 building blocks shared by the policy layer and the CLI.
//!
//! * **[`network::address`]**: dotted-quad text to 32-bit value and back.
//! * **[`network::range`]**: `A-B` ranges with strictly increasing bounds.
//! * **[`network::entry`]**: entries and comma-separated fields.
//! * **[`network::overlap`]**: containment, intersection and the tri-state
//!   "does this entry overlap any of these" predicate.
//! * **[`assignments`]**: the ordered key to field mapping handed in by callers.

pub mod assignments;
pub mod config;
pub mod error;
pub mod log;
pub mod network;

pub use error::{ParseError, ParseResult};
