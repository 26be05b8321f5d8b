//! # ipgate core
//!
//! Application level questions answered on top of `ipgate-common`:
//!
//! * **[`policy`]**: save-time validation and request-time key lookup.
//! * **[`client`]**: picking the client address out of request metadata.
//! * **[`prune`]**: dropping assignments whose keys no longer exist.

pub mod client;
pub mod error;
pub mod policy;
pub mod prune;

pub use error::{PolicyError, PolicyResult};
