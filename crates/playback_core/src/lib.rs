//! Shared playback-sequencing domain primitives.
//!
//! This crate owns deterministic catalog ordering, event classification, the
//! playback state machine, and the skill response contract. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.
//! See `crates/playback_core/README.md` for ownership boundaries.

pub mod catalog;
pub mod request;
pub mod response;
pub mod transition;
