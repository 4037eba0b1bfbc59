//! AWS-oriented adapters and handlers for the video playback skill.
//!
//! This crate owns runtime integration details (the Lambda handler and the
//! S3-backed media store) and keeps the wire contract, catalog ordering, and
//! playback state machine in `playback_core`.
//! See `crates/playback_lambda/README.md` for ownership boundaries.

pub mod adapters;
pub mod handlers;
