//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the stamping pipeline (manifest, revision, document, write)
//! - [`revision`]: short revision lookup through the command port
//! - [`dto`]: request and result types for the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod revision;

pub use dto::{RevisionPolicy, StampRequest, StampResult};
pub use orchestrator::StampVersion;
