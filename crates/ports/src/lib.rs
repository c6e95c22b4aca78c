//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`clock`]: Wall-clock time
//! - [`filesystem`]: Reading and replacing whole text files
//! - [`command`]: Running an external program and capturing its output
//! - [`manifest`]: Extracting the declared version from a manifest
//!
//! These ports allow the use case to remain independent of specific
//! implementations and to be exercised against fixed inputs in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod command;
pub mod filesystem;
pub mod manifest;
