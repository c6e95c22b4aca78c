//! # Domain
//!
//! Pure model of the stamped configuration file.
//!
//! - [`key`]: recognized entry keys and their validation
//! - [`document`]: line-oriented `KEY=VALUE` document with find-first-or-append upserts
//! - [`stamp`]: computing the stamped values and applying them to a document
//!
//! Nothing here touches the clock, the file system or subprocesses.

#![allow(clippy::multiple_crate_versions)]

pub mod document;
pub mod key;
pub mod stamp;

pub use document::{ConfigDocument, ConfigEntry, LineEnding, UpsertOutcome};
pub use key::{DEFAULT_BUILD_DATE_KEY, DEFAULT_VERSION_KEY, EntryKey, StampKeys};
pub use stamp::{StampOutcome, StampValues, apply_stamp};
