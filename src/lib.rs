//! `envstamp` stamps a build's composite version (`<version>[-<revision>]`)
//! and UTC build date into a `KEY=VALUE` configuration file such as `.env`,
//! replacing existing entries in place and leaving every other line alone.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

pub use bootstrap::run;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
