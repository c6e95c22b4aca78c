// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod command;
pub mod filesystem;
pub mod manifest;
pub mod persistence;

pub use clock::SystemClock;
pub use command::SystemCommandRunner;
pub use filesystem::LocalFileStore;
pub use manifest::{ManifestFormat, StructuredManifestReader};
