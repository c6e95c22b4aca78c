// tests/common/mod.rs
//! Shared helpers for driving the `envstamp` binary.

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempProject;
