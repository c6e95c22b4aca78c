// crates/shared-kernel/src/value_objects/mod.rs
pub mod build_date;
pub mod version;

pub use build_date::BuildDate;
pub use version::{CompositeVersion, DeclaredVersion, RevisionId};
