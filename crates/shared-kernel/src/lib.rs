// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DependencyError, DependencyResult, DomainError, DomainResult, ErrorContext, InputError,
    InputResult, OutputError, OutputResult, PresentationError, PresentationResult, Result, Stage,
    StampError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{BuildDate, CompositeVersion, DeclaredVersion, RevisionId};
