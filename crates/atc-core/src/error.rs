//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert into `AtcError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::attrs::{Category, Engine, Size};

/// The top-level error type for `atc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AtcError {
    #[error("squawk code {0:#o} outside the assignable range")]
    InvalidSquawk(u16),

    #[error("no squawk class block for {category}/{size}/{engine}")]
    InvalidAircraftClass {
        category: Category,
        size:     Size,
        engine:   Engine,
    },
}

/// Shorthand result type for all `atc-*` crates.
pub type AtcResult<T> = Result<T, AtcError>;
