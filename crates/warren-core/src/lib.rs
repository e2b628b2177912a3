//! Core types for the Warren grid-world instance generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate and obstacle-grid primitives, the validated
//! [`GridConfig`] configuration model, and the configuration error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod grid;
mod point;

pub use config::{GridConfig, GridConfigBuilder, MapSpec};
pub use error::ConfigError;
pub use grid::BitGrid;
pub use point::Point;
