//! Entity placement and the bounded generation loop for Warren.
//!
//! [`Grid::generate`] drives the full pipeline: map resolution, border
//! padding, and seeded entity placement, retried up to a caller-supplied
//! budget when a random draw does not admit a valid placement. The
//! successful result owns the padded obstacle layout and the per-agent
//! start/goal lists.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod place;

pub use error::{EntityKind, GenError};
pub use grid::{Grid, ResolvedConfig};
