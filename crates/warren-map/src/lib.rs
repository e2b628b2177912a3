//! Map source resolution and coordinate framing for Warren.
//!
//! Turns a validated [`GridConfig`](warren_core::GridConfig) into a raw
//! unpadded obstacle layout plus any explicit entity positions, via one
//! of three mutually exclusive sources: seeded density sampling, a
//! numeric `{0, 1}` matrix, or the textual map grammar. Also provides
//! the border [`pad`]ding that establishes padded coordinate space.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod matrix;
mod pad;
mod resolve;
mod sample;
mod text;

pub use error::MapError;
pub use pad::pad;
pub use resolve::{resolve, MapArtifact};
