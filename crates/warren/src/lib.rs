//! Warren: a deterministic, seed-reproducible procedural generator for
//! multi-agent grid-world pathfinding instances.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Warren sub-crates. For most users, adding `warren` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! let config = GridConfig::builder()
//!     .seed(1)
//!     .size(8)
//!     .density(0.3)
//!     .num_agents(2)
//!     .obs_radius(2)
//!     .build()
//!     .unwrap();
//!
//! let grid = Grid::generate(&config).unwrap();
//! assert_eq!(grid.padded_size(), (12, 12));
//! assert_eq!(grid.starts().len(), 2);
//! // Same seed, same instance.
//! assert_eq!(grid, Grid::generate(&config).unwrap());
//! ```
//!
//! Explicit maps replace density sampling; the textual grammar can
//! also pin each agent's start (uppercase letter) and goal (matching
//! lowercase letter):
//!
//! ```rust
//! use warren::prelude::*;
//!
//! let config = GridConfig::builder()
//!     .obs_radius(1)
//!     .map(MapSpec::Text(
//!         "
//!         .a.#
//!         ...B
//!         .b.A
//!     "
//!         .into(),
//!     ))
//!     .build()
//!     .unwrap();
//! let grid = Grid::generate(&config).unwrap();
//! assert_eq!(grid.config().num_agents, 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | Coordinate/grid primitives, configuration model |
//! | [`map`] | `warren-map` | Map source resolution and border padding |
//! | [`generator`] | `warren-gen` | Entity placement and the generation loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate and grid primitives plus the configuration model
/// (`warren-core`).
pub use warren_core as types;

/// Map source resolution and border padding (`warren-map`).
pub use warren_map as map;

/// Entity placement and the bounded generation loop (`warren-gen`).
pub use warren_gen as generator;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use warren_core::{BitGrid, GridConfig, MapSpec, Point};

    // Errors
    pub use warren_core::ConfigError;
    pub use warren_gen::GenError;
    pub use warren_map::MapError;

    // Generation
    pub use warren_gen::{Grid, ResolvedConfig};
}
