//! Map source resolution.
//!
//! [`resolve`] dispatches over the configuration's map field — absent,
//! numeric matrix, or textual grid — and produces a canonical
//! [`MapArtifact`]: the raw unpadded obstacle layout, any explicit
//! entity pairs, and the resolved size/density/agent-count values
//! (overridden by the map where it carries its own).

use rand_chacha::ChaCha8Rng;
use warren_core::{BitGrid, GridConfig, MapSpec, Point};

use crate::error::MapError;
use crate::matrix::from_matrix;
use crate::sample::sample_obstacles;
use crate::text::parse_text;

/// The transient product of map resolution, consumed once by the
/// placement engine.
///
/// `pairs` holds one explicit `(start, goal)` per agent in unpadded
/// coordinates; it is empty unless a textual map declared markers, in
/// which case it covers every agent (`pairs.len() == num_agents`).
#[derive(Clone, Debug)]
pub struct MapArtifact {
    /// Raw unpadded obstacle layout.
    pub obstacles: BitGrid,
    /// Explicit `(start, goal)` pairs in unpadded coordinates.
    pub pairs: Vec<(Point, Point)>,
    /// Resolved side length: the configured size, or the longer map
    /// dimension when an explicit map overrides it.
    pub size: u32,
    /// Resolved obstacle density: the configured value, or the actual
    /// obstacle fraction of an explicit map.
    pub density: f64,
    /// Resolved agent count: the configured value, or the number of
    /// marker pairs a textual map declares (when non-zero).
    pub num_agents: u32,
}

/// Resolve the configuration's map source into a [`MapArtifact`].
///
/// Density mode draws from `rng`; explicit-map modes consume nothing
/// from it. Parse errors are deterministic and must never be retried.
///
/// # Errors
///
/// Returns `Err` if an explicit map is malformed (see [`MapError`]).
pub fn resolve(config: &GridConfig, rng: &mut ChaCha8Rng) -> Result<MapArtifact, MapError> {
    match config.map() {
        None => Ok(MapArtifact {
            obstacles: sample_obstacles(config.size(), config.density(), rng),
            pairs: Vec::new(),
            size: config.size(),
            density: config.density(),
            num_agents: config.num_agents(),
        }),
        Some(MapSpec::Matrix(matrix)) => {
            let obstacles = from_matrix(matrix)?;
            Ok(MapArtifact {
                size: obstacles.rows().max(obstacles.cols()) as u32,
                density: obstacles.obstacle_ratio(),
                num_agents: config.num_agents(),
                pairs: Vec::new(),
                obstacles,
            })
        }
        Some(MapSpec::Text(text)) => {
            let parsed = parse_text(text)?;
            let num_agents = if parsed.pairs.is_empty() {
                config.num_agents()
            } else {
                parsed.pairs.len() as u32
            };
            Ok(MapArtifact {
                size: parsed.grid.rows().max(parsed.grid.cols()) as u32,
                density: parsed.grid.obstacle_ratio(),
                num_agents,
                pairs: parsed.pairs,
                obstacles: parsed.grid,
            })
        }
    }
}
