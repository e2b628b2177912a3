//! Grid instance generation: the bounded retry loop and the result type.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_core::{BitGrid, GridConfig, Point};
use warren_map::{pad, resolve};

use crate::error::GenError;
use crate::place::{place, PlaceOutcome};

/// Warn when a success consumed more than `retries / WARN_BUDGET_DIVISOR`
/// attempts: the configuration sits close to the overflow boundary.
const WARN_BUDGET_DIVISOR: usize = 2;

/// Configuration values as actually used for a generated instance,
/// after any overrides performed during map resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Unpadded side length (the longer dimension for non-square maps).
    pub size: u32,
    /// Obstacle density; for explicit maps, the actual obstacle
    /// fraction of the unpadded cells.
    pub density: f64,
    /// Agent count; for textual maps with markers, the marker count.
    pub num_agents: u32,
    /// Observation radius, i.e. the border padding thickness.
    pub obs_radius: u32,
    /// The seed the RNG was built from. Drawn fresh when the
    /// configuration carried none, so it is always concrete here.
    pub seed: u64,
}

/// A generated grid-world instance.
///
/// Owns the padded obstacle layout, one start and one goal per agent
/// (index-aligned), and the resolved configuration. Immutable once
/// generation succeeds; two calls with the same seed and configuration
/// produce identical instances.
///
/// # Examples
///
/// ```
/// use warren_core::GridConfig;
/// use warren_gen::Grid;
///
/// let config = GridConfig::builder()
///     .seed(1)
///     .size(5)
///     .density(0.2)
///     .num_agents(1)
///     .obs_radius(2)
///     .build()
///     .unwrap();
/// let grid = Grid::generate(&config).unwrap();
/// assert_eq!(grid.obstacles().rows(), 9);
/// assert_eq!(grid.starts().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    obstacles: BitGrid,
    starts: Vec<Point>,
    goals: Vec<Point>,
    config: ResolvedConfig,
    attempts: usize,
}

impl Grid {
    /// Default retry budget for [`generate`](Self::generate).
    pub const DEFAULT_RETRIES: usize = 1000;

    /// Generate an instance with the default retry budget.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the explicit map is malformed, an explicit
    /// entity position is structurally invalid, or no valid placement
    /// was found within [`DEFAULT_RETRIES`](Self::DEFAULT_RETRIES)
    /// attempts.
    pub fn generate(config: &GridConfig) -> Result<Self, GenError> {
        Self::generate_with_retries(config, Self::DEFAULT_RETRIES)
    }

    /// Generate an instance, retrying up to `retries` attempts.
    ///
    /// One RNG is seeded per call and threaded through both obstacle
    /// sampling and placement, so reproducibility spans the whole
    /// generation. Each failed attempt discards the map-source artifact
    /// entirely; density mode re-samples its obstacle layout, explicit
    /// maps re-resolve to the same layout. Parse errors surface on the
    /// first attempt and are never converted into overflow.
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn generate_with_retries(config: &GridConfig, retries: usize) -> Result<Self, GenError> {
        let seed = config.seed().unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        // Resolved before the loop: a parse error is deterministic and
        // must never be converted into overflow by an empty budget.
        let mut artifact = resolve(config, &mut rng)?;
        let requested = artifact.num_agents;

        for attempt in 1..=retries {
            let padded = pad(&artifact.obstacles, config.obs_radius());
            let shift = config.obs_radius() as i32;
            let pairs: Vec<(Point, Point)> = artifact
                .pairs
                .iter()
                .map(|&(start, goal)| (start.offset(shift), goal.offset(shift)))
                .collect();

            match place(&padded, artifact.num_agents as usize, &pairs, &mut rng)? {
                PlaceOutcome::Placed { starts, goals } => {
                    if attempt > 1 && attempt > retries / WARN_BUDGET_DIVISOR {
                        eprintln!(
                            "warren-gen: warning: placement needed {attempt} of {retries} \
                             attempt(s); the configuration is close to infeasible"
                        );
                    }
                    return Ok(Self {
                        obstacles: padded,
                        starts,
                        goals,
                        config: ResolvedConfig {
                            size: artifact.size,
                            density: artifact.density,
                            num_agents: artifact.num_agents,
                            obs_radius: config.obs_radius(),
                            seed,
                        },
                        attempts: attempt,
                    });
                }
                PlaceOutcome::Exhausted => {
                    // Discard the whole attempt. Density mode draws a
                    // fresh obstacle layout; explicit maps re-resolve
                    // to the same artifact and re-parsing cannot fail
                    // after the first resolution succeeded.
                    artifact = resolve(config, &mut rng)?;
                }
            }
        }

        Err(GenError::Overflow {
            num_agents: requested,
            retries,
        })
    }

    /// The padded obstacle layout. The border ring of width
    /// `obs_radius` is entirely impassable.
    pub fn obstacles(&self) -> &BitGrid {
        &self.obstacles
    }

    /// Start positions in padded coordinates, one per agent,
    /// index-aligned with [`goals`](Self::goals).
    pub fn starts(&self) -> &[Point] {
        &self.starts
    }

    /// Goal positions in padded coordinates, one per agent.
    pub fn goals(&self) -> &[Point] {
        &self.goals
    }

    /// The configuration as resolved for this instance.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Number of generation attempts the successful call consumed.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Dimensions of the padded grid as `(rows, cols)`.
    pub fn padded_size(&self) -> (usize, usize) {
        (self.obstacles.rows(), self.obstacles.cols())
    }
}
