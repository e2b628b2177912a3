//! Grid configuration model, validation, and the map source union.

use crate::error::ConfigError;

/// An explicit map supplied instead of density-based sampling.
///
/// When present, the map is the source of the obstacle layout and the
/// configured `size` (and, for [`Text`](MapSpec::Text) maps carrying
/// agent markers, `density` and `num_agents` as well) become
/// provisional defaults that map resolution overrides. The content is
/// not inspected at configuration time; malformed maps surface as parse
/// errors when generation resolves them.
#[derive(Clone, Debug, PartialEq)]
pub enum MapSpec {
    /// A rectangular matrix of `{0, 1}` cells, 1 = impassable.
    Matrix(Vec<Vec<u8>>),
    /// A multi-line textual grid using the `.#a-zA-Z` symbol table.
    Text(String),
}

/// Validated, immutable configuration for grid instance generation.
///
/// Constructed through [`GridConfig::builder`]; all field constraints
/// are checked once at [`build`](GridConfigBuilder::build) and hold for
/// the lifetime of the value.
///
/// # Examples
///
/// ```
/// use warren_core::GridConfig;
///
/// let config = GridConfig::builder()
///     .size(5)
///     .density(0.2)
///     .num_agents(1)
///     .obs_radius(2)
///     .seed(1)
///     .build()
///     .unwrap();
/// assert_eq!(config.size(), 5);
/// assert_eq!(config.seed(), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    size: u32,
    density: f64,
    num_agents: u32,
    obs_radius: u32,
    seed: Option<u64>,
    map: Option<MapSpec>,
}

impl GridConfig {
    /// Minimum side length of the unpadded grid.
    pub const MIN_SIZE: u32 = 2;

    /// Maximum side length. Together with [`MAX_OBS_RADIUS`](Self::MAX_OBS_RADIUS)
    /// this keeps padded `i32` coordinates in range and padded cell
    /// counts allocatable.
    pub const MAX_SIZE: u32 = 1 << 15;

    /// Maximum observation radius, i.e. border padding thickness.
    /// Bounds the padded side length at `MAX_SIZE + 2 * MAX_OBS_RADIUS`
    /// so the padded cell count cannot overflow.
    pub const MAX_OBS_RADIUS: u32 = 1 << 15;

    /// Create a builder with the default parameters
    /// (`size = 8`, `density = 0.3`, `num_agents = 1`, `obs_radius = 5`).
    pub fn builder() -> GridConfigBuilder {
        GridConfigBuilder::default()
    }

    /// Side length of the unpadded square grid.
    ///
    /// Provisional when an explicit map is present: resolution replaces
    /// it with the map's own dimensions.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Probability that an interior cell is sampled as an obstacle.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Number of agents to place.
    pub fn num_agents(&self) -> u32 {
        self.num_agents
    }

    /// Observation radius; also the border padding thickness.
    pub fn obs_radius(&self) -> u32 {
        self.obs_radius
    }

    /// Seed for the generation RNG. `None` means a fresh seed is drawn
    /// per generation call and the result is not reproducible.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The explicit map source, if any.
    pub fn map(&self) -> Option<&MapSpec> {
        self.map.as_ref()
    }
}

/// Builder for [`GridConfig`].
///
/// All setters are optional; `build()` validates the final values.
#[derive(Clone, Debug)]
pub struct GridConfigBuilder {
    size: u32,
    density: f64,
    num_agents: u32,
    obs_radius: u32,
    seed: Option<u64>,
    map: Option<MapSpec>,
}

impl Default for GridConfigBuilder {
    fn default() -> Self {
        Self {
            size: 8,
            density: 0.3,
            num_agents: 1,
            obs_radius: 5,
            seed: None,
            map: None,
        }
    }
}

impl GridConfigBuilder {
    /// Set the unpadded side length (default: 8).
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the obstacle density (default: 0.3).
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Set the agent count (default: 1).
    pub fn num_agents(mut self, num_agents: u32) -> Self {
        self.num_agents = num_agents;
        self
    }

    /// Set the observation radius (default: 5).
    pub fn obs_radius(mut self, obs_radius: u32) -> Self {
        self.obs_radius = obs_radius;
        self
    }

    /// Set the generation seed (default: none).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Supply an explicit map source (default: none).
    pub fn map(mut self, map: MapSpec) -> Self {
        self.map = Some(map);
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `size` is outside `[MIN_SIZE, MAX_SIZE]`
    /// - `obs_radius` exceeds `MAX_OBS_RADIUS`
    /// - `density` is not a finite value in `[0, 1]`
    /// - `num_agents` is zero
    pub fn build(self) -> Result<GridConfig, ConfigError> {
        if self.size < GridConfig::MIN_SIZE {
            return Err(ConfigError::SizeTooSmall {
                size: self.size,
                min: GridConfig::MIN_SIZE,
            });
        }
        if self.size > GridConfig::MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: self.size,
                max: GridConfig::MAX_SIZE,
            });
        }
        if self.obs_radius > GridConfig::MAX_OBS_RADIUS {
            return Err(ConfigError::ObsRadiusTooLarge {
                obs_radius: self.obs_radius,
                max: GridConfig::MAX_OBS_RADIUS,
            });
        }
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange {
                density: self.density,
            });
        }
        if self.num_agents == 0 {
            return Err(ConfigError::NoAgents);
        }
        Ok(GridConfig {
            size: self.size,
            density: self.density,
            num_agents: self.num_agents,
            obs_radius: self.obs_radius,
            seed: self.seed,
            map: self.map,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = GridConfig::builder().build().unwrap();
        assert_eq!(config.size(), 8);
        assert!((config.density() - 0.3).abs() < 1e-12);
        assert_eq!(config.num_agents(), 1);
        assert_eq!(config.obs_radius(), 5);
        assert_eq!(config.seed(), None);
        assert!(config.map().is_none());
    }

    #[test]
    fn rejects_size_one() {
        let result = GridConfig::builder().size(1).build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::SizeTooSmall { size: 1, min: 2 }
        );
    }

    #[test]
    fn rejects_oversized_grid() {
        let result = GridConfig::builder().size(GridConfig::MAX_SIZE + 1).build();
        assert!(matches!(result, Err(ConfigError::SizeTooLarge { .. })));
    }

    #[test]
    fn rejects_zero_agents() {
        let result = GridConfig::builder().num_agents(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::NoAgents);
    }

    #[test]
    fn rejects_density_above_one() {
        let result = GridConfig::builder().density(2.0).build();
        assert!(matches!(result, Err(ConfigError::DensityOutOfRange { .. })));
    }

    #[test]
    fn rejects_negative_and_nan_density() {
        assert!(GridConfig::builder().density(-0.1).build().is_err());
        assert!(GridConfig::builder().density(f64::NAN).build().is_err());
    }

    #[test]
    fn accepts_density_bounds() {
        assert!(GridConfig::builder().density(0.0).build().is_ok());
        assert!(GridConfig::builder().density(1.0).build().is_ok());
    }

    #[test]
    fn rejects_oversized_obs_radius() {
        // A huge radius would overflow the padded cell count during
        // generation; it must be caught here instead.
        let result = GridConfig::builder().size(2).obs_radius(u32::MAX).build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::ObsRadiusTooLarge {
                obs_radius: u32::MAX,
                max: GridConfig::MAX_OBS_RADIUS,
            }
        );
    }

    #[test]
    fn accepts_maximum_obs_radius() {
        let config = GridConfig::builder()
            .obs_radius(GridConfig::MAX_OBS_RADIUS)
            .build()
            .unwrap();
        assert_eq!(config.obs_radius(), GridConfig::MAX_OBS_RADIUS);
    }

    #[test]
    fn zero_obs_radius_is_valid() {
        let config = GridConfig::builder().obs_radius(0).build().unwrap();
        assert_eq!(config.obs_radius(), 0);
    }

    #[test]
    fn map_presence_is_recorded_without_parsing() {
        // Content is deliberately malformed; build() must not inspect it.
        let config = GridConfig::builder()
            .map(MapSpec::Text("?!".into()))
            .build()
            .unwrap();
        assert!(matches!(config.map(), Some(MapSpec::Text(_))));
    }
}
