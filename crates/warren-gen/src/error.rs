//! Generation errors.

use std::error::Error;
use std::fmt;

use warren_core::Point;
use warren_map::MapError;

/// Which of an agent's two entities an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// The agent's start cell.
    Start,
    /// The agent's goal cell.
    Goal,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Errors from grid instance generation.
///
/// Map parse failures and explicit-entity conflicts are deterministic
/// and raised before or outside the retry loop; only
/// [`GenError::Overflow`] reflects exhausting the retry budget.
#[derive(Clone, Debug, PartialEq)]
pub enum GenError {
    /// The explicit map could not be resolved.
    Map(
        /// The underlying parse error.
        MapError,
    ),
    /// No valid placement was found within the retry budget.
    ///
    /// This is the expected outcome when the requested agent count
    /// exceeds the free cells obtainable at the configured density and
    /// size, or when a custom map is too small or too dense for it.
    Overflow {
        /// The resolved agent count that could not be placed.
        num_agents: u32,
        /// The exhausted retry budget.
        retries: usize,
    },
    /// An explicit entity position addresses an impassable cell.
    ///
    /// Cannot be fixed by retrying; raised immediately.
    BlockedEntity {
        /// Index of the agent whose entity is blocked.
        agent: usize,
        /// Whether the start or the goal is blocked.
        kind: EntityKind,
        /// The offending padded-space position.
        point: Point,
    },
    /// Two agents share an explicit start (or goal) position.
    ///
    /// Cannot be fixed by retrying; raised immediately.
    DuplicateEntity {
        /// Index of the second agent claiming the position.
        agent: usize,
        /// Whether starts or goals collide.
        kind: EntityKind,
        /// The contested padded-space position.
        point: Point,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(reason) => write!(f, "map resolution failed: {reason}"),
            Self::Overflow {
                num_agents,
                retries,
            } => write!(
                f,
                "could not place {num_agents} agent(s) in {retries} attempt(s); \
                 the configuration is infeasible for the requested agent count"
            ),
            Self::BlockedEntity { agent, kind, point } => {
                write!(f, "agent {agent} {kind} {point} is on an obstacle")
            }
            Self::DuplicateEntity { agent, kind, point } => {
                write!(f, "agent {agent} {kind} {point} is already taken")
            }
        }
    }
}

impl Error for GenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Map(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<MapError> for GenError {
    fn from(err: MapError) -> Self {
        Self::Map(err)
    }
}
