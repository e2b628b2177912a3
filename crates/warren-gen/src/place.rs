//! Entity placement over a padded obstacle grid.

use std::collections::HashSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use warren_core::{BitGrid, Point};

use crate::error::{EntityKind, GenError};

/// Outcome of a single placement attempt.
#[derive(Debug)]
pub(crate) enum PlaceOutcome {
    /// Every agent received a start and a goal.
    Placed {
        /// One start per agent, index-aligned with `goals`.
        starts: Vec<Point>,
        /// One goal per agent.
        goals: Vec<Point>,
    },
    /// Fewer passable cells than the placement needs; the caller should
    /// discard the attempt and regenerate.
    Exhausted,
}

/// Assign a start and a goal to each of `num_agents` agents.
///
/// Explicit `pairs` (padded coordinates) are honored first and
/// validated against the structural invariants: an explicit entity on
/// an obstacle or a position claimed twice is a fatal error, not a
/// retry. Remaining agents draw their cells uniformly without
/// replacement from a single pool of passable cells — starts first,
/// then goals — so every randomly placed entity occupies its own cell
/// and an attempt is exhausted when fewer than two free cells per
/// unassigned agent remain.
pub(crate) fn place(
    grid: &BitGrid,
    num_agents: usize,
    pairs: &[(Point, Point)],
    rng: &mut ChaCha8Rng,
) -> Result<PlaceOutcome, GenError> {
    debug_assert!(
        pairs.is_empty() || pairs.len() == num_agents,
        "explicit pairs must cover all agents or none"
    );

    let mut starts = Vec::with_capacity(num_agents);
    let mut goals = Vec::with_capacity(num_agents);
    let mut used_starts: HashSet<Point> = HashSet::new();
    let mut used_goals: HashSet<Point> = HashSet::new();

    for (agent, &(start, goal)) in pairs.iter().enumerate() {
        if grid.is_obstacle(start) {
            return Err(GenError::BlockedEntity {
                agent,
                kind: EntityKind::Start,
                point: start,
            });
        }
        if grid.is_obstacle(goal) {
            return Err(GenError::BlockedEntity {
                agent,
                kind: EntityKind::Goal,
                point: goal,
            });
        }
        if !used_starts.insert(start) {
            return Err(GenError::DuplicateEntity {
                agent,
                kind: EntityKind::Start,
                point: start,
            });
        }
        if !used_goals.insert(goal) {
            return Err(GenError::DuplicateEntity {
                agent,
                kind: EntityKind::Goal,
                point: goal,
            });
        }
        starts.push(start);
        goals.push(goal);
    }

    let remaining = num_agents - starts.len();
    if remaining > 0 {
        let mut pool: Vec<Point> = grid
            .free_cells()
            .into_iter()
            .filter(|p| !used_starts.contains(p) && !used_goals.contains(p))
            .collect();
        if pool.len() < 2 * remaining {
            return Ok(PlaceOutcome::Exhausted);
        }
        for _ in 0..remaining {
            let i = rng.random_range(0..pool.len());
            starts.push(pool.swap_remove(i));
        }
        for _ in 0..remaining {
            let i = rng.random_range(0..pool.len());
            goals.push(pool.swap_remove(i));
        }
    }

    Ok(PlaceOutcome::Placed { starts, goals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn open_grid(n: usize) -> BitGrid {
        BitGrid::new(n, n)
    }

    #[test]
    fn places_unique_starts_and_goals() {
        let grid = open_grid(4);
        let outcome = place(&grid, 5, &[], &mut rng(3)).unwrap();
        let PlaceOutcome::Placed { starts, goals } = outcome else {
            panic!("placement should succeed on an open 4x4 grid");
        };
        assert_eq!(starts.len(), 5);
        assert_eq!(goals.len(), 5);
        // All ten drawn cells are distinct.
        let cells: HashSet<_> = starts.iter().chain(&goals).collect();
        assert_eq!(cells.len(), 10);
        for &p in starts.iter().chain(&goals) {
            assert!(!grid.is_obstacle(p));
        }
    }

    #[test]
    fn fills_a_grid_exactly() {
        // 9 free cells host at most 4 agents (2 cells each).
        let grid = open_grid(3);
        let outcome = place(&grid, 4, &[], &mut rng(0)).unwrap();
        assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
    }

    #[test]
    fn exhausts_when_cells_run_out() {
        let grid = open_grid(3);
        let outcome = place(&grid, 5, &[], &mut rng(0)).unwrap();
        assert!(matches!(outcome, PlaceOutcome::Exhausted));

        let mut blocked = open_grid(2);
        blocked.set_obstacle(Point::new(0, 0));
        // 3 free cells, 2 agents need 4.
        let outcome = place(&blocked, 2, &[], &mut rng(0)).unwrap();
        assert!(matches!(outcome, PlaceOutcome::Exhausted));
    }

    #[test]
    fn explicit_pairs_are_honored() {
        let grid = open_grid(3);
        let pairs = [(Point::new(0, 0), Point::new(2, 2))];
        let outcome = place(&grid, 1, &pairs, &mut rng(0)).unwrap();
        let PlaceOutcome::Placed { starts, goals } = outcome else {
            panic!("explicit placement should succeed");
        };
        assert_eq!(starts, vec![Point::new(0, 0)]);
        assert_eq!(goals, vec![Point::new(2, 2)]);
    }

    #[test]
    fn explicit_start_on_obstacle_is_fatal() {
        let mut grid = open_grid(3);
        grid.set_obstacle(Point::new(0, 0));
        let pairs = [(Point::new(0, 0), Point::new(2, 2))];
        let err = place(&grid, 1, &pairs, &mut rng(0)).unwrap_err();
        assert_eq!(
            err,
            GenError::BlockedEntity {
                agent: 0,
                kind: EntityKind::Start,
                point: Point::new(0, 0)
            }
        );
    }

    #[test]
    fn duplicate_explicit_goal_is_fatal() {
        let grid = open_grid(3);
        let pairs = [
            (Point::new(0, 0), Point::new(2, 2)),
            (Point::new(1, 1), Point::new(2, 2)),
        ];
        let err = place(&grid, 2, &pairs, &mut rng(0)).unwrap_err();
        assert_eq!(
            err,
            GenError::DuplicateEntity {
                agent: 1,
                kind: EntityKind::Goal,
                point: Point::new(2, 2)
            }
        );
    }

    #[test]
    fn explicit_start_and_goal_of_one_agent_may_coincide() {
        // The grammar cannot produce this, but placement does not
        // forbid it: the duplicate checks are per-list.
        let grid = open_grid(3);
        let pairs = [(Point::new(1, 1), Point::new(1, 1))];
        let outcome = place(&grid, 1, &pairs, &mut rng(0)).unwrap();
        assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
    }

    #[test]
    fn same_seed_draws_same_cells() {
        let grid = open_grid(6);
        let a = place(&grid, 4, &[], &mut rng(9)).unwrap();
        let b = place(&grid, 4, &[], &mut rng(9)).unwrap();
        let (PlaceOutcome::Placed { starts: sa, goals: ga }, PlaceOutcome::Placed { starts: sb, goals: gb }) = (a, b)
        else {
            panic!("both placements should succeed");
        };
        assert_eq!(sa, sb);
        assert_eq!(ga, gb);
    }
}
