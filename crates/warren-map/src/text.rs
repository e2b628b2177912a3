//! Textual map grammar parsing.
//!
//! Symbol table: `.` free cell, `#` permanent obstacle, a lowercase
//! letter `a`..`z` marks the goal of the agent indexed by that letter's
//! alphabet position, the matching uppercase letter marks the same
//! agent's start. Marker cells are themselves free. Leading/trailing
//! blank lines and common indentation are stripped before row lengths
//! are checked, so indented multi-line literals parse as written.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use warren_core::{BitGrid, Point};

use crate::error::MapError;

/// A parsed textual map: the unpadded layout plus any explicit
/// `(start, goal)` pair per agent, in agent-index order.
#[derive(Debug)]
pub(crate) struct ParsedText {
    pub grid: BitGrid,
    pub pairs: Vec<(Point, Point)>,
}

/// Strip leading/trailing blank lines and common leading whitespace,
/// then trim trailing whitespace per line.
fn trim_lines(input: &str) -> Vec<String> {
    let lines: Vec<&str> = input.lines().collect();
    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return Vec::new();
    };
    let last = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(first);
    let lines = &lines[first..=last];

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            l.char_indices()
                .nth(indent)
                .map(|(i, _)| &l[i..])
                .unwrap_or("")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Parse a multi-line textual map.
pub(crate) fn parse_text(input: &str) -> Result<ParsedText, MapError> {
    let rows = trim_lines(input);
    if rows.is_empty() || rows[0].is_empty() {
        return Err(MapError::EmptyMap);
    }
    let cols = rows[0].chars().count();

    let mut grid = BitGrid::new(rows.len(), cols);
    // Keyed by lowercase letter; insertion order is first occurrence,
    // which keeps error reporting deterministic.
    let mut starts: IndexMap<char, Point> = IndexMap::new();
    let mut goals: IndexMap<char, Point> = IndexMap::new();

    for (r, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != cols {
            return Err(MapError::RaggedRow {
                row: r,
                expected: cols,
                got: len,
            });
        }
        for (c, symbol) in row.chars().enumerate() {
            let point = Point::new(r as i32, c as i32);
            match symbol {
                '.' => {}
                '#' => grid.set_obstacle(point),
                'a'..='z' => {
                    if goals.insert(symbol, point).is_some() {
                        return Err(MapError::DuplicateMarker {
                            symbol,
                            row: r,
                            col: c,
                        });
                    }
                }
                'A'..='Z' => {
                    if starts.insert(symbol.to_ascii_lowercase(), point).is_some() {
                        return Err(MapError::DuplicateMarker {
                            symbol,
                            row: r,
                            col: c,
                        });
                    }
                }
                _ => {
                    return Err(MapError::UnknownSymbol {
                        row: r,
                        col: c,
                        symbol,
                    })
                }
            }
        }
    }

    let letters: BTreeSet<char> = starts.keys().chain(goals.keys()).copied().collect();
    let agents = letters.len();

    for &letter in &letters {
        let index = letter as usize - 'a' as usize;
        if index >= agents {
            // Letters must be contiguous from 'a'; report wherever the
            // out-of-range marker was seen.
            let (symbol, point) = match goals.get(&letter) {
                Some(&p) => (letter, p),
                None => (letter.to_ascii_uppercase(), starts[&letter]),
            };
            return Err(MapError::MarkerOutOfRange {
                symbol,
                row: point.x as usize,
                col: point.y as usize,
                agents,
            });
        }
        if !starts.contains_key(&letter) {
            return Err(MapError::UnmatchedMarker {
                found: letter,
                missing: letter.to_ascii_uppercase(),
            });
        }
        if !goals.contains_key(&letter) {
            return Err(MapError::UnmatchedMarker {
                found: letter.to_ascii_uppercase(),
                missing: letter,
            });
        }
    }

    let pairs = letters
        .iter()
        .map(|letter| (starts[letter], goals[letter]))
        .collect();

    Ok(ParsedText { grid, pairs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_blank_lines_and_indentation() {
        let parsed = parse_text(
            "
            ..#
            .#.
            #..
        ",
        )
        .unwrap();
        assert_eq!(parsed.grid.rows(), 3);
        assert_eq!(parsed.grid.cols(), 3);
        assert_eq!(parsed.grid.obstacle_count(), 3);
        assert!(parsed.grid.is_obstacle(Point::new(0, 2)));
        assert!(parsed.pairs.is_empty());
    }

    #[test]
    fn single_row_map() {
        let parsed = parse_text(".....#....").unwrap();
        assert_eq!(parsed.grid.rows(), 1);
        assert_eq!(parsed.grid.cols(), 10);
        assert_eq!(parsed.grid.obstacle_count(), 1);
    }

    #[test]
    fn markers_become_pairs_in_agent_order() {
        let parsed = parse_text(
            "
            .a.B
            .b.A
        ",
        )
        .unwrap();
        assert_eq!(parsed.pairs.len(), 2);
        // Agent 0: start 'A', goal 'a'. Agent 1: start 'B', goal 'b'.
        assert_eq!(parsed.pairs[0], (Point::new(1, 3), Point::new(0, 1)));
        assert_eq!(parsed.pairs[1], (Point::new(0, 3), Point::new(1, 1)));
        // Marker cells are free.
        assert_eq!(parsed.grid.obstacle_count(), 0);
    }

    #[test]
    fn rejects_unknown_symbol() {
        let err = parse_text(".?.").unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownSymbol {
                row: 0,
                col: 1,
                symbol: '?'
            }
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_text("...\n..").unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_duplicate_marker() {
        let err = parse_text("aA..a").unwrap_err();
        assert_eq!(
            err,
            MapError::DuplicateMarker {
                symbol: 'a',
                row: 0,
                col: 4
            }
        );
    }

    #[test]
    fn rejects_start_without_goal() {
        let err = parse_text(".A.").unwrap_err();
        assert_eq!(
            err,
            MapError::UnmatchedMarker {
                found: 'A',
                missing: 'a'
            }
        );
    }

    #[test]
    fn rejects_goal_without_start() {
        let err = parse_text(".a.").unwrap_err();
        assert_eq!(
            err,
            MapError::UnmatchedMarker {
                found: 'a',
                missing: 'A'
            }
        );
    }

    #[test]
    fn rejects_non_contiguous_letters() {
        let err = parse_text("bB").unwrap_err();
        assert!(matches!(err, MapError::MarkerOutOfRange { agents: 1, .. }));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(parse_text("").unwrap_err(), MapError::EmptyMap);
        assert_eq!(parse_text("  \n \n").unwrap_err(), MapError::EmptyMap);
    }
}
