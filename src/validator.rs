/*
validator.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridlink.

Gridlink is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridlink is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridlink. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Verify a player's path against a puzzle.
//!
//! A path solves a puzzle when it visits every cell of the grid exactly once, moves from a cell
//! to a side neighbour at each step, and goes through the anchors in increasing number order.
//!
//! The checks run in a fixed order and stop at the first failure:
//!
//! 1. the path length is the number of cells in the grid
//! 2. all the cells are inside the grid
//! 3. no cell is visited twice
//! 4. consecutive cells are side neighbours
//! 5. the anchors are reached in order

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::generator::cell::{Anchor, Cell};

/// Reason why a path does not solve a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path does not have one entry per grid cell.
    CoverageMismatch { expected: usize, actual: usize },

    /// The cell is outside the grid.
    OutOfBounds(Cell),

    /// The cell appears more than once in the path.
    DuplicateVisit(Cell),

    /// The two consecutive cells are not side neighbours.
    NonAdjacentMove(Cell, Cell),

    /// The path does not reach all the anchors in order.
    /// `matched` anchors were reached before the path ended.
    AnchorsOutOfOrder { matched: usize, expected: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::CoverageMismatch { expected, actual } => write!(
                f,
                "Path must visit all {expected} cells exactly once, but it has {actual} cells"
            ),
            PathError::OutOfBounds(c) => write!(f, "Cell {c} is outside the grid"),
            PathError::DuplicateVisit(c) => write!(f, "Cell {c} is visited more than once"),
            PathError::NonAdjacentMove(c1, c2) => {
                write!(f, "Cells {c1} and {c2} are not adjacent")
            }
            PathError::AnchorsOutOfOrder { matched, expected } => write!(
                f,
                "Numbers must be connected in order: only {matched} of {expected} numbers were reached in sequence"
            ),
        }
    }
}

impl Error for PathError {}

/// Result of the verification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the path solves the puzzle.
    pub valid: bool,

    /// Why the path does not solve the puzzle.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl From<Result<(), PathError>> for ValidationResult {
    fn from(res: Result<(), PathError>) -> Self {
        match res {
            Ok(()) => Self {
                valid: true,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Verify the path against the anchors of a `size` x `size` grid.
pub fn validate(path: &[Cell], anchors: &[Anchor], size: usize) -> ValidationResult {
    let res: Result<(), PathError> = check_path(path, anchors, size);
    if let Err(e) = &res {
        debug!("Invalid path: {e}");
    }
    res.into()
}

/// Verify the path against the anchors of a `size` x `size` grid.
///
/// # Errors
///
/// The function returns the first rule that the path breaks.
pub fn check_path(path: &[Cell], anchors: &[Anchor], size: usize) -> Result<(), PathError> {
    let num_cells: usize = size.saturating_mul(size);
    if path.len() != num_cells {
        return Err(PathError::CoverageMismatch {
            expected: num_cells,
            actual: path.len(),
        });
    }

    if let Some(c) = path.iter().find(|c| !c.in_bounds(size)) {
        return Err(PathError::OutOfBounds(*c));
    }

    let mut visited: HashSet<Cell> = HashSet::with_capacity(num_cells);
    for c in path {
        if !visited.insert(*c) {
            return Err(PathError::DuplicateVisit(*c));
        }
    }

    if let Some(w) = path.windows(2).find(|w| !w[0].is_adjacent(&w[1])) {
        return Err(PathError::NonAdjacentMove(w[0], w[1]));
    }

    let mut sorted: Vec<&Anchor> = anchors.iter().collect();
    sorted.sort_by_key(|a| a.number);
    let mut matched: usize = 0;
    for c in path {
        if matched < sorted.len() && sorted[matched].cell() == *c {
            matched += 1;
        }
    }
    if matched != sorted.len() {
        return Err(PathError::AnchorsOutOfOrder {
            matched,
            expected: sorted.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_path::snake_path;

    fn snake(size: usize) -> Vec<Cell> {
        snake_path(size).into_cells()
    }

    fn end_anchors(path: &[Cell]) -> Vec<Anchor> {
        vec![
            Anchor::new(path[0], 1),
            Anchor::new(path[path.len() - 1], 2),
        ]
    }

    #[test]
    fn snake_is_valid() {
        let path = snake(5);
        let anchors = end_anchors(&path);
        assert_eq!(path[9], Cell::new(1, 0));
        let res = validate(&path, &anchors, 5);
        assert_eq!(
            res,
            ValidationResult {
                valid: true,
                error: None
            }
        );
    }

    #[test]
    fn missing_cell() {
        let mut path = snake(5);
        path.pop();
        let anchors = vec![Anchor::new(path[0], 1), Anchor::new(path[23], 2)];
        assert_eq!(
            check_path(&path, &anchors, 5),
            Err(PathError::CoverageMismatch {
                expected: 25,
                actual: 24
            })
        );
        let res = validate(&path, &anchors, 5);
        assert!(!res.valid);
        let reason = res.error.unwrap();
        assert!(reason.contains("25") && reason.contains("24"), "{reason}");
    }

    #[test]
    fn out_of_bounds() {
        let mut path = snake(3);
        let anchors = end_anchors(&path);
        path[4] = Cell::new(-1, 1);
        assert_eq!(
            check_path(&path, &anchors, 3),
            Err(PathError::OutOfBounds(Cell::new(-1, 1)))
        );
        path[4] = Cell::new(1, 3);
        assert_eq!(
            check_path(&path, &anchors, 3),
            Err(PathError::OutOfBounds(Cell::new(1, 3)))
        );
    }

    #[test]
    fn duplicate_cell() {
        let mut path = snake(3);
        let anchors = end_anchors(&path);
        path[8] = path[7];
        assert_eq!(
            check_path(&path, &anchors, 3),
            Err(PathError::DuplicateVisit(path[7]))
        );
    }

    #[test]
    fn diagonal_step() {
        // (1, 0) -> (2, 1) is a diagonal move
        let path = vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(1, 1),
            Cell::new(1, 0),
            Cell::new(2, 1),
            Cell::new(2, 0),
            Cell::new(2, 2),
        ];
        let anchors = end_anchors(&path);
        assert_eq!(
            check_path(&path, &anchors, 3),
            Err(PathError::NonAdjacentMove(Cell::new(1, 0), Cell::new(2, 1)))
        );
        let reason = validate(&path, &anchors, 3).error.unwrap();
        assert!(reason.contains("(1, 0)") && reason.contains("(2, 1)"));
    }

    #[test]
    fn anchors_in_wrong_order() {
        let path = snake(5);
        let reversed: Vec<Cell> = path.iter().rev().copied().collect();
        let anchors = end_anchors(&path);
        assert_eq!(
            check_path(&reversed, &anchors, 5),
            Err(PathError::AnchorsOutOfOrder {
                matched: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn anchors_sorted_by_number() {
        let path = snake(4);
        let anchors = vec![
            Anchor::new(path[15], 3),
            Anchor::new(path[0], 1),
            Anchor::new(path[7], 2),
        ];
        assert!(validate(&path, &anchors, 4).valid);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(validate(&[], &[], 0).valid);
        assert!(!validate(&[Cell::new(0, 0)], &[], 0).valid);
        assert!(validate(&snake(3), &[], 3).valid);
        let single = [Cell::new(0, 0)];
        assert!(validate(&single, &[Anchor::new(single[0], 1)], 1).valid);
        // One cell can only match one anchor
        assert_eq!(
            check_path(&single, &end_anchors(&single), 1),
            Err(PathError::AnchorsOutOfOrder {
                matched: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn json_result() {
        let ok = ValidationResult::from(Ok(()));
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"valid":true}"#);
        let err = ValidationResult::from(Err(PathError::DuplicateVisit(Cell::new(2, 3))));
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"valid":false,"error":"Cell (2, 3) is visited more than once"}"#
        );
    }
}
