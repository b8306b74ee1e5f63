/*
cell.rs

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

//! Grid cells and numbered anchors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the grid, identified by its row and column (both start at 0).
///
/// Coordinates are signed so that a candidate path received from a player can carry out of grid
/// values, which the validator then reports.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row, from the top.
    pub row: i32,

    /// Column, from the left.
    pub col: i32,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the cell is inside a `size` x `size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        let size: i64 = i64::try_from(size).unwrap_or(i64::MAX);
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }

    /// Whether the two cells share a side.
    ///
    /// Diagonal cells are not adjacent, and a cell is not adjacent to itself.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        let dr: i64 = (self.row as i64 - other.row as i64).abs();
        let dc: i64 = (self.col as i64 - other.col as i64).abs();
        dr + dc == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A numbered checkpoint that the solution path must go through.
///
/// Anchors are numbered from 1, in the order the path visits them.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Row of the anchor cell.
    pub row: i32,

    /// Column of the anchor cell.
    pub col: i32,

    /// Anchor number, displayed in the cell.
    pub number: usize,
}

impl Anchor {
    /// Create an [`Anchor`] object.
    pub fn new(cell: Cell, number: usize) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
            number,
        }
    }

    /// Return the cell of the anchor.
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Cell::new(0, 0).in_bounds(5));
        assert!(Cell::new(4, 4).in_bounds(5));
        assert!(!Cell::new(5, 0).in_bounds(5));
        assert!(!Cell::new(0, -1).in_bounds(5));
        assert!(!Cell::new(0, 0).in_bounds(0));
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(2, 2);
        assert!(c.is_adjacent(&Cell::new(1, 2)));
        assert!(c.is_adjacent(&Cell::new(2, 3)));
        assert!(!c.is_adjacent(&Cell::new(3, 3)));
        assert!(!c.is_adjacent(&Cell::new(2, 4)));
        assert!(!c.is_adjacent(&c));
        assert!(!Cell::new(i32::MIN, 0).is_adjacent(&Cell::new(i32::MAX, 0)));
    }

    #[test]
    fn json_shapes() {
        let cell: Cell = serde_json::from_str(r#"{"row": 1, "col": 3}"#).unwrap();
        assert_eq!(cell, Cell::new(1, 3));

        let anchor = Anchor::new(Cell::new(4, 0), 6);
        let json: serde_json::Value = serde_json::to_value(anchor).unwrap();
        assert_eq!(json, serde_json::json!({"row": 4, "col": 0, "number": 6}));
        assert_eq!(anchor.cell(), Cell::new(4, 0));
    }
}
