/*
grid.rs

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

//! Visited status of the grid cells during one path search attempt.
//!
//! A [`Grid`] object is created for each attempt and dropped when the attempt ends, so no state
//! leaks from one attempt to the next.

use super::cell::Cell;

/// Row and column offsets of the four neighbours (up, right, down, left).
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Square grid with a visited flag per cell.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Visited flags, row by row.
    visited: Vec<bool>,

    /// Number of visited cells.
    num_visited: usize,
}

impl Grid {
    /// Create a [`Grid`] object with all the cells unvisited.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            visited: vec![false; size * size],
            num_visited: 0,
        }
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Whether all the cells have been visited.
    pub fn is_complete(&self) -> bool {
        self.num_visited == self.num_cells()
    }

    /// Return the cell at the given position in row order.
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Position of the cell in the [`Grid::visited`] vector. The cell must be in the grid.
    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.size + cell.col as usize
    }

    /// Mark the cell as visited.
    pub fn visit(&mut self, cell: Cell) {
        let i: usize = self.index(cell);
        if !self.visited[i] {
            self.visited[i] = true;
            self.num_visited += 1;
        }
    }

    /// Whether the cell has been visited.
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited[self.index(cell)]
    }

    /// Return the neighbours of the cell that are inside the grid and not visited yet.
    pub fn free_neighbours(&self, cell: Cell) -> Vec<Cell> {
        DIRECTIONS
            .iter()
            .map(|(dr, dc)| Cell::new(cell.row + dr, cell.col + dc))
            .filter(|c| c.in_bounds(self.size) && !self.is_visited(*c))
            .collect()
    }

    /// Number of unvisited neighbours of the cell (its onward options).
    pub fn degree(&self, cell: Cell) -> usize {
        self.free_neighbours(cell).len()
    }
}
