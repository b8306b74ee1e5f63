/*
path.rs

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

//! Path over the grid.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Path object.
///
/// The path is serialized as a plain list of cells.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Cell>,
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
        }
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.path.push(cell);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Return the cells of the path, in order.
    pub fn get(&self) -> &[Cell] {
        &self.path
    }

    /// Consume the object and return the list of cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.path
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { path: cells }
    }
}

impl From<Path> for Vec<Cell> {
    fn from(path: Path) -> Self {
        path.into_cells()
    }
}
