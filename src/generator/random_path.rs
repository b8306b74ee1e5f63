/*
random_path.rs

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

//! Generate a random path that visits every cell of the grid.
//!
//! Each attempt starts from a random cell and walks from neighbour to neighbour.
//! At every step the walk prefers the neighbour with the fewest unvisited neighbours of its own
//! (Warnsdorff's rule), which keeps the walk along the edges of the unvisited area and avoids
//! leaving isolated cells behind. Neighbours with the same score are picked at random.
//! An attempt that reaches a cell with no unvisited neighbour is abandoned.

use log::debug;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::cell::Cell;
use super::grid::Grid;
use super::path::Path;
use super::seeder::SeededRandom;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// No path found within the allowed number of attempts.
    NoPath,
}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Number of rows and columns in the grid.
    pub size: usize,

    /// Number of cells in the grid.
    pub num_cells: usize,

    /// Number of attempts it took to generate the last random path.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Time when the path generation started. Used to compute the [`RandomPath::duration`].
    start: Instant,
}

impl RandomPath {
    /// Create the object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            num_cells: size * size,
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a random path.
    ///
    /// All the random decisions are taken from `rng`, so the same stream state always gives the
    /// same result.
    ///
    /// # Errors
    ///
    /// The method returns an error if none of the `max_attempts` attempts visits all the cells.
    /// The method can then be retried with the same `rng`, which has moved on.
    pub fn generate(
        &mut self,
        rng: &mut SeededRandom,
        max_attempts: usize,
    ) -> Result<Path, RandomPathError> {
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        if self.num_cells == 0 {
            return Ok(Path::new(0));
        }

        let mut res: Result<Path, RandomPathError> = Err(RandomPathError::NoPath);
        while self.iteration < max_attempts {
            self.iteration += 1;
            if let Some(path) = self.walk(rng) {
                res = Ok(path);
                break;
            }
        }
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}  Found = {}",
            self.iteration,
            self.duration,
            res.is_ok()
        );
        res
    }

    /// Run one attempt. Return `None` when the walk reaches a dead end.
    fn walk(&self, rng: &mut SeededRandom) -> Option<Path> {
        let mut grid: Grid = Grid::new(self.size);
        let mut path: Path = Path::new(self.num_cells);

        let mut current: Cell = grid.cell_at(rng.index(self.num_cells));
        debug!("Attempt {}: starting cell = {current}", self.iteration);
        grid.visit(current);
        path.push(current);

        while !grid.is_complete() {
            let mut candidates: Vec<Cell> = grid.free_neighbours(current);
            if candidates.is_empty() {
                debug!(
                    "    Back: dead end at {current} after {} cells",
                    path.len()
                );
                return None;
            }

            // Shuffle first: the sort is stable, so equally good moves stay in random order.
            // The degree is computed once per candidate.
            candidates.shuffle(rng);
            candidates.sort_by_cached_key(|c| grid.degree(*c));

            current = candidates[0];
            grid.visit(current);
            path.push(current);
        }
        Some(path)
    }
}

/// Find a path that visits every cell of a `size` x `size` grid exactly once.
///
/// Return `None` if no attempt succeeded.
pub fn find_hamiltonian_path(
    size: usize,
    rng: &mut SeededRandom,
    max_attempts: usize,
) -> Option<Path> {
    RandomPath::new(size).generate(rng, max_attempts).ok()
}

/// Return the row by row path that goes left to right on even rows and right to left on odd rows.
///
/// That path always exists, and is used when the random search gives up.
pub fn snake_path(size: usize) -> Path {
    let mut path: Path = Path::new(size * size);
    for row in 0..size {
        for i in 0..size {
            let col: usize = if row % 2 == 0 { i } else { size - 1 - i };
            path.push(Cell::new(row as i32, col as i32));
        }
    }
    path
}
