/*
generator.rs

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

//! Generate puzzles.
//!
//! A puzzle is a square grid with a few numbered cells, the anchors.
//! The player must draw a path that visits every cell exactly once, moving to a side neighbour at
//! each step, and that goes through the anchors in increasing order.
//!
//! [`puzzles::generate`] builds a puzzle from a seed string:
//!
//! * [`seeder`] turns the seed string into a reproducible random stream, and selects the
//!   difficulty level for daily puzzles.
//!
//! * A random path over the whole grid is generated by creating a [`random_path::RandomPath`]
//!   object and by using its [`random_path::RandomPath::generate`] method.
//!   If no path is found within the allowed number of attempts, then the method returns an error.
//!   In that case the search is retried with more attempts, and finally
//!   [`random_path::snake_path`] is used.
//!
//! * [`anchors::select_anchors`] places the anchors along that path.
//!
//! Players' paths are verified with [`crate::validator`].

pub mod anchors;
pub mod cell;
pub mod grid;
pub mod path;
pub mod puzzles;
pub mod random_path;
pub mod seeder;
