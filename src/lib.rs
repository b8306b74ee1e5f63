/*
lib.rs

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

//! Grid path puzzles: connect the numbers in order while visiting every cell exactly once.
//!
//! The crate builds puzzles from seed strings and verifies the players' paths.
//! Puzzle generation is deterministic: the same seed string always gives the same puzzle, and
//! all the functions are free of shared state, so they can be called from any thread.
//!
//! ```
//! use gridlink::{Difficulty, build_puzzle, validate};
//!
//! let puzzle = build_puzzle("2024-01-01", None);
//! assert_eq!(puzzle.difficulty, Difficulty::Easy);
//!
//! let result = validate(&[], &puzzle.anchors, puzzle.size);
//! assert!(!result.valid);
//! ```

pub mod config;
pub mod generator;
pub mod saver;
pub mod validator;

pub use generator::cell::{Anchor, Cell};
pub use generator::puzzles::{
    Difficulty, GeneratedPuzzle, GenerationReport, Puzzle, build_puzzle, generate,
};
pub use generator::seeder::{DailyLevel, difficulty_for_date};
pub use validator::{PathError, ValidationResult, validate};
