/*
puzzles.rs

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

//! Puzzle representation and puzzle builder.
//!
//! A [`Puzzle`] is derived from a seed string only. The builder hashes the seed, selects the
//! difficulty level, generates a random path over the grid, and places the anchors along that
//! path.
//! Building a puzzle twice from the same seed string gives the same puzzle.

use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use strum_macros::FromRepr;

use super::anchors;
use super::cell::{Anchor, Cell};
use super::path::Path;
use super::random_path::{self, RandomPath};
use super::seeder::{self, SeededRandom};
use crate::validator::{self, ValidationResult};

/// Number of attempts for the first path search.
const PRIMARY_ATTEMPTS: usize = 50;

/// Number of attempts for the second path search, when the first one failed.
const EXTENDED_ATTEMPTS: usize = 500;

/// Upper bounds of the easy and medium levels when the level is selected at random.
const TIER_THRESHOLDS: [f64; 2] = [0.4, 0.75];

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty level: {s}")),
        }
    }
}

impl Difficulty {
    /// Number of rows (and columns) of the grid for the difficulty level.
    pub fn size(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 6,
            Difficulty::Hard => 7,
        }
    }

    /// Select the difficulty level from a random float in the `[0, 1)` range.
    pub fn from_random(r: f64) -> Self {
        let tier: usize = TIER_THRESHOLDS.iter().filter(|t| r >= **t).count();
        Difficulty::from_repr(tier as u8).unwrap_or(Difficulty::Hard)
    }
}

/// Puzzle description, as sent to the players.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Puzzle identifier, built from the seed string.
    pub id: String,

    /// Number of rows (and columns) of the grid.
    pub size: usize,

    /// Anchors, numbered from 1.
    pub anchors: Vec<Anchor>,

    /// Seed string the puzzle has been built from (the date for daily puzzles).
    pub date: String,

    /// Difficulty level.
    pub difficulty: Difficulty,
}

impl Puzzle {
    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Verify a player's path against the puzzle.
    pub fn validate(&self, path: &[Cell]) -> ValidationResult {
        validator::validate(path, &self.anchors, self.size)
    }
}

/// How the path of a puzzle has been obtained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    /// Total number of path search attempts.
    pub attempts: usize,

    /// Whether the first search failed and the extended search was run.
    pub extended: bool,

    /// Whether both searches failed and the row by row path was used.
    pub fallback: bool,

    /// Duration in seconds of the whole generation.
    pub duration: f32,
}

/// A puzzle together with the path it has been built from.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The puzzle.
    pub puzzle: Puzzle,

    /// Path the anchors have been selected from. It solves the puzzle.
    pub solution: Path,

    /// Generation details.
    pub report: GenerationReport,
}

/// Number of anchors for the given grid size.
pub fn anchor_count(size: usize) -> usize {
    match size {
        5 => 6,
        6 => 8,
        7 => 10,
        _ => (size as f64 * 1.5).ceil() as usize,
    }
}

/// Whether the string has the `YYYY-MM-DD` format.
fn is_date(seed: &str) -> bool {
    let b: &[u8] = seed.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Build the puzzle for the given seed string.
///
/// See [`generate`].
pub fn build_puzzle(seed: &str, difficulty: Option<Difficulty>) -> Puzzle {
    generate(seed, difficulty).puzzle
}

/// Build the puzzle for the given seed string, and return it with its solution.
///
/// The difficulty level is, in that order, the provided `difficulty`, the level of the day when
/// the seed is a `YYYY-MM-DD` date, or a level selected at random from the seed.
///
/// The function always returns a puzzle: if the random path search fails, a row by row path is
/// used instead.
pub fn generate(seed: &str, difficulty: Option<Difficulty>) -> GeneratedPuzzle {
    generate_with_budgets(seed, difficulty, PRIMARY_ATTEMPTS, EXTENDED_ATTEMPTS)
}

/// Build the puzzle with the given number of attempts for the first and the extended searches.
fn generate_with_budgets(
    seed: &str,
    difficulty: Option<Difficulty>,
    primary: usize,
    extended: usize,
) -> GeneratedPuzzle {
    let start: Instant = Instant::now();
    let mut rng: SeededRandom = SeededRandom::from_seed_str(seed);

    let difficulty: Difficulty = match difficulty {
        Some(d) => d,
        None if is_date(seed) => seeder::difficulty_for_date(seed).difficulty,
        None => Difficulty::from_random(rng.next_f64()),
    };
    let size: usize = difficulty.size();
    debug!("Seed = {seed:?}  Difficulty = {difficulty}  Size = {size}");

    let mut report: GenerationReport = GenerationReport::default();
    let mut random_path: RandomPath = RandomPath::new(size);
    let path: Path = match random_path.generate(&mut rng, primary) {
        Ok(p) => {
            report.attempts = random_path.iteration;
            p
        }
        Err(_) => {
            report.attempts = random_path.iteration;
            report.extended = true;
            warn!("No path for {seed:?} after {primary} attempts, extending the search");
            match random_path.generate(&mut rng, extended) {
                Ok(p) => {
                    report.attempts += random_path.iteration;
                    p
                }
                Err(_) => {
                    report.attempts += random_path.iteration;
                    report.fallback = true;
                    warn!("No path for {seed:?}, using the row by row path");
                    random_path::snake_path(size)
                }
            }
        }
    };

    let anchors: Vec<Anchor> = anchors::select_anchors(path.get(), anchor_count(size));
    report.duration = start.elapsed().as_secs_f32();
    debug!(
        "Puzzle {seed:?}: {} anchors, {} attempts, {}s",
        anchors.len(),
        report.attempts,
        report.duration
    );

    GeneratedPuzzle {
        puzzle: Puzzle {
            id: format!("puzzle-{seed}"),
            size,
            anchors,
            date: seed.to_string(),
            difficulty,
        },
        solution: path,
        report,
    }
}
