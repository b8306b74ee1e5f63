/*
seeder.rs

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

//! Turn seed strings into reproducible random streams.
//!
//! A puzzle is entirely derived from its seed string: the string is hashed with [`hash`], and the
//! hash seeds a [`SeededRandom`] stream that drives every random decision of the generator.
//! The same seed string therefore always gives the same puzzle, on every platform.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::RngCore;
use rand::rand_core::impls;

use super::puzzles::Difficulty;

/// Compute a non-negative 32-bit hash of the seed string.
///
/// Every character of the string contributes to the hash (`h = h * 31 + c`), so seed strings that
/// differ by a single character almost always produce different hashes.
///
/// `c` is the Unicode scalar value of each [`char`], not a UTF-16 code unit. For ASCII seeds, such
/// as dates and room names, the result is the same as the common `h * 31 + charCodeAt(i)` string
/// hash. Seeds with characters outside the Basic Multilingual Plane hash differently, so puzzles
/// built from such seeds are not expected to match the ones of a UTF-16 based implementation.
pub fn hash(seed: &str) -> u32 {
    let mut h: i32 = 0;
    for c in seed.chars() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(c as u32 as i32);
    }
    h.unsigned_abs()
}

/// Deterministic pseudo-random stream (Mulberry32).
///
/// Two streams created with the same seed produce the same sequence of values.
/// The object also implements [`rand::RngCore`], so it can be given to the `rand` helpers such as
/// [`rand::seq::SliceRandom::shuffle`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    /// Internal state, advanced on every draw.
    state: u32,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a [`SeededRandom`] object from the hash of the given seed string.
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash(seed))
    }

    /// Return the next float in the `[0, 1)` range.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Return a random index in the `[0, len)` range, or 0 if `len` is 0.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // next_f64() < 1, but guard against rounding on very large lengths
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t: u32 = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

/// Difficulty level and grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyLevel {
    /// Difficulty level of the day.
    pub difficulty: Difficulty,

    /// Number of rows (and columns) of the grid.
    pub size: usize,
}

/// Return the difficulty level and grid size for the given `YYYY-MM-DD` date.
///
/// Early week days are easy, the middle of the week is medium, and weekends are hard.
/// A string that is not a valid date gives the easy level.
pub fn difficulty_for_date(date: &str) -> DailyLevel {
    let difficulty: Difficulty = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => match d.weekday() {
            Weekday::Mon | Weekday::Tue => Difficulty::Easy,
            Weekday::Wed | Weekday::Thu | Weekday::Fri => Difficulty::Medium,
            Weekday::Sat | Weekday::Sun => Difficulty::Hard,
        },
        Err(_) => Difficulty::Easy,
    };
    DailyLevel {
        difficulty,
        size: difficulty.size(),
    }
}
