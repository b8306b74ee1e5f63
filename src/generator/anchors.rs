/*
anchors.rs

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

//! Select the numbered anchors along a path.
//!
//! Anchors are spread evenly along the path: the first anchor is always the first cell of the
//! path, the last anchor is always its last cell, and the others are at regular intervals in
//! between.

use log::debug;

use super::cell::{Anchor, Cell};

/// Select `count` anchors along the path and number them from 1 in path order.
///
/// When `count` is 2 or less, the two ends of the path are returned.
///
/// For short paths, two anchors can round to the same path position. In that case the duplicate
/// is dropped, and fewer anchors than requested are returned.
pub fn select_anchors(path: &[Cell], count: usize) -> Vec<Anchor> {
    let (first, last): (Cell, Cell) = match (path.first(), path.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Vec::new(),
    };

    if count <= 2 {
        return vec![Anchor::new(first, 1), Anchor::new(last, 2)];
    }

    let span: f64 = (path.len() - 1) as f64;
    let step: f64 = span / (count - 1) as f64;
    let mut indices: Vec<usize> = (0..count)
        .map(|i| (step * i as f64).round() as usize)
        .collect();
    // The last index must land exactly on the path end, whatever the float rounding
    if let Some(l) = indices.last_mut() {
        *l = path.len() - 1;
    }
    indices.dedup();

    if indices.len() < count {
        debug!(
            "Only {} anchors out of {count} for a path of {} cells",
            indices.len(),
            path.len()
        );
    }

    indices
        .iter()
        .enumerate()
        .map(|(n, i)| Anchor::new(path[*i], n + 1))
        .collect()
}
