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

//! Save and restore a player's path.
//!
//! The file holds a JSON list of `{row, col}` cells, in the order the player visited them.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::cell::Cell;

/// Object to save and restore a path.
pub struct SaverPath {
    /// Path to the file.
    save_file: PathBuf,
}

impl SaverPath {
    /// Create a [`SaverPath`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Path file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the list of cells from the file.
    ///
    /// Return None if the file does not exist.
    pub fn get_path(&self) -> Result<Option<Vec<Cell>>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let cells: Vec<Cell> = serde_json::from_reader(reader)?;
        Ok(Some(cells))
    }

    /// Save the provided list of cells.
    pub fn save_path(&self, cells: &[Cell]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, cells)?;
        writer.flush()?;
        Ok(())
    }
}
