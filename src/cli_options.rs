/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Build the daily puzzle and save its solution:
//!
//! ```text
//! $ gridlink generate 2024-01-01 --solution solution.json
//! {
//!   "id": "puzzle-2024-01-01",
//!   "size": 5,
//!   "anchors": [
//!     {
//!       "row": 2,
//!       "col": 0,
//!       "number": 1
//!     },
//!     ...
//!   ],
//!   "date": "2024-01-01",
//!   "difficulty": "easy"
//! }
//! ```
//!
//! Verify a player's path:
//!
//! ```text
//! $ gridlink generate 2024-01-01 -o puzzle.json
//! $ gridlink validate --puzzle puzzle.json --path solution.json
//! {"valid":true}
//! ```
//!
//! Generate a thousand hard puzzles and print some statistics:
//!
//! ```text
//! $ gridlink stats -c 1000 -f hard
//! ```

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use std::error::Error;
use std::path::PathBuf;

use gridlink::config::{COPYRIGHT_NOTICE, PKGNAME, VERSION};
use gridlink::generator::puzzles::{self, Difficulty, GeneratedPuzzle, Puzzle};
use gridlink::generator::seeder;
use gridlink::saver::path::SaverPath;
use gridlink::saver::puzzle::SaverPuzzle;
use gridlink::{Cell, ValidationResult};

/// Build and verify grid path puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build the puzzle for a seed string and print it in JSON format
    Generate {
        /// Seed string (a YYYY-MM-DD date for daily puzzles)
        seed: String,

        /// Difficulty level for the puzzle
        #[arg(value_enum, short = 'f', long)]
        difficulty: Option<Difficulty>,

        /// Also save the puzzle to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save the solution path to this file
        #[arg(short, long)]
        solution: Option<PathBuf>,
    },

    /// Print the difficulty level and grid size of a day
    Daily {
        /// Date in the YYYY-MM-DD format (today by default)
        date: Option<String>,
    },

    /// Verify a path against a puzzle
    Validate {
        /// Puzzle file
        #[arg(short, long)]
        puzzle: PathBuf,

        /// Path file (a list of cells)
        #[arg(short = 'P', long)]
        path: PathBuf,
    },

    /// Generate puzzles and print some statistics
    Stats {
        /// Number of puzzles to generate
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Difficulty level for the puzzles
        #[arg(value_enum, short = 'f', long)]
        difficulty: Option<Difficulty>,

        /// Prefix of the seed strings (seeds are <prefix>-0, <prefix>-1, ...)
        #[arg(short, long, default_value = "seed")]
        prefix: String,
    },
}

/// Parse and process command-line options, and return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
    debug!("{PKGNAME} {VERSION}");

    let ret: Result<u8, Box<dyn Error>> = match args.command {
        Command::Generate {
            seed,
            difficulty,
            output,
            solution,
        } => generate(&seed, difficulty, output, solution),
        Command::Daily { date } => daily(date),
        Command::Validate { puzzle, path } => validate(puzzle, path),
        Command::Stats {
            count,
            difficulty,
            prefix,
        } => stats(count, difficulty, &prefix),
    };

    match ret {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    }
}

/// Build a puzzle and print it.
fn generate(
    seed: &str,
    difficulty: Option<Difficulty>,
    output: Option<PathBuf>,
    solution: Option<PathBuf>,
) -> Result<u8, Box<dyn Error>> {
    let generated: GeneratedPuzzle = puzzles::generate(seed, difficulty);
    println!("{}", serde_json::to_string_pretty(&generated.puzzle)?);

    if let Some(file) = output {
        SaverPuzzle::new(file).save_puzzle(&generated.puzzle)?;
    }
    if let Some(file) = solution {
        SaverPath::new(file).save_path(generated.solution.get())?;
    }
    Ok(0)
}

/// Print the difficulty level of the day.
fn daily(date: Option<String>) -> Result<u8, Box<dyn Error>> {
    let date: String =
        date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let level: seeder::DailyLevel = seeder::difficulty_for_date(&date);
    let out = serde_json::json!({
        "date": date,
        "difficulty": level.difficulty,
        "size": level.size,
    });
    println!("{out}");
    Ok(0)
}

/// Verify a path file against a puzzle file. Return 0 if the path solves the puzzle.
fn validate(puzzle_file: PathBuf, path_file: PathBuf) -> Result<u8, Box<dyn Error>> {
    let puzzle: Puzzle = SaverPuzzle::new(puzzle_file.clone())
        .get_puzzle()?
        .ok_or_else(|| format!("No such puzzle file: {}", puzzle_file.display()))?;
    let path: Vec<Cell> = SaverPath::new(path_file.clone())
        .get_path()?
        .ok_or_else(|| format!("No such path file: {}", path_file.display()))?;

    let result: ValidationResult = puzzle.validate(&path);
    println!("{}", serde_json::to_string(&result)?);
    Ok(if result.valid { 0 } else { 1 })
}

/// Generate puzzles and print timing statistics.
fn stats(
    count: usize,
    difficulty: Option<Difficulty>,
    prefix: &str,
) -> Result<u8, Box<dyn Error>> {
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut extended: usize = 0;
    let mut fallbacks: usize = 0;
    let mut invalid: usize = 0;

    for i in 0..count {
        let seed: String = format!("{prefix}-{i}");
        debug!("Iteration {i}: {seed}");
        let generated: GeneratedPuzzle = puzzles::generate(&seed, difficulty);

        total += generated.report.duration;
        if generated.report.duration > max {
            max = generated.report.duration;
        }
        attempts += generated.report.attempts;
        if generated.report.extended {
            extended += 1;
        }
        if generated.report.fallback {
            fallbacks += 1;
        }

        // The solution must always solve its own puzzle
        let result: ValidationResult = generated.puzzle.validate(generated.solution.get());
        if !result.valid {
            eprintln!("Bug: invalid solution for {seed}: {:?}", result.error);
            invalid += 1;
        }
    }

    let n: f32 = count.max(1) as f32;
    println!(
        "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
   extended search = {}
         fallbacks = {}
 invalid solutions = {}",
        total,
        total / n,
        max,
        attempts as f32 / n,
        extended,
        fallbacks,
        invalid
    );
    Ok(if invalid == 0 { 0 } else { 1 })
}
