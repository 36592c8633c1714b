/**
 * RatingsMatrix
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate getopts;
extern crate ratingsmatrix;

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use getopts::Options;

use ratingsmatrix::{io, utils, MatrixError, ParsePolicy};
use ratingsmatrix::stats::{self, Summary};

const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Input file name (required). The input is a ratings log with \
        a header line, followed by a user, movie, rating and timestamp per line.", "PATH");
    opts.optopt("r", "ratings-output", "Output file for the ratings matrix (optional, defaults \
        to <input>_ratingsMatrix.csv next to the input).", "PATH");
    opts.optopt("b", "rated-output", "Output file for the rated matrix (optional, defaults \
        to <input>_ratedMatrix.csv next to the input).", "PATH");
    opts.optopt("d", "delimiter", "Field delimiter of the input (optional, defaults to ',').",
        "CHAR");
    opts.optflag("s", "strict", "Fail on non-numeric fields instead of reading them as zero.");
    opts.optopt("j", "summary", "Write a JSON summary of the run to PATH ('-' for stdout).",
        "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    let ratings_log_path = match matches.opt_str("i") {
        Some(path) => path,
        None => return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify an inputfile via --inputfile."),
        ),
    };

    let delimiter = match matches.opt_str("d") {
        None => b',',
        Some(ref delimiter) if delimiter == "\\t" => b'\t',
        Some(ref delimiter) if delimiter.len() == 1 => delimiter.as_bytes()[0],
        Some(_) => return print_usage_and_exit(
            &program,
            opts,
            Some("Problem with option 'd': the delimiter must be a single byte."),
        ),
    };

    let policy = if matches.opt_present("s") { ParsePolicy::Strict } else { ParsePolicy::Lenient };

    let (default_ratings_path, default_rated_path) =
        utils::default_output_paths(&ratings_log_path);

    let ratings_path = matches.opt_str("r").map(PathBuf::from).unwrap_or(default_ratings_path);
    let rated_path = matches.opt_str("b").map(PathBuf::from).unwrap_or(default_rated_path);
    let summary_path = matches.opt_str("j");

    let outcome = build_matrices(
        &ratings_log_path,
        delimiter,
        policy,
        &ratings_path,
        &rated_path,
        summary_path,
    );

    if let Err(failure) = outcome {
        eprintln!("Error: {}", failure);
        process::exit(EXIT_FAILURE);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    let brief = format!("Usage: {} [options]", program);

    match hint {
        Some(hint) => {
            eprintln!("\n{}\n", hint);
            eprint!("{}", opts.usage(&brief));
            process::exit(EXIT_USAGE);
        },
        None => print!("{}", opts.usage(&brief)),
    }
}

fn build_matrices(
    ratings_log_path: &str,
    delimiter: u8,
    policy: ParsePolicy,
    ratings_path: &Path,
    rated_path: &Path,
    summary_path: Option<String>,
) -> Result<(), MatrixError> {

    let start = Instant::now();

    println!("Reading ratings from {}", ratings_log_path);

    let mut reader = io::csv_reader(ratings_log_path, delimiter)?;
    let ratings = io::ratings_from_csv(&mut reader, policy)?;

    println!(
        "Read {} ratings, largest user id {}, largest movie id {}.",
        ratings.len(),
        ratings.max_user_id(),
        ratings.max_movie_id(),
    );

    if ratings.is_empty() {
        println!("No ratings found in {}, the matrices will be empty.", ratings_log_path);
    }

    println!("Building {}x{} matrices", ratings.max_movie_id(), ratings.max_user_id());
    let matrices = ratingsmatrix::densify(&ratings)?;

    println!("Writing ratings matrix to {}", ratings_path.display());
    println!("Writing rated matrix to {}", rated_path.display());
    io::write_matrices(&matrices, ratings_path, rated_path)?;

    let summary = Summary::of(&ratings, &matrices);

    if let Some(path) = summary_path {
        let target = if path == "-" { None } else { Some(path.as_str()) };
        stats::write_summary(&summary, target)?;
    }

    println!("{}, {}ms in total", summary, utils::to_millis(start.elapsed()));

    Ok(())
}
