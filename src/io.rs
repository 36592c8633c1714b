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

use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::MatrixError;
use crate::types::{ParsePolicy, RatingRecord, Ratings};
use crate::RatingMatrices;

/// Opens a ratings log. We expect a single header line, followed by one
/// `user,movie,rating,timestamp` tuple per line.
pub fn csv_reader(file: &str, delimiter: u8) -> Result<csv::Reader<File>, MatrixError> {
    let input = File::open(file)
        .map_err(|source| MatrixError::InputNotFound { path: file.to_string(), source })?;

    Ok(ratings_reader(input, delimiter))
}

pub fn ratings_reader<R: io::Read>(input: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(input)
}

/// Reads all ratings from the log. Lines with three fields or less are skipped, only the first
/// three fields of the remaining lines are looked at. A trailing delimiter does not open
/// another field, so `1,1,4.0,` counts as three fields.
pub fn ratings_from_csv<R: io::Read>(
    reader: &mut csv::Reader<R>,
    policy: ParsePolicy,
) -> Result<Ratings, MatrixError> {

    let mut ratings = Ratings::new();

    for result in reader.records() {
        let record = result?;

        if num_fields(&record) <= 3 {
            ratings.skip_line();
            continue;
        }

        let line = record.position().map(|position| position.line()).unwrap_or(0);

        let user_id: i64 = parse_field(&record, 0, "user id", line, policy, &mut ratings)?;
        let movie_id: i64 = parse_field(&record, 1, "movie id", line, policy, &mut ratings)?;
        let rating: f64 = parse_field(&record, 2, "rating", line, policy, &mut ratings)?;

        ratings.push(RatingRecord { line, user_id, movie_id, rating });
    }

    Ok(ratings)
}

fn num_fields(record: &StringRecord) -> usize {
    match record.len() {
        0 => 0,
        len if record[len - 1].is_empty() => len - 1,
        len => len,
    }
}

fn parse_field<T: FromStr + Default>(
    record: &StringRecord,
    index: usize,
    field: &'static str,
    line: u64,
    policy: ParsePolicy,
    ratings: &mut Ratings,
) -> Result<T, MatrixError> {

    let value = record[index].trim();

    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => match policy {
            ParsePolicy::Lenient => {
                ratings.coerced_field();
                Ok(T::default())
            },
            ParsePolicy::Strict => Err(MatrixError::ParseFailure {
                line,
                field,
                value: value.to_string(),
            }),
        },
    }
}

fn write_row<W, T, I>(out: &mut W, values: I) -> io::Result<()>
    where W: Write, T: Display, I: Iterator<Item=T> {

    for (index, value) in values.enumerate() {
        if index > 0 {
            out.write_all(b",")?;
        }
        write!(out, "{}", value)?;
    }

    out.write_all(b"\n")
}

/// One line per movie, one comma separated rating per user, zero where no rating exists.
pub fn write_ratings_matrix<W: Write>(matrices: &RatingMatrices, out: &mut W) -> io::Result<()> {
    for movie_index in 0..matrices.num_movies() {
        write_row(out, matrices.ratings_row(movie_index))?;
    }
    Ok(())
}

/// Same layout as the ratings matrix, with a 1 wherever a rating exists.
pub fn write_rated_matrix<W: Write>(matrices: &RatingMatrices, out: &mut W) -> io::Result<()> {
    for movie_index in 0..matrices.num_movies() {
        write_row(out, matrices.rated_row(movie_index))?;
    }
    Ok(())
}

/// Writes the ratings matrix to `ratings_path` and the rated matrix to `rated_path`.
pub fn write_matrices(
    matrices: &RatingMatrices,
    ratings_path: &Path,
    rated_path: &Path,
) -> Result<(), MatrixError> {

    write_to_file(ratings_path, |out| write_ratings_matrix(matrices, out))?;
    write_to_file(rated_path, |out| write_rated_matrix(matrices, out))
}

fn write_to_file<F>(path: &Path, write: F) -> Result<(), MatrixError>
    where F: FnOnce(&mut BufWriter<File>) -> io::Result<()> {

    let to_write_failure = |source| MatrixError::OutputWriteFailure {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(to_write_failure)?;
    let mut out = BufWriter::new(file);

    write(&mut out)
        .and_then(|_| out.flush())
        .map_err(to_write_failure)
}

/// Reads back a matrix written by `write_ratings_matrix` or `write_rated_matrix`.
pub fn read_matrix<R: io::Read>(input: R) -> Result<Vec<Vec<f64>>, MatrixError> {

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|position| position.line()).unwrap_or(0);

        let row = record.iter()
            .map(|value| {
                value.trim().parse::<f64>().map_err(|_| MatrixError::ParseFailure {
                    line,
                    field: "matrix entry",
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, MatrixError>>()?;

        rows.push(row);
    }

    Ok(rows)
}
