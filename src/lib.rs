extern crate csv;
extern crate fnv;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;

mod types;
mod usage_tests;
pub mod error;
pub mod io;
pub mod stats;
pub mod utils;

pub use error::MatrixError;
pub use types::{ParsePolicy, RatingRecord, Ratings};

use types::{SparseMatrix, SparseRow};

const MAX_ID: i64 = std::u32::MAX as i64;

/// Ratings of movies (rows) by users (columns). Only observed cells are stored, movies without
/// any rating and the dense layout are produced row by row on demand.
#[derive(Debug)]
pub struct RatingMatrices {
    rows: SparseMatrix,
    num_movies: usize,
    num_users: usize,
    num_duplicates: usize,
}

impl RatingMatrices {

    pub fn num_movies(&self) -> usize {
        self.num_movies
    }

    pub fn num_users(&self) -> usize {
        self.num_users
    }

    /// Number of records which overwrote an earlier rating of the same movie by the same user.
    pub fn num_duplicates(&self) -> usize {
        self.num_duplicates
    }

    /// Number of cells for which a rating exists.
    pub fn num_rated(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    fn row(&self, movie_index: usize) -> Option<&SparseRow> {
        self.rows.get(&(movie_index as u32))
    }

    pub fn rating(&self, movie_index: usize, user_index: usize) -> f64 {
        self.row(movie_index)
            .and_then(|row| row.get(&(user_index as u32)))
            .cloned()
            .unwrap_or(0.0)
    }

    pub fn rated(&self, movie_index: usize, user_index: usize) -> u8 {
        self.row(movie_index)
            .map_or(false, |row| row.contains_key(&(user_index as u32))) as u8
    }

    pub fn ratings_row<'a>(&'a self, movie_index: usize) -> impl Iterator<Item=f64> + 'a {
        let row = self.row(movie_index);
        (0..self.num_users as u32).map(move |user_index| {
            row.and_then(|row| row.get(&user_index)).cloned().unwrap_or(0.0)
        })
    }

    pub fn rated_row<'a>(&'a self, movie_index: usize) -> impl Iterator<Item=u8> + 'a {
        let row = self.row(movie_index);
        (0..self.num_users as u32).map(move |user_index| {
            row.map_or(false, |row| row.contains_key(&user_index)) as u8
        })
    }
}

/// Places every rating at `[movie_id - 1][user_id - 1]`, later records overwrite earlier ones.
/// The shape of the result is given by the largest movie and user ids seen while reading.
pub fn densify(ratings: &Ratings) -> Result<RatingMatrices, MatrixError> {

    for record in ratings.records() {
        if !in_range(record.movie_id) || !in_range(record.user_id) {
            return Err(MatrixError::IndexOutOfRange {
                line: record.line,
                movie_id: record.movie_id,
                user_id: record.user_id,
            });
        }
    }

    let mut rows = types::new_sparse_matrix(0);
    let mut num_duplicates = 0;

    for record in ratings.records() {
        let movie_index = (record.movie_id - 1) as u32;
        let user_index = (record.user_id - 1) as u32;

        let row = rows.entry(movie_index).or_insert_with(SparseRow::default);

        if row.insert(user_index, record.rating).is_some() {
            num_duplicates += 1;
        }
    }

    Ok(RatingMatrices {
        rows,
        num_movies: ratings.max_movie_id() as usize,
        num_users: ratings.max_user_id() as usize,
        num_duplicates,
    })
}

fn in_range(id: i64) -> bool {
    id >= 1 && id <= MAX_ID
}

/// Lists the non-zero cells of a dense matrix as `(movie_id, user_id, value)` triples in
/// row-major order.
pub fn flatten(matrix: &[Vec<f64>]) -> Vec<(u32, u32, f64)> {
    matrix.iter()
        .enumerate()
        .flat_map(|(movie_index, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, value)| *value != 0.0)
                .map(move |(user_index, value)| {
                    (movie_index as u32 + 1, user_index as u32 + 1, *value)
                })
        })
        .collect()
}
