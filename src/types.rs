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

use fnv::FnvHashMap;

/// Ratings of a single movie, keyed by zero-based user index.
pub type SparseRow = FnvHashMap<u32, f64>;
/// Rated movies only, keyed by zero-based movie index.
pub type SparseMatrix = FnvHashMap<u32, SparseRow>;

pub fn new_sparse_matrix(num_rated_rows: usize) -> SparseMatrix {
    FnvHashMap::with_capacity_and_hasher(num_rated_rows, Default::default())
}

/// A single observation from the ratings log. Ids are kept exactly as parsed, they are only
/// checked when the matrices are built.
#[derive(PartialEq, Debug, Clone)]
pub struct RatingRecord {
    pub line: u64,
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
}

/// What to do with a numeric field that does not parse.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ParsePolicy {
    /// Treat the field as zero and keep the line.
    Lenient,
    /// Abort with a parse failure.
    Strict,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        ParsePolicy::Lenient
    }
}

/// All accepted records in input order, plus what we learned while reading them.
#[derive(Debug, Default)]
pub struct Ratings {
    records: Vec<RatingRecord>,
    max_user_id: i64,
    max_movie_id: i64,
    num_skipped_lines: u64,
    num_coerced_fields: u64,
}

impl Ratings {

    pub fn new() -> Self {
        Ratings::default()
    }

    pub fn push(&mut self, record: RatingRecord) {
        if record.user_id > self.max_user_id {
            self.max_user_id = record.user_id;
        }
        if record.movie_id > self.max_movie_id {
            self.max_movie_id = record.movie_id;
        }
        self.records.push(record);
    }

    pub fn skip_line(&mut self) {
        self.num_skipped_lines += 1;
    }

    pub fn coerced_field(&mut self) {
        self.num_coerced_fields += 1;
    }

    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_user_id(&self) -> i64 {
        self.max_user_id
    }

    pub fn max_movie_id(&self) -> i64 {
        self.max_movie_id
    }

    pub fn num_skipped_lines(&self) -> u64 {
        self.num_skipped_lines
    }

    pub fn num_coerced_fields(&self) -> u64 {
        self.num_coerced_fields
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn record(user_id: i64, movie_id: i64, rating: f64) -> RatingRecord {
        RatingRecord { line: 0, user_id, movie_id, rating }
    }

    #[test]
    fn maxima_follow_pushed_records() {
        let mut ratings = Ratings::new();
        assert_eq!(ratings.max_user_id(), 0);
        assert_eq!(ratings.max_movie_id(), 0);

        ratings.push(record(3, 1, 4.0));
        ratings.push(record(1, 7, 2.5));
        ratings.push(record(2, 2, 1.0));

        assert_eq!(ratings.len(), 3);
        assert_eq!(ratings.max_user_id(), 3);
        assert_eq!(ratings.max_movie_id(), 7);
    }

    #[test]
    fn records_keep_input_order() {
        let mut ratings = Ratings::new();
        ratings.push(record(1, 1, 4.0));
        ratings.push(record(1, 1, 2.0));

        let ratings_seen: Vec<f64> = ratings.records().iter().map(|r| r.rating).collect();
        assert_eq!(ratings_seen, vec![4.0, 2.0]);
    }
}
