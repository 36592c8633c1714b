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

#[cfg(test)]
mod tests {

    use std::fs;

    use crate::{densify, flatten, io, ParsePolicy};
    use crate::stats::Summary;

    #[test]
    fn programmatic_usage() {

        /* Our input is a ratings log with a header line, followed by one
           user,movie,rating,timestamp tuple per line. */
        let directory = tempfile::tempdir().unwrap();
        let input_path = directory.path().join("ratings.csv");

        fs::write(&input_path, "userId,movieId,rating,timestamp\n\
                                1,1,4.0,964982703\n\
                                1,3,4.0,964981247\n\
                                2,3,2.5,1445714835\n\
                                3,2,0.5,1306463578\n\
                                3,1,1.0,1306464000\n\
                                1,1,4.5,964990000\n").unwrap();

        /* We read all ratings once, this also tells us the largest user and movie ids and
           therefore the shape of the matrices. */
        let mut reader = io::csv_reader(input_path.to_str().unwrap(), b',').unwrap();
        let ratings = io::ratings_from_csv(&mut reader, ParsePolicy::Lenient).unwrap();

        assert_eq!(ratings.len(), 6);

        /* Every rating is placed at [movie - 1][user - 1], the later rating of user 1 for
           movie 1 replaces the earlier one. */
        let matrices = densify(&ratings).unwrap();

        assert_eq!(matrices.num_movies(), 3);
        assert_eq!(matrices.num_users(), 3);

        let summary = Summary::of(&ratings, &matrices);
        assert_eq!(summary.num_duplicates, 1);
        assert_eq!(summary.num_rated_cells, 5);

        /* Both matrices are written as comma separated text. */
        let ratings_path = directory.path().join("ratings_ratingsMatrix.csv");
        let rated_path = directory.path().join("ratings_ratedMatrix.csv");
        io::write_matrices(&matrices, &ratings_path, &rated_path).unwrap();

        assert_eq!(fs::read_to_string(&ratings_path).unwrap(), "4.5,0,1\n0,0,0.5\n4,2.5,0\n");
        assert_eq!(fs::read_to_string(&rated_path).unwrap(), "1,0,1\n0,0,1\n1,1,0\n");

        /* Reading the ratings matrix back gives us the surviving ratings again. */
        let written = io::read_matrix(fs::File::open(&ratings_path).unwrap()).unwrap();
        let cells = flatten(&written);

        assert_eq!(cells, vec![
            (1, 1, 4.5), (1, 3, 1.0),
            (2, 3, 0.5),
            (3, 1, 4.0), (3, 2, 2.5),
        ]);
    }

    #[test]
    fn round_trip_reproduces_rated_cells() {

        let log = "userId,movieId,rating,timestamp\n\
                   4,2,3.0,0\n\
                   1,5,5.0,0\n\
                   2,2,1.5,0\n\
                   4,2,2.0,0\n\
                   3,1,4.0,0\n";

        let mut reader = io::ratings_reader(log.as_bytes(), b',');
        let ratings = io::ratings_from_csv(&mut reader, ParsePolicy::Strict).unwrap();
        let matrices = densify(&ratings).unwrap();

        let mut ratings_out = Vec::new();
        io::write_ratings_matrix(&matrices, &mut ratings_out).unwrap();
        let mut rated_out = Vec::new();
        io::write_rated_matrix(&matrices, &mut rated_out).unwrap();

        /* Row-major order: ascending movie, then ascending user. */
        let expected: Vec<(u32, u32, f64)> =
            vec![(1, 3, 4.0), (2, 2, 1.5), (2, 4, 2.0), (5, 1, 5.0)];

        assert_eq!(flatten(&io::read_matrix(&ratings_out[..]).unwrap()), expected);

        let rated_cells: Vec<(u32, u32)> = flatten(&io::read_matrix(&rated_out[..]).unwrap())
            .into_iter()
            .map(|(movie, user, _)| (movie, user))
            .collect();

        assert_eq!(rated_cells, vec![(1, 3), (2, 2), (2, 4), (5, 1)]);
    }
}
