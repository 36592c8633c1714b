use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::path::Path;

use crate::error::MatrixError;
use crate::types::Ratings;
use crate::RatingMatrices;

/// Statistics of a single conversion run. Field names will be used in JSON.
#[derive(Serialize, Debug, PartialEq)]
pub struct Summary {
    pub num_ratings: usize,
    pub num_duplicates: usize,
    pub num_skipped_lines: u64,
    pub num_coerced_fields: u64,
    pub num_movies: usize,
    pub num_users: usize,
    pub num_rated_cells: usize,
    pub density: f64,
}

impl Summary {

    pub fn of(ratings: &Ratings, matrices: &RatingMatrices) -> Self {

        let num_cells = matrices.num_movies() as f64 * matrices.num_users() as f64;
        let num_rated_cells = matrices.num_rated();

        let density = if num_cells == 0.0 {
            0.0
        } else {
            num_rated_cells as f64 / num_cells
        };

        Summary {
            num_ratings: ratings.len(),
            num_duplicates: matrices.num_duplicates(),
            num_skipped_lines: ratings.num_skipped_lines(),
            num_coerced_fields: ratings.num_coerced_fields(),
            num_movies: matrices.num_movies(),
            num_users: matrices.num_users(),
            num_rated_cells,
            density,
        }
    }
}

impl fmt::Display for Summary {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ratings, largest movie id {}, largest user id {}, {} rated cells ({} duplicate \
             ratings overwritten), {} lines skipped, {} fields read as zero",
            self.num_ratings,
            self.num_movies,
            self.num_users,
            self.num_rated_cells,
            self.num_duplicates,
            self.num_skipped_lines,
            self.num_coerced_fields,
        )
    }
}

/// Output the summary as JSON. If a `summary_path` is supplied, we write to a file at the
/// specified path, otherwise, we output to stdout.
pub fn write_summary(summary: &Summary, summary_path: Option<&str>) -> Result<(), MatrixError> {

    let to_write_failure = |source: io::Error| MatrixError::OutputWriteFailure {
        path: summary_path.unwrap_or("stdout").to_string(),
        source,
    };

    let mut out: Box<dyn Write> = match summary_path {
        Some(path) => Box::new(File::create(&Path::new(path)).map_err(to_write_failure)?),
        _ => Box::new(stdout())
    };

    let summary_as_json = serde_json::to_string(summary)
        .map_err(|failure| to_write_failure(failure.into()))?;

    writeln!(out, "{}", summary_as_json)
        .and_then(|_| out.flush())
        .map_err(to_write_failure)
}
