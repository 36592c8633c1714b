use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {

    #[error("no input found at {path}: {source}")]
    InputNotFound {
        path: String,
        source: io::Error,
    },

    #[error("could not read input: {source}")]
    Read {
        #[from]
        source: csv::Error,
    },

    #[error("line {line}: cannot parse {field} from '{value}'")]
    ParseFailure {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: movie id {movie_id} / user id {user_id} is outside of 1..={max}",
        max = u32::MAX)]
    IndexOutOfRange {
        line: u64,
        movie_id: i64,
        user_id: i64,
    },

    #[error("could not write {path}: {source}")]
    OutputWriteFailure {
        path: String,
        source: io::Error,
    },
}
