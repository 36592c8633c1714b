use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn to_millis(duration: Duration) -> u64 {
    (duration.as_secs() * 1_000) + (duration.subsec_nanos() / 1_000_000) as u64
}

/// Default locations for the two matrices: next to the input, named after it, e.g.
/// `ratings.csv` becomes `ratings_ratingsMatrix.csv` and `ratings_ratedMatrix.csv`.
pub fn default_output_paths(input: &str) -> (PathBuf, PathBuf) {
    let input = Path::new(input);

    let stem = input.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("ratings"));

    let directory = input.parent().unwrap_or_else(|| Path::new(""));

    (directory.join(format!("{}_ratingsMatrix.csv", stem)),
     directory.join(format!("{}_ratedMatrix.csv", stem)))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn millis() {
        assert_eq!(to_millis(Duration::new(2, 345_678_901)), 2_345);
    }

    #[test]
    fn outputs_are_placed_next_to_input() {
        let (ratings, rated) = default_output_paths("data/ml-latest-small/ratings.csv");

        assert_eq!(ratings, PathBuf::from("data/ml-latest-small/ratings_ratingsMatrix.csv"));
        assert_eq!(rated, PathBuf::from("data/ml-latest-small/ratings_ratedMatrix.csv"));
    }

    #[test]
    fn outputs_for_bare_file_name() {
        let (ratings, _) = default_output_paths("ratings.csv");
        assert_eq!(ratings, PathBuf::from("ratings_ratingsMatrix.csv"));
    }
}
