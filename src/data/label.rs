use std::path::Path;

use crate::error::{CompareError, Result};

/// `<curve-set>_<algorithm>` as encoded in a benchmark data file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLabel {
    pub curve_set: String,
    pub algorithm: String,
}

impl DatasetLabel {
    /// Take the file name without directory, cut it at the first `.` and
    /// split what is left on `_`. Tokens past the second are ignored.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = file_name.split('.').next().unwrap_or_default().to_string();

        let mut tokens = stem.split('_');
        match (tokens.next(), tokens.next()) {
            (Some(curve_set), Some(algorithm)) => Ok(DatasetLabel {
                curve_set: curve_set.to_string(),
                algorithm: algorithm.to_string(),
            }),
            _ => Err(CompareError::DatasetName { name: stem }),
        }
    }

    pub fn title(&self) -> String {
        format!(
            "{} certificate size comparison on {} curve set",
            self.algorithm.to_uppercase(),
            self.curve_set
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_plain_file_name() {
        let label = DatasetLabel::from_path(Path::new("nist_avx2.txt")).unwrap();
        assert_eq!(
            label.title(),
            "AVX2 certificate size comparison on nist curve set"
        );
    }

    #[test]
    fn directory_is_dropped() {
        let label = DatasetLabel::from_path(Path::new("data/curveA_alg.txt")).unwrap();
        assert_eq!(label.curve_set, "curveA");
        assert_eq!(label.algorithm, "alg");
        assert_eq!(
            label.title(),
            "ALG certificate size comparison on curveA curve set"
        );
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let label = DatasetLabel::from_path(Path::new("geolife_yes_alt.txt")).unwrap();
        assert_eq!(label.algorithm, "yes");
    }

    #[test]
    fn name_is_cut_at_first_dot() {
        let label = DatasetLabel::from_path(Path::new("data/nist_avx2.v1.txt")).unwrap();
        assert_eq!(label.algorithm, "avx2");
        assert_eq!(
            label.title(),
            "AVX2 certificate size comparison on nist curve set"
        );
    }

    #[test]
    fn single_token_name_is_rejected() {
        let err = DatasetLabel::from_path(Path::new("data/results.txt")).unwrap_err();
        match err {
            CompareError::DatasetName { name } => assert_eq!(name, "results"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
