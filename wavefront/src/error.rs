use std::path::PathBuf;

use common::{FileExtensionError, SerdeFormatError};

use crate::resample::ResampleError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parameter list `{list}` has {actual} entries but the target has {expected} sources")]
    CardinalityMismatch {
        list: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to resample {field} of source {index}: {source}")]
    Resample {
        index: usize,
        field: &'static str,
        #[source]
        source: ResampleError,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    ConfigFormat(#[from] FileExtensionError),

    #[error(transparent)]
    ConfigParse(#[from] SerdeFormatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_message_names_list_and_counts() {
        let err = Error::CardinalityMismatch {
            list: "shift_x",
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Parameter list `shift_x` has 3 entries but the target has 2 sources"
        );
    }

    #[test]
    fn resample_message_includes_cause() {
        let err = Error::Resample {
            index: 1,
            field: "opd",
            source: ResampleError::EmptyInput { rows: 0, cols: 0 },
        };
        assert_eq!(
            err.to_string(),
            "Failed to resample opd of source 1: Input field has no samples (0x0)"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_format_is_transparent() {
        let err: Error = FileExtensionError::UnsupportedFileExtension("toml".into()).into();
        assert_eq!(
            err.to_string(),
            FileExtensionError::UnsupportedFileExtension("toml".into()).to_string()
        );
    }
}
