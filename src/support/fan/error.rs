use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or validating a fan curve.
#[derive(Debug, Error)]
pub enum FanCurveError {
    /// The curve file could not be read.
    #[error("failed to read fan curve")]
    Io(#[from] std::io::Error),

    /// A data row has fewer than two columns.
    #[error("line {line}: expected `flow;pressure`, found {content:?}")]
    MissingColumn { line: usize, content: String },

    /// A value could not be parsed as a decimal-comma number.
    #[error("line {line}: {value:?} is not a number")]
    InvalidNumber { line: usize, value: String },

    /// Flow and pressure sample counts differ.
    #[error("{flow} flow samples but {pressure} pressure samples")]
    MismatchedLengths { flow: usize, pressure: usize },

    /// A curve needs at least two samples to bracket an operating point.
    #[error("fan curve has {count} samples, at least 2 are required")]
    TooFewSamples { count: usize },

    /// A flow or pressure sample is `NaN` or infinite.
    #[error("sample {index} is not finite")]
    NonFinite { index: usize },

    /// A flow sample is negative.
    #[error("sample {index} has negative flow")]
    NegativeFlow { index: usize },

    /// Flow samples are not in strictly ascending order.
    #[error("flow is not strictly ascending at sample {index}")]
    NotAscending { index: usize },

    /// A curve file in a fan directory failed to load.
    #[error("failed to load {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<FanCurveError>,
    },
}

impl FanCurveError {
    pub(super) fn in_file(path: impl Into<PathBuf>) -> impl FnOnce(Self) -> Self {
        let path = path.into();
        move |source| Self::File {
            path,
            source: Box::new(source),
        }
    }
}
