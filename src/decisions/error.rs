use std::path::PathBuf;

/// Failures while loading or saving a [`DecisionTable`].
///
/// A lookup miss is not an error and never appears here.
///
/// [`DecisionTable`]: super::table::DecisionTable
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed header: {0}")]
    Format(String),
    #[error("malformed row at line {line}: {reason}")]
    Row { line: u64, reason: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl DecisionError {
    /// True for failures reading or writing bytes, as opposed to bad content.
    pub fn is_io(&self) -> bool {
        match self {
            Self::Io { .. } => true,
            Self::Csv(e) => e.is_io_error(),
            _ => false,
        }
    }
}
