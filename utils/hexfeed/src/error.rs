use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The stream ended with the monitor still waiting, usually because the
    /// final end of transmission fell inside an unterminated comment.
    #[error("input never reaches end of transmission outside a comment ({consumed} bytes consumed)")]
    NoHandoff { consumed: usize },
}

impl FeedError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FeedError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FeedError::Write {
            path: path.into(),
            source,
        }
    }
}
