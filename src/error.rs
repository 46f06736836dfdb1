//! Error taxonomy for library operations.
//!
//! "Nothing matched the top-level query" is not represented here: the
//! [`Locator`](crate::locate::Locator) reports it as `Ok(None)`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplayError>;

#[derive(Error, Debug)]
pub enum SplayError {
    /// A non-empty resume pattern matched nothing at the current level.
    #[error("nothing in {} matches {pattern:?}", dir.display())]
    ResumeNotFound { pattern: String, dir: PathBuf },

    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine the current user's home directory")]
    NoHomeDir,

    #[error("failed to run `{program}` on {}", track.display())]
    PlayerSpawn {
        program: String,
        track: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status} while playing {}", track.display())]
    PlayerFailed {
        program: String,
        track: PathBuf,
        status: ExitStatus,
    },

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_not_found_names_pattern() {
        let err = SplayError::ResumeNotFound {
            pattern: "blonde".to_string(),
            dir: PathBuf::from("/music/Bob Dylan"),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"blonde\""));
        assert!(msg.contains("/music/Bob Dylan"));
    }

    #[test]
    fn test_read_dir_keeps_source() {
        use std::error::Error;

        let err = SplayError::ReadDir {
            path: PathBuf::from("/music"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/music"));
        assert!(err.source().is_some());
    }
}
