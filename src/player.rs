//! External media player invocation.
//!
//! Tracks are handed one at a time to a command-line player such as `mpv`
//! or `afplay`, which runs to completion before the next track starts.

use crate::error::{Result, SplayError};
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};

/// Something that can play a single track file, blocking until it ends.
pub trait Player {
    /// # Errors
    ///
    /// Any failure aborts the rest of the playlist.
    fn play(&mut self, track: &Path) -> Result<()>;
}

/// Runs `<program> <track>` for every track.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Player for CommandPlayer {
    fn play(&mut self, track: &Path) -> Result<()> {
        info!("Playing {} with `{}`", track.display(), self.program);

        let status = Command::new(&self.program)
            .arg(track)
            .stdin(Stdio::inherit())
            .status()
            .map_err(|source| SplayError::PlayerSpawn {
                program: self.program.clone(),
                track: track.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(SplayError::PlayerFailed {
                program: self.program.clone(),
                track: track.to_path_buf(),
                status,
            });
        }

        debug!("Finished {}", track.display());
        Ok(())
    }
}
