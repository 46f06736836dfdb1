//! # Configuration Module
//!
//! Splay keeps no configuration file and no global state. Everything a run
//! needs is gathered into a [`Config`] by `main` and passed down explicitly.
//!
//! ## Music Location
//!
//! The library always lives at `<home>/Music`:
//! - Linux: `/home/<user>/Music`
//! - macOS: `/Users/<user>/Music`
//! - Windows: `C:\Users\<user>\Music`

use crate::error::{Result, SplayError};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Player used when none is given on the command line or in `SPLAY_PLAYER`.
#[cfg(target_os = "macos")]
pub const DEFAULT_PLAYER: &str = "afplay";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_PLAYER: &str = "mpv";

/// Returns the path to the current user's Music folder.
///
/// The folder is not required to exist; reading it later reports that.
///
/// # Errors
///
/// [`SplayError::NoHomeDir`] if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// let root = splay::config::music_root()?;
/// assert!(root.ends_with("Music"));
/// # Ok::<(), splay::error::SplayError>(())
/// ```
pub fn music_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(SplayError::NoHomeDir)?;
    Ok(home.join("Music"))
}

/// Which kind of match the top-level query tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Artists first, then albums if no artist matches.
    #[default]
    ArtistFirst,
    /// Albums only.
    Album,
}

/// Configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the `Artist/Album/Track` tree
    pub music_root: PathBuf,
    pub search: SearchMode,
    /// Program that plays one track file per invocation
    pub player: String,
    /// Print each track's name before it plays
    pub announce_tracks: bool,
    /// Fixed seed for album shuffling. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Config {
    /// Configuration rooted at the current user's Music folder.
    pub fn new() -> Result<Self> {
        Ok(Self::with_music_root(music_root()?))
    }

    /// Configuration with an explicit music root and default settings.
    pub fn with_music_root(music_root: PathBuf) -> Self {
        Self {
            music_root,
            search: SearchMode::default(),
            player: DEFAULT_PLAYER.to_string(),
            announce_tracks: false,
            seed: None,
        }
    }

    /// The seed for this invocation's shuffle.
    ///
    /// Clock seeds only need to differ from run to run, not be unpredictable.
    #[must_use]
    pub fn shuffle_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
                .unwrap_or_default()
        })
    }
}
