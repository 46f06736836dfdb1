//! The two groupings of music that can be played or listed.

use crate::config::Config;
use crate::error::Result;
use crate::library::{self, trim_ext, Entry};
use crate::player::Player;
use crate::sequence;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::{Path, PathBuf};

/// All of the albums by an artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    path: PathBuf,
}

/// All of the tracks of an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    path: PathBuf,
    /// Prefix announced track names with the album's directory name.
    show_name: bool,
}

/// An artist or album found by the [`Locator`](crate::locate::Locator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Music {
    Artist(Artist),
    Album(Album),
}

impl Music {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Artist(a) => a.path(),
            Self::Album(a) => a.path(),
        }
    }

    /// Plays from the entry matching `start`, or from the beginning if
    /// `start` is empty.
    pub fn play<P, W>(&self, start: &str, config: &Config, player: &mut P, out: &mut W) -> Result<()>
    where
        P: Player + ?Sized,
        W: Write,
    {
        match self {
            Self::Artist(a) => a.play(start, config, player, out),
            Self::Album(a) => a.play(start, config, player, out),
        }
    }

    /// Writes the playlist to `out`, one name per line, starting from the
    /// entry matching `start`.
    pub fn list<W: Write>(&self, start: &str, out: &mut W) -> Result<()> {
        match self {
            Self::Artist(a) => a.list(start, out),
            Self::Album(a) => a.list(start, out),
        }
    }
}

impl Artist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Albums in shuffled order, rotated so `start` comes first.
    pub fn shuffled_albums(&self, start: &str, seed: u64) -> Result<Vec<Entry>> {
        let albums = library::directories(&self.path)?;
        let mut rng = StdRng::seed_from_u64(seed);
        sequence::shuffled(albums, start, &self.path, &mut rng)
    }

    /// Albums in natural order, rotated so `start` comes first.
    pub fn albums(&self, start: &str) -> Result<Vec<Entry>> {
        sequence::natural(library::directories(&self.path)?, start, &self.path)
    }

    /// Plays every album in shuffled order, each from its first track.
    pub fn play<P, W>(&self, start: &str, config: &Config, player: &mut P, out: &mut W) -> Result<()>
    where
        P: Player + ?Sized,
        W: Write,
    {
        let seed = config.shuffle_seed();
        debug!("Shuffling albums of {} with seed {seed}", self.path.display());

        for album in self.shuffled_albums(start, seed)? {
            info!("Starting album `{}'", album.name);
            Album::new(self.path.join(&album.name), true).play("", config, player, out)?;
        }
        Ok(())
    }

    pub fn list<W: Write>(&self, start: &str, out: &mut W) -> Result<()> {
        for album in self.albums(start)? {
            writeln!(out, "{}", album.name)?;
        }
        Ok(())
    }
}

impl Album {
    pub fn new(path: impl Into<PathBuf>, show_name: bool) -> Self {
        Self { path: path.into(), show_name }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tracks in natural order, rotated so `start` comes first.
    pub fn tracks(&self, start: &str) -> Result<Vec<Entry>> {
        sequence::natural(library::tracks(&self.path)?, start, &self.path)
    }

    /// What gets printed before `track` plays.
    #[must_use]
    pub fn announcement(&self, track: &Entry) -> String {
        let name = trim_ext(&track.name);
        match self.path.file_name().filter(|_| self.show_name) {
            Some(album) => format!("{}/{name}", album.to_string_lossy()),
            None => name.to_string(),
        }
    }

    pub fn play<P, W>(&self, start: &str, config: &Config, player: &mut P, out: &mut W) -> Result<()>
    where
        P: Player + ?Sized,
        W: Write,
    {
        for track in self.tracks(start)? {
            if config.announce_tracks {
                writeln!(out, "{}", self.announcement(&track))?;
                out.flush()?;
            }
            player.play(&self.path.join(&track.name))?;
        }
        Ok(())
    }

    pub fn list<W: Write>(&self, start: &str, out: &mut W) -> Result<()> {
        for track in self.tracks(start)? {
            writeln!(out, "{}", track.name)?;
        }
        Ok(())
    }
}

impl From<Artist> for Music {
    fn from(artist: Artist) -> Self {
        Self::Artist(artist)
    }
}

impl From<Album> for Music {
    fn from(album: Album) -> Self {
        Self::Album(album)
    }
}
