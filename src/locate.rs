//! Finding an artist or album by a loose name.

use crate::config::SearchMode;
use crate::error::Result;
use crate::library;
use crate::matcher::{select_index, Named};
use crate::music::{Album, Artist, Music};
use log::{debug, info};
use std::path::PathBuf;

/// An album found while flattening the library, remembered with its path.
struct AlbumPath {
    name: String,
    path: PathBuf,
}

impl Named for AlbumPath {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Walks `root/Artist/Album`.
#[derive(Debug, Clone)]
pub struct Locator {
    root: PathBuf,
}

impl Locator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The artist whose directory name best matches `pattern`.
    ///
    /// `Ok(None)` means nothing matched; errors are I/O failures only.
    pub fn locate_artist(&self, pattern: &str) -> Result<Option<Music>> {
        let artists = library::directories(&self.root)?;
        let Some(i) = select_index(&artists, pattern) else {
            debug!("No artist matches {pattern:?}");
            return Ok(None);
        };

        let path = self.root.join(&artists[i].name);
        info!("Matched artist {}", path.display());
        Ok(Some(Artist::new(path).into()))
    }

    /// The album, across every artist, whose name best matches `pattern`.
    pub fn locate_album(&self, pattern: &str) -> Result<Option<Music>> {
        let mut albums = Vec::new();
        for artist in library::directories(&self.root)? {
            let artist_path = self.root.join(&artist.name);
            for album in library::directories(&artist_path)? {
                let path = artist_path.join(&album.name);
                albums.push(AlbumPath { name: album.name, path });
            }
        }
        debug!("Searching {} albums for {pattern:?}", albums.len());

        let Some(i) = select_index(&albums, pattern) else {
            debug!("No album matches {pattern:?}");
            return Ok(None);
        };

        let path = albums.swap_remove(i).path;
        info!("Matched album {}", path.display());
        Ok(Some(Album::new(path, false).into()))
    }

    /// Tries artists first unless `mode` asks for albums, then albums.
    pub fn locate(&self, pattern: &str, mode: SearchMode) -> Result<Option<Music>> {
        if mode == SearchMode::ArtistFirst {
            if let Some(music) = self.locate_artist(pattern)? {
                return Ok(Some(music));
            }
        }
        self.locate_album(pattern)
    }
}
