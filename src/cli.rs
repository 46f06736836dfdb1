//! # Command-Line Interface Module
//!
//! Defines splay's arguments using Clap derive macros.
//!
//! ## Examples
//!
//! ```bash
//! splay bob dylan
//! splay --from blonde bob dylan
//! splay --album --list nevermind
//! splay --tracks --player mpv the who
//! ```

use crate::config::{Config, SearchMode, DEFAULT_PLAYER};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Splay: a simple jukebox.
///
/// Finds the artist or album in ~/Music that best matches the given words
/// and plays it, one track at a time, with an external player.
#[derive(Parser, Debug)]
#[command(name = "splay")]
#[command(version, about)]
pub struct Args {
    /// Prefer artist name matches (the default)
    #[arg(long, overrides_with = "album")]
    pub artist: bool,

    /// Prefer album name matches
    #[arg(long, overrides_with = "artist")]
    pub album: bool,

    /// The album or track to start playing from
    #[arg(long, value_name = "PATTERN", default_value = "")]
    pub from: String,

    /// Print the playlist instead of playing it
    #[arg(short, long)]
    pub list: bool,

    /// Print the name of each track before it is played
    #[arg(short, long)]
    pub tracks: bool,

    /// Program used to play each track
    #[arg(long, env = "SPLAY_PLAYER", default_value = DEFAULT_PLAYER)]
    pub player: String,

    /// Seed for shuffling an artist's albums
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use this directory instead of ~/Music
    #[arg(long, env = "SPLAY_MUSIC_DIR", value_hint = clap::ValueHint::DirPath, hide = true)]
    pub music_dir: Option<PathBuf>,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// List artist and album names for shell completion
    #[arg(long, hide = true)]
    pub complete_names: bool,

    /// Name of the artist or album to play
    #[arg(value_name = "PATTERN", value_hint = clap::ValueHint::Other)]
    pub pattern: Vec<String>,
}

impl Args {
    /// The positional words joined with single spaces.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.pattern.join(" ")
    }

    #[must_use]
    pub fn search_mode(&self) -> SearchMode {
        if self.album && !self.artist {
            SearchMode::Album
        } else {
            SearchMode::ArtistFirst
        }
    }

    /// Builds the run configuration for `music_root`.
    #[must_use]
    pub fn config(&self, music_root: PathBuf) -> Config {
        Config {
            music_root,
            search: self.search_mode(),
            player: self.player.clone(),
            announce_tracks: self.tracks,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("splay").chain(args.iter().copied()))
            .expect("Arguments should parse")
    }

    #[test]
    fn test_pattern_words_joined() {
        let args = parse(&["bob", "dylan", "&", "the", "band"]);
        assert_eq!(args.pattern(), "bob dylan & the band");
        assert_eq!(args.search_mode(), SearchMode::ArtistFirst);
        assert!(!args.list);
        assert_eq!(args.from, "");
    }

    #[test]
    fn test_album_flag_switches_mode() {
        let args = parse(&["--album", "nevermind"]);
        assert_eq!(args.search_mode(), SearchMode::Album);
    }

    #[test]
    fn test_last_of_artist_album_wins() {
        assert_eq!(parse(&["--album", "--artist", "x"]).search_mode(), SearchMode::ArtistFirst);
        assert_eq!(parse(&["--artist", "--album", "x"]).search_mode(), SearchMode::Album);
    }

    #[test]
    fn test_config_from_flags() {
        let args = parse(&["--tracks", "--player", "afplay", "--seed", "9", "--from", "blonde", "dylan"]);
        let config = args.config(PathBuf::from("/m"));
        assert!(config.announce_tracks);
        assert_eq!(config.player, "afplay");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.music_root, PathBuf::from("/m"));
        assert_eq!(args.from, "blonde");
    }

    #[test]
    fn test_completions_without_pattern() {
        let args = parse(&["--completions", "fish"]);
        assert_eq!(args.completions, Some(Shell::Fish));
        assert!(args.pattern.is_empty());
    }
}
