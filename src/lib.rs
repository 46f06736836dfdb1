//! Splay is a simple jukebox.
//!
//! It assumes a conventional directory structure:
//!
//! ```text
//! $HOME/
//!     Music/
//!         Artist1/
//!             Album1/
//!                 Track1.mp3
//!                 Track2.mp3
//!             Album2/
//!         Artist2/
//!             ...
//! ```
//!
//! Core modules:
//! - [`matcher`] - Name normalization, scoring and selection
//! - [`sequence`] - Shuffled and natural-order playlists
//! - [`locate`] - Finding an artist or album by name
//! - [`music`] - Playing and listing artists and albums
//!
//! ### Supporting Modules
//!
//! - [`library`] - Directory listing
//! - [`player`] - External player invocation
//! - [`config`] - Music location and run configuration
//! - [`error`] - Error types
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use splay::config::{Config, SearchMode};
//! use splay::locate::Locator;
//! use splay::player::CommandPlayer;
//!
//! let config = Config::new()?;
//! let locator = Locator::new(&config.music_root);
//!
//! if let Some(music) = locator.locate("bob dylan", SearchMode::ArtistFirst)? {
//!     let mut player = CommandPlayer::new(&config.player);
//!     music.play("blonde", &config, &mut player, &mut std::io::stdout())?;
//! }
//! # Ok::<(), splay::error::SplayError>(())
//! ```
//!
//! ## Matching
//!
//! Names and patterns are lowercased and stripped of everything but
//! letters, digits and whitespace. A candidate matches when it contains the
//! pattern; its score is how many chars it has beyond the pattern, so an
//! exact match scores 0. The lowest score wins and ties go to whichever
//! candidate came first.
//!
//! ## Ordering
//!
//! An artist's albums are shuffled before playing. Album tracks, and album
//! listings, keep their name order. Either way the list is rotated so that
//! it begins at the `--from` match; a `--from` that matches nothing is an
//! error.

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod library;
pub mod locate;
pub mod matcher;
pub mod music;
pub mod player;
pub mod sequence;
