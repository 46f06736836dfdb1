//! # Splay - A Simple Jukebox
//!
//! ## Usage
//!
//! ```bash
//! # Play an artist's albums in random order
//! splay bob dylan
//!
//! # Start from a particular album
//! splay --from "blonde on blonde" bob dylan
//!
//! # Show an album's tracks instead of playing them
//! splay --album --list nevermind
//! ```
//!
//! Logging is controlled via `RUST_LOG`:
//! - `RUST_LOG=debug splay the who` - Enable debug logging
//! - `RUST_LOG=splay::matcher=trace splay the who` - Show every match score

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use splay::cli::Args;
use splay::completion;
use splay::config;
use splay::locate::Locator;
use splay::player::CommandPlayer;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(shell) = args.completions {
        completion::write_completions(shell, &mut Args::command(), &mut out)?;
        return Ok(());
    }

    let music_root = match &args.music_dir {
        Some(dir) => dir.clone(),
        None => config::music_root()?,
    };

    if args.complete_names {
        completion::print_name_completions(&music_root, &mut out)?;
        return Ok(());
    }

    let pattern = args.pattern();
    if pattern.is_empty() {
        return Err(anyhow!("Please provide the name of the thing to play."));
    }

    let config = args.config(music_root);
    debug!("Running with {config:?}");

    let locator = Locator::new(&config.music_root);
    let music = locator
        .locate(&pattern, config.search)
        .with_context(|| format!("Failed to search {}", config.music_root.display()))?
        .ok_or_else(|| anyhow!("Failed to find {pattern:?}"))?;
    info!("Found {}", music.path().display());

    if args.list {
        music.list(&args.from, &mut out)?;
    } else {
        let mut player = CommandPlayer::new(&config.player);
        music.play(&args.from, &config, &mut player, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
