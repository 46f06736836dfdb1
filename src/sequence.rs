//! Playlist ordering.
//!
//! A playlist is a list of entries rotated so that playback (or listing)
//! begins at the resume point picked by [`select_index`]. Artist playback
//! shuffles the albums first; everything else keeps natural order.

use crate::error::{Result, SplayError};
use crate::matcher::{select_index, Named};
use rand::Rng;
use std::path::Path;

/// Forward Fisher–Yates: element `i` is swapped with a uniformly chosen
/// element in `[i, n)`.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    for i in 0..n {
        let j = rng.gen_range(i..n);
        items.swap(i, j);
    }
}

/// Left-rotates `items` so that the entry matching `start` comes first.
///
/// `dir` only names the level being sequenced in the error.
///
/// # Errors
///
/// [`SplayError::ResumeNotFound`] when `start` is non-empty and matches
/// nothing. An empty `start` never fails; on an empty list it yields an
/// empty list.
pub fn rotate_to<T: Named>(mut items: Vec<T>, start: &str, dir: &Path) -> Result<Vec<T>> {
    if items.is_empty() && start.is_empty() {
        return Ok(items);
    }
    let Some(i) = select_index(&items, start) else {
        return Err(SplayError::ResumeNotFound {
            pattern: start.to_string(),
            dir: dir.to_path_buf(),
        });
    };
    items.rotate_left(i);
    Ok(items)
}

/// Shuffled, then rotated to `start`.
pub fn shuffled<T: Named, R: Rng>(
    mut items: Vec<T>,
    start: &str,
    dir: &Path,
    rng: &mut R,
) -> Result<Vec<T>> {
    shuffle(&mut items, rng);
    rotate_to(items, start, dir)
}

/// Natural order, rotated to `start`.
pub fn natural<T: Named>(items: Vec<T>, start: &str, dir: &Path) -> Result<Vec<T>> {
    rotate_to(items, start, dir)
}
