//! # Shell Completion Module
//!
//! - Generation of completion scripts for various shells
//! - Artist and album names from the music library for dynamic completion
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! splay --completions bash > ~/.local/share/bash-completion/completions/splay
//!
//! # Generate zsh completions
//! splay --completions zsh > ~/.config/zsh/completions/_splay
//! ```
//!
//! Bash and fish scripts also complete artist and album names by calling
//! back into `splay --complete-names` each time completion is requested.

use crate::cli::Shell;
use crate::error::Result;
use crate::library;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use log::debug;
use std::io::Write;
use std::path::Path;

/// Wraps the generated `_splay` so free arguments also complete to names.
const BASH_NAME_HOOK: &str = r#"
_splay_with_names() {
    _splay "$@"
    local cur="${COMP_WORDS[COMP_CWORD]}"
    if [[ "$cur" != -* ]]; then
        local IFS=$'\n'
        COMPREPLY+=( $(compgen -W "$(splay --complete-names 2>/dev/null)" -- "$cur") )
    fi
}
complete -F _splay_with_names -o bashdefault -o default splay
"#;

const FISH_NAME_HOOK: &str = r#"
complete -c splay -f -n 'not __fish_seen_argument -l completions' -a '(splay --complete-names 2>/dev/null)' -d 'Artist or album'
"#;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator, W: Write>(gen: G, cmd: &mut Command, out: &mut W) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

/// Write the clap-generated script for `shell`, plus artist and album name
/// completion where the shell supports calling back into `splay`.
pub fn write_completions<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) -> Result<()> {
    generate_completions(shell_to_completion_shell(shell), cmd, out);
    match shell {
        Shell::Bash => out.write_all(BASH_NAME_HOOK.as_bytes())?,
        Shell::Fish => out.write_all(FISH_NAME_HOOK.as_bytes())?,
        Shell::Zsh | Shell::PowerShell | Shell::Elvish => {
            debug!("No name completion hook for {shell:?}");
        }
    }
    Ok(())
}

/// Convert our shell enum to clap_complete's shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Every artist and album name under `root`, sorted and deduplicated.
///
/// A missing music folder yields no names rather than an error, so a
/// completion request never prints noise into the shell.
pub fn name_completions(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        debug!("No music folder at {}, nothing to complete", root.display());
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for artist in library::directories(root)? {
        let albums = library::directories(&root.join(&artist.name))?;
        names.extend(albums.into_iter().map(|album| album.name));
        names.push(artist.name);
    }
    names.sort();
    names.dedup();
    Ok(names)
}

/// Print names for completion, one per line
pub fn print_name_completions<W: Write>(root: &Path, out: &mut W) -> Result<()> {
    for name in name_completions(root)? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_shell_conversion() {
        assert_eq!(shell_to_completion_shell(Shell::Bash), CompletionShell::Bash);
        assert_eq!(shell_to_completion_shell(Shell::Zsh), CompletionShell::Zsh);
    }

    #[test]
    fn test_bash_script_mentions_binary() {
        let mut out = Vec::new();
        generate_completions(CompletionShell::Bash, &mut Args::command(), &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_splay"));
        assert!(script.contains("--from"));
    }

    #[test]
    fn test_bash_and_fish_complete_names() {
        for shell in [Shell::Bash, Shell::Fish] {
            let mut out = Vec::new();
            write_completions(shell, &mut Args::command(), &mut out).unwrap();
            let script = String::from_utf8(out).unwrap();
            assert!(script.contains("splay --complete-names"), "{shell:?}");
        }

        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut Args::command(), &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_splay \"$@\""));
        assert!(script.trim_end().ends_with("complete -F _splay_with_names -o bashdefault -o default splay"));
    }

    #[test]
    fn test_zsh_has_no_name_hook() {
        let mut out = Vec::new();
        write_completions(Shell::Zsh, &mut Args::command(), &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_splay"));
        assert!(!script.contains("--complete-names"));
    }

    #[test]
    fn test_name_completions() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("The Who/Tommy")).unwrap();
        fs::create_dir_all(tmp.path().join("Nirvana/Nevermind")).unwrap();
        fs::create_dir_all(tmp.path().join("Tommy/Tommy")).unwrap();

        let names = name_completions(tmp.path()).unwrap();
        assert_eq!(names, ["Nevermind", "Nirvana", "The Who", "Tommy"]);

        let mut out = Vec::new();
        print_name_completions(tmp.path(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Nevermind\nNirvana\nThe Who\nTommy\n");
    }

    #[test]
    fn test_missing_music_folder_completes_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(name_completions(&tmp.path().join("Music")).unwrap().is_empty());
    }
}
