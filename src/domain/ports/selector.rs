//! Selector Port
//!
//! The interactive menu widget as seen by the navigator: present a prompt and
//! an ordered list of labels, get back the chosen index.

use std::io;

use thiserror::Error;

/// Why a selection did not produce an index.
///
/// Any of these ends the whole navigation session, not just the current menu.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// The user pressed Ctrl-C
    #[error("^C")]
    Interrupted,

    /// The user dismissed the menu (Esc or `q`)
    #[error("selection cancelled")]
    Cancelled,

    /// The terminal could not be read or written (includes EOF)
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The selector returned an index outside the menu
    #[error("invalid choice {index} for a menu of {len} entries")]
    InvalidChoice { index: usize, len: usize },
}

/// Trait for presenting a menu and reading the user's choice.
///
/// Implementations can be:
/// - `DialoguerSelector`: an arrow-key menu on the terminal
/// - scripted selectors in tests
pub trait Selector {
    /// Show `items` under `prompt` and return the index the user picked.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, SelectionError>;
}

impl<S: Selector + ?Sized> Selector for &mut S {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, SelectionError> {
        (**self).select(prompt, items)
    }
}
