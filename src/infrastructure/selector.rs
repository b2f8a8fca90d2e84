//! Terminal Selector
//!
//! Presents menus with `dialoguer::Select`: arrow keys to move, Enter to
//! choose, Esc or `q` to dismiss.

use std::io;

use dialoguer::theme::{SimpleTheme, Theme};
use dialoguer::Select;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::ports::{SelectionError, Selector};

/// Rows shown at once when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Interactive selector on the controlling terminal.
pub struct DialoguerSelector {
    theme: Box<dyn Theme>,
    page_size: usize,
    max_width: Option<usize>,
    ellipsis: &'static str,
}

impl DialoguerSelector {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        Self {
            theme,
            page_size: DEFAULT_PAGE_SIZE,
            max_width: None,
            ellipsis: "...",
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Clip entries wider than `width` columns so none of them wraps.
    pub fn with_max_width(mut self, width: usize, ellipsis: &'static str) -> Self {
        self.max_width = Some(width);
        self.ellipsis = ellipsis;
        self
    }
}

impl Default for DialoguerSelector {
    fn default() -> Self {
        Self::new(Box::new(SimpleTheme))
    }
}

impl Selector for DialoguerSelector {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, SelectionError> {
        let items: Vec<String> = match self.max_width {
            Some(width) => items
                .iter()
                .map(|item| fit_label(item, width, self.ellipsis))
                .collect(),
            None => items.to_vec(),
        };

        let choice = Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .max_length(self.page_size)
            .interact_opt()
            .map_err(selection_error)?;

        choice.ok_or(SelectionError::Cancelled)
    }
}

fn selection_error(err: dialoguer::Error) -> SelectionError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            SelectionError::Interrupted
        }
        dialoguer::Error::IO(e) => SelectionError::Io(e),
    }
}

/// Clip `label` to at most `width` display columns, ending in `ellipsis`.
pub fn fit_label(label: &str, width: usize, ellipsis: &str) -> String {
    if label.width() <= width {
        return label.to_string();
    }

    let budget = width.saturating_sub(ellipsis.width());
    let mut used = 0;
    let mut out = String::new();
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ellipsis);
    out
}
