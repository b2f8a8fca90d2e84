use crossterm::style::{Color, Stylize};
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the jsonbrowser UI.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "❯";
}

pub mod icons_ascii {
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";
}

// ----------------------------------------------------------------------------
// BrowseTheme - dialoguer theme for the navigation menu
// ----------------------------------------------------------------------------

/// Theme for the navigation menu using jsonbrowser design tokens.
///
/// Marks the active entry with `❯` (Unicode mode) or `>` (ASCII fallback).
/// With color enabled it wraps `ColorfulTheme` for prompt rendering and
/// highlights the active entry; without color everything is plain text.
pub struct BrowseTheme {
    color: bool,
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl BrowseTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            color,
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    /// Marker in front of the active entry.
    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }
}

impl Theme for BrowseTheme {
    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        if self.color {
            self.inner.format_select_prompt(f, prompt)
        } else {
            write!(f, "{}:", prompt)
        }
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        if self.color {
            self.inner.format_select_prompt_selection(f, prompt, sel)
        } else {
            write!(f, "{}: {}", prompt, sel)
        }
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if !active {
            return write!(f, "  {}", text);
        }

        if self.color {
            write!(
                f,
                "{} {}",
                self.pointer().with(colors::INFO),
                text.with(colors::INFO).bold()
            )
        } else {
            write!(f, "{} {}", self.pointer(), text)
        }
    }
}
