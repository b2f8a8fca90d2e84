use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use jsonbrowser::config::{ColorMode, Config};
use jsonbrowser::presentation::ColorWhen;

/// Columns taken by the selection pointer in front of each menu entry.
const POINTER_COLUMNS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            caps,
            color,
            unicode,
        }
    }

    /// Widest menu entry that fits on one terminal row.
    pub fn label_width(&self) -> usize {
        usize::from(self.caps.width.saturating_sub(POINTER_COLUMNS).max(1))
    }

    /// Marker for clipped menu entries.
    pub fn ellipsis(&self) -> &'static str {
        if self.unicode {
            "…"
        } else {
            "..."
        }
    }
}
