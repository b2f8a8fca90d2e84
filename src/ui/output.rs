use jsonbrowser::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        eprintln!("{}", render_config_warning(w, ui.color, ui.unicode));
    }
}

fn render_config_warning(w: &ConfigWarning, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    let mut out = format!(
        "{} {}",
        icon,
        ColoredText::warning(format!("Unknown config key '{}' in {}", w.key, location))
            .render(supports_color)
    );

    if let Some(suggestion) = &w.suggestion {
        out.push('\n');
        out.push_str(
            &ColoredText::dim(format!("   Did you mean '{}'?", suggestion)).render(supports_color),
        );
    }
    out
}
