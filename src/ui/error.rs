use jsonbrowser::BrowseError;

use crate::ui::primitives::text::ColoredText;

/// Message printed for a failed run.
///
/// `BrowseError` messages are printed as-is; anything else gets an `Error:`
/// prefix with its full context chain.
pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let message = match err.downcast_ref::<BrowseError>() {
        Some(browse) => browse.to_string(),
        None => format!("Error: {:#}", err),
    };
    ColoredText::error(message).render(supports_color)
}

/// Print the error message to stdout, colored when `color` is set.
pub fn print_error(err: &anyhow::Error, color: bool) {
    println!("{}", format_error(err, color));
}

/// Process exit status for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<BrowseError>()
        .map_or(1, BrowseError::exit_code);
    u8::try_from(code).unwrap_or(1)
}

/// Whether the failure interrupted a menu that was on screen.
pub fn interrupted_menu(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<BrowseError>(),
        Some(BrowseError::Selection(_))
    )
}
