//! Diagnostic logging to stderr, controlled by `-v`.

use tracing::Level;

/// Install the global subscriber. Menus own stdout and stderr's interactive
/// rows, so anything below WARN stays silent unless asked for.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbose))
        .with_target(false)
        .without_time()
        .try_init();
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
