//! jsonbrowser CLI - Interactive terminal browser for JSON documents
//!
//! Usage: jsonbrowser [OPTIONS] <FILE>

mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use jsonbrowser::config::Config;
use jsonbrowser::presentation::parse_args;

use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(outcome) => {
            return match outcome.into_result() {
                Ok(info) => {
                    let _ = info.print();
                    ExitCode::SUCCESS
                }
                // No flags were parsed, so only the terminal decides color.
                Err(err) => {
                    let color = ui::terminal::detect_capabilities().supports_color;
                    report(&anyhow::Error::from(err), color)
                }
            };
        }
    };

    logging::init(cli.verbose);
    if let Err(e) = ui::terminal::install_interrupt_handler() {
        tracing::warn!("cannot install Ctrl-C handler: {}", e);
    }

    let (config, warnings) = match Config::load_or_default(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.color, &Config::default());
            return report(&anyhow::Error::from(err), ui.color);
        }
    };
    let ui = UiContext::new(cli.color, &config);

    match commands::browse::cmd_browse(&cli, &config, &warnings, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, ui.color),
    }
}

fn report(err: &anyhow::Error, color: bool) -> ExitCode {
    if ui::error::interrupted_menu(err) {
        ui::terminal::restore_cursor();
    }
    ui::error::print_error(err, color);
    ExitCode::from(ui::error::exit_code(err))
}
