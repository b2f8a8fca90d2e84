//! Browse command
//!
//! Loads the document, builds the node tree and runs the navigator on the
//! terminal.

use anyhow::Result;

use jsonbrowser::config::{Config, ConfigWarning};
use jsonbrowser::presentation::Cli;
use jsonbrowser::{
    build_tree_with, load_document, BrowseError, DialoguerSelector, KeyOrder, MenuLabels,
    Navigator, ROOT_PATH,
};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::theme::BrowseTheme;

pub fn cmd_browse(
    cli: &Cli,
    config: &Config,
    warnings: &[ConfigWarning],
    ui: &UiContext,
) -> Result<()> {
    print_config_warnings(warnings, ui);

    let document = load_document(&cli.file)?;
    let order = if cli.sort_keys {
        KeyOrder::Sorted
    } else {
        config.key_order()
    };
    let root = build_tree_with(&document, ROOT_PATH, order);

    let selector = DialoguerSelector::new(Box::new(BrowseTheme::new(ui.color, ui.unicode)))
        .with_page_size(cli.page_size.unwrap_or(config.menu.page_size))
        .with_max_width(ui.label_width(), ui.ellipsis());

    Navigator::new(&root)
        .with_labels(MenuLabels::for_terminal(ui.unicode))
        .run(selector)
        .map_err(BrowseError::from)?;

    Ok(())
}
