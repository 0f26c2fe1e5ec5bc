//! Subcommand implementations.

pub mod cart;
pub mod products;
pub mod settings;

use std::io::Write;

use askama::Template;
use docushop_storefront::cart::CartStore;
use docushop_storefront::config::StorefrontConfig;
use docushop_storefront::render::install_default_views;
use docushop_storefront::storage::FileStorage;

use crate::page::ConsolePage;

/// Errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Storefront(#[from] docushop_storefront::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("No product with id {0}")]
    ProductNotFound(String),
}

/// Result type for commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Open the file-backed cart with the console views attached.
pub fn open_store(config: &StorefrontConfig) -> CartStore<FileStorage> {
    tracing::debug!(file = %config.storage_file.display(), "Opening cart storage");
    let storage = FileStorage::new(config.storage_file.clone());
    let mut store = CartStore::with_keys(storage, config.keys.clone());
    install_default_views(&mut store, &ConsolePage, &ConsolePage::surfaces());
    store
}

/// Render `template` and print it on stdout.
fn print_html(template: &impl Template) -> Result<()> {
    let html = template
        .render()
        .map_err(docushop_storefront::Error::from)?;
    writeln!(std::io::stdout().lock(), "{html}")?;
    Ok(())
}
