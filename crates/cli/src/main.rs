//! Docushop CLI - Cart, settings and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Add two notebooks to the cart
//! docushop cart add notebook --name "Notebook" --price 12.50 --qty 2
//!
//! # Change a quantity (text is coerced, minimum 1)
//! docushop cart set-qty notebook 3
//!
//! # Show the cart, or render it as an HTML table
//! docushop cart show
//! docushop cart show --html
//!
//! # Override the shipping fee
//! docushop settings shipping 9.99
//!
//! # List products from the product API, cheapest first
//! DOCUSHOP_API_URL=http://127.0.0.1:4000 docushop products list --sort price-asc
//! ```
//!
//! # Commands
//!
//! - `cart` - Inspect and change the file-backed cart
//! - `settings` - Inspect and change storefront settings
//! - `products` - List products and add them to the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use docushop_core::{Price, SortOrder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod page;

#[derive(Parser)]
#[command(name = "docushop")]
#[command(author, version, about = "Docushop storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect and change storefront settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart and its totals
    Show {
        /// Render the cart table as HTML on stdout
        #[arg(long)]
        html: bool,

        /// Checkout link used by the HTML table
        #[arg(long, default_value = "checkout.html")]
        checkout_url: String,
    },
    /// Add a product to the cart
    Add {
        /// Product identifier
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Unit price (e.g. 12.50)
        #[arg(short, long)]
        price: Price,

        /// Variant discriminator
        #[arg(short, long, default_value = "default")]
        variant: String,

        /// Quantity to add (missing, zero or negative means 1)
        #[arg(short, long, allow_negative_numbers = true)]
        qty: Option<i64>,
    },
    /// Remove a line from the cart
    Remove {
        /// Product identifier
        id: String,

        /// Variant discriminator
        #[arg(short, long, default_value = "default")]
        variant: String,
    },
    /// Set the quantity of a line
    SetQty {
        /// Product identifier
        id: String,

        /// New quantity; coerced to a whole number of at least 1
        #[arg(allow_hyphen_values = true)]
        qty: String,

        /// Variant discriminator
        #[arg(short, long, default_value = "default")]
        variant: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the stored settings
    Show,
    /// Set or clear the shipping fee override
    Shipping {
        /// Fee to charge (e.g. 9.99)
        #[arg(required_unless_present = "clear")]
        amount: Option<Price>,

        /// Remove the override and use the default fee
        #[arg(long, conflicts_with = "amount")]
        clear: bool,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
    List {
        /// Category to show (`all` for everything)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Sort order (`featured`, `latest`, `price-asc`, `price-desc`)
        #[arg(short, long, default_value = "featured")]
        sort: SortOrder,

        /// Render the product grid as HTML on stdout
        #[arg(long)]
        html: bool,
    },
    /// Add a catalog product to the cart
    Add {
        /// Product identifier
        id: String,

        /// Variant discriminator
        #[arg(short, long, default_value = "default")]
        variant: String,

        /// Quantity to add
        #[arg(short, long, allow_negative_numbers = true)]
        qty: Option<i64>,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "docushop_cli=info,docushop_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = docushop_storefront::config::StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show { html, checkout_url } => {
                commands::cart::show(&config, html, &checkout_url)?;
            }
            CartAction::Add {
                id,
                name,
                price,
                variant,
                qty,
            } => commands::cart::add(&config, id, name, price, variant, qty),
            CartAction::Remove { id, variant } => commands::cart::remove(&config, id, variant),
            CartAction::SetQty { id, qty, variant } => {
                commands::cart::set_qty(&config, id, variant, &qty);
            }
            CartAction::Clear => commands::cart::clear(&config),
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&config),
            SettingsAction::Shipping { amount, clear } => {
                let amount = if clear { None } else { amount };
                commands::settings::shipping(&config, amount)?;
            }
        },
        Commands::Products { action } => match action {
            ProductsAction::List {
                category,
                sort,
                html,
            } => commands::products::list(&config, &category, sort, html).await?,
            ProductsAction::Add { id, variant, qty } => {
                commands::products::add(&config, &id, variant, qty).await?;
            }
        },
    }
    Ok(())
}
