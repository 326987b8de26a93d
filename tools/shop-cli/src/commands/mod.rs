//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod order;
pub mod product;
pub mod review;
pub mod search;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use shop_pages::{ActionOutcome, Navigation};

use crate::context::Context;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to search for.
    #[arg(short, long)]
    pub q: Option<String>,

    /// Category filter, matched client-side.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort key: popular, newest, price_asc, price_desc, rating.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Print the rendered page instead of a table.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: i64,

    /// Print the rendered page instead of a summary.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show {
        /// Print the rendered page instead of a table.
        #[arg(long)]
        html: bool,
    },
    /// Add a product.
    Add {
        /// Product id.
        product_id: i64,
        /// Quantity to add.
        #[arg(short, long)]
        qty: Option<i64>,
    },
    /// Change a line's quantity.
    Update {
        /// Cart item id.
        item_id: i64,
        /// New quantity (at least 1).
        qty: i64,
    },
    /// Remove a line.
    Remove {
        /// Cart item id.
        item_id: i64,
    },
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Subcommand)]
pub enum OrderCommand {
    /// Place an order for everything in the cart.
    Place {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Product id.
    pub id: i64,

    /// Star rating, 1 to 5.
    #[arg(short, long)]
    pub rating: Option<i64>,

    /// Review text.
    #[arg(short, long, default_value = "")]
    pub comment: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default storefront.toml.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Turn a page outcome into a command result.
pub(crate) fn finish<T>(ctx: &Context, outcome: ActionOutcome<T>) -> Result<Option<T>> {
    match outcome {
        ActionOutcome::Done(value) => Ok(Some(value)),
        ActionOutcome::Failed(message) => bail!(message),
        ActionOutcome::LoginRequired(nav) => bail!(login_message(&nav)),
        ActionOutcome::Skipped => {
            ctx.output.warn("Nothing to do");
            Ok(None)
        }
    }
}

/// Message for a navigation to the login page.
pub(crate) fn login_message(nav: &Navigation) -> String {
    match nav {
        Navigation::Navigate(url) => format!(
            "Login required ({}); set api.session_cookie in storefront.toml",
            url
        ),
        Navigation::Reload => "Login required".to_string(),
    }
}

/// Print queued alerts as errors and fail when there were any.
pub(crate) fn fail_on_alerts(alerts: Vec<String>) -> Result<()> {
    match alerts.into_iter().next() {
        Some(first) => bail!(first),
        None => Ok(()),
    }
}
