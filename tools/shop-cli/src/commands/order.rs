//! Place an order.

use anyhow::Result;
use dialoguer::Confirm;

use super::{finish, OrderArgs, OrderCommand};
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    match args.command {
        OrderCommand::Place { yes } => place(ctx, yes).await,
    }
}

async fn place(ctx: &Context, yes: bool) -> Result<()> {
    let mut session = ctx.session("cart", "/cart");

    if !yes && !ctx.output.is_json() {
        let cart = session.api().get_cart().await?;
        ctx.output.info(&format!(
            "{} items, total {}",
            cart.total_quantity(),
            cart.total().display()
        ));

        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing order...");
    let outcome = session.place_order().await;
    spinner.finish_and_clear();

    if let Some(receipt) = finish(ctx, outcome)? {
        if ctx.output.is_json() {
            ctx.output.json(&receipt);
        } else {
            ctx.output.success(&receipt.confirmation());
        }
    }
    Ok(())
}
