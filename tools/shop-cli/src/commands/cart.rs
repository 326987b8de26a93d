//! Cart commands.

use anyhow::{bail, Result};
use shop_commerce::prelude::*;
use shop_pages::CartPage;

use super::{finish, CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Show { html } => show(ctx, html).await,
        CartCommand::Add { product_id, qty } => add(ctx, ProductId::new(product_id), qty).await,
        CartCommand::Update { item_id, qty } => update(ctx, CartItemId::new(item_id), qty).await,
        CartCommand::Remove { item_id } => remove(ctx, CartItemId::new(item_id)).await,
    }
}

async fn show(ctx: &Context, html: bool) -> Result<()> {
    let spinner = ctx.output.spinner("Loading cart...");
    let page = CartPage::load(ctx.session("cart", "/cart")).await;
    spinner.finish_and_clear();

    if let Some(error) = page.error() {
        bail!("Unable to load cart: {}", error);
    }
    if html {
        ctx.output.raw(&page.render());
        return Ok(());
    }
    let Some(cart) = page.cart() else {
        bail!("Cart returned no data");
    };
    if ctx.output.is_json() {
        ctx.output.json(cart);
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", cart.total_quantity()));
    if cart.items.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let widths = [6, 8, 5, 10];
    ctx.output.table_row(&["ITEM", "PRODUCT", "QTY", "TOTAL"], &widths);
    for line in &cart.items {
        let item = line.id.map(|id| id.to_string()).unwrap_or_default();
        let product = line.product_id.map(|id| id.to_string()).unwrap_or_default();
        let qty = line.counted_quantity().to_string();
        let total = line.line_total().display();
        ctx.output.table_row(&[item.as_str(), product.as_str(), qty.as_str(), total.as_str()], &widths);
    }
    ctx.output.kv("Total", &cart.total().display());
    Ok(())
}

async fn add(ctx: &Context, product_id: ProductId, qty: Option<i64>) -> Result<()> {
    let mut session = ctx.session("cart", &format!("/products/{}", product_id));
    let outcome = session.add_to_cart(product_id, qty).await;
    if finish(ctx, outcome)?.is_some() {
        ctx.output.success("Added to cart.");
        ctx.output
            .kv("Cart", &format!("{} ({})", session.badge().text(), session.badge().aria_label()));
    }
    Ok(())
}

async fn update(ctx: &Context, item: CartItemId, qty: i64) -> Result<()> {
    let mut session = ctx.session("cart", "/cart");
    let outcome = session.update_quantity(item, qty).await;
    if finish(ctx, outcome)?.is_some() {
        ctx.output
            .success(&format!("Item {} quantity set to {}", item, qty));
    }
    Ok(())
}

async fn remove(ctx: &Context, item: CartItemId) -> Result<()> {
    let mut session = ctx.session("cart", "/cart");
    let outcome = session.remove_item(item).await;
    if finish(ctx, outcome)?.is_some() {
        ctx.output.success(&format!("Item {} removed", item));
    }
    Ok(())
}
