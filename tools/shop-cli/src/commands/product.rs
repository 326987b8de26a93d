//! Show one product with its reviews.

use anyhow::{bail, Result};
use shop_commerce::prelude::*;
use shop_pages::ProductDetailPage;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let path = format!("/products/{}", id);

    let spinner = ctx.output.spinner("Loading product...");
    let page = ProductDetailPage::load(ctx.session("detail", &path), id).await;
    spinner.finish_and_clear();

    if let Some(error) = page.error() {
        bail!("Unable to load product {}: {}", id, error);
    }
    if args.html {
        ctx.output.raw(&page.render());
        return Ok(());
    }

    let (Some(product), Some(view)) = (page.product(), page.view()) else {
        bail!("Product {} returned no data", id);
    };
    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&view.name);
    ctx.output.kv("Price", &view.price);
    if !view.category.is_empty() {
        ctx.output.kv("Category", &view.category);
    }
    ctx.output.kv("Rating", &view.rating_text);
    if let Some(stock) = product.stock_qty {
        ctx.output.kv("In stock", &stock.to_string());
    }
    if !view.description.is_empty() {
        ctx.output.kv("Description", &view.description);
    }

    ctx.output.header("Reviews");
    if product.reviews.is_empty() {
        ctx.output.info("No reviews yet.");
    }
    for review in &product.reviews {
        let mut line = review.stars();
        let date = review.display_date();
        if !date.is_empty() {
            line.push_str(&format!("  {}", date));
        }
        if let Some(comment) = review.comment.as_deref().filter(|c| !c.is_empty()) {
            line.push_str(&format!("  {}", comment));
        }
        ctx.output.list_item(&line);
    }
    Ok(())
}
