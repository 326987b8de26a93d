//! Search the product listing.

use anyhow::{bail, Result};
use shop_commerce::prelude::*;
use shop_pages::ListingPage;

use super::SearchArgs;
use crate::context::Context;
use crate::output::truncate;

/// Listing location for the given arguments.
pub fn location(args: &SearchArgs) -> String {
    let mut query = SearchQuery::new().with_query(args.q.clone().unwrap_or_default());
    if let Some(category) = &args.category {
        query = query.with_category(category.as_str());
    }
    if let Some(sort) = &args.sort {
        query = query.with_sort(SortOption::parse(sort));
    }
    query.location()
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let location = location(&args);
    ctx.output.debug(&format!("Loading {}", location));

    let spinner = ctx.output.spinner("Searching products...");
    let page = ListingPage::load(ctx.session("listing", &location)).await;
    spinner.finish_and_clear();

    let view = page.view();
    if let Some(error) = &view.error {
        bail!("Unable to load products: {}", error);
    }

    if args.html {
        ctx.output.raw(&page.render());
        return Ok(());
    }
    if ctx.output.is_json() {
        ctx.output.json(&view.products);
        return Ok(());
    }

    ctx.output.header(&format!("{} results", view.count));
    if view.raw_count != view.count {
        ctx.output
            .debug(&format!("{} returned, {} after filtering", view.raw_count, view.count));
    }

    let widths = [6, 32, 10, 16];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "CATEGORY"], &widths);
    for product in &view.products {
        let id = product.id.to_string();
        let name = truncate(&product.name, widths[1]);
        let price = product.price().display();
        ctx.output
            .table_row(&[id.as_str(), name.as_str(), price.as_str(), product.category_label()], &widths);
    }
    Ok(())
}
