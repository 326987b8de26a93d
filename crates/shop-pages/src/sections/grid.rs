//! Listing grid and result count.

use shop_commerce::prelude::*;

use super::card::render_product_card;
use crate::html::escape_html;

/// Render the grid of product cards.
pub fn render_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();
    format!(r#"<div id="grid" class="product-grid">{}</div>"#, cards)
}

/// Render the result count shown above the grid.
pub fn render_results_count(count: usize) -> String {
    format!(r#"<span id="resultsCount">{}</span>"#, count)
}

/// Render the grid in its error state.
pub fn render_results_error(message: &str) -> String {
    format!(
        r#"<div id="grid" class="product-grid">
    <div class="results-error" role="alert">
        <h2>Unable to load products</h2>
        <p>{}</p>
        <a href="/products" class="results-retry">Try again</a>
    </div>
</div>"#,
        escape_html(message)
    )
}
