//! Product card used in the listing grid.

use shop_commerce::prelude::*;

use crate::html::{escape_attr, escape_html};

/// Shown when a product has no image.
const IMAGE_PLACEHOLDER: &str = "🎁";

/// Render one product card.
///
/// The add-to-cart button carries `data-action` and `data-product-id`; the
/// listing controller dispatches clicks from those attributes.
pub fn render_product_card(product: &Product) -> String {
    let image = match product.image_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="product-image" loading="lazy">"#,
            escape_attr(url),
            escape_attr(&product.name)
        ),
        None => format!(
            r#"<div class="product-image-placeholder">{}</div>"#,
            IMAGE_PLACEHOLDER
        ),
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-media">
        {image}
    </div>
    <div class="product-info">
        <div class="product-chip">Featured</div>
        <h3 class="product-title">{name}</h3>
        <div class="product-meta">
            <span class="product-price">{price}</span>
            <span class="product-category">{category}</span>
        </div>
        <div class="product-actions">
            <a href="/products/{id}" class="product-view">View</a>
            <button type="button" class="add-to-cart" data-action="add-to-cart" data-product-id="{id}">Add to Cart</button>
        </div>
    </div>
</article>"#,
        id = product.id,
        image = image,
        name = escape_html(&product.name),
        price = product.price().display(),
        category = escape_html(product.category.as_deref().unwrap_or("")),
    )
}
