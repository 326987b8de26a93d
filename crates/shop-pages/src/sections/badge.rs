//! Navigation cart badge.

use shop_commerce::prelude::*;

/// Render the cart badge. Hidden while the count is zero.
pub fn render_badge(badge: &CartBadge) -> String {
    let hidden = if badge.is_visible() { "" } else { " hidden" };
    format!(
        r#"<span id="navCartBadge" class="cart-badge" data-count="{}" aria-label="{}"{}>{}</span>"#,
        badge.count(),
        badge.aria_label(),
        hidden,
        badge.text()
    )
}
