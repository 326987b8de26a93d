//! Cart page: line quantities, removal, checkout.

use shop_commerce::prelude::*;

use crate::html::escape_html;
use crate::location::Navigation;
use crate::session::{ActionOutcome, StatusSlot, StorefrontSession};
use crate::toast::ToastId;

/// User input on the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    QuantityChanged { item: CartItemId, quantity: i64 },
    RemoveClicked(CartItemId),
    PlaceOrderClicked,
    DismissToast(ToastId),
}

/// Controller for `/cart`.
pub struct CartPage {
    session: StorefrontSession,
    cart: Option<CartSnapshot>,
    error: Option<String>,
}

impl CartPage {
    /// Fetch the cart and sync the badge with it.
    pub async fn load(mut session: StorefrontSession) -> Self {
        let (cart, error) = match session.api().get_cart().await {
            Ok(cart) => (Some(cart), None),
            Err(err) => {
                session
                    .logger()
                    .warn_with("cart load failed", &[("error", &err)]);
                (None, Some(err.user_message("Unable to load cart")))
            }
        };
        if let Some(cart) = &cart {
            session.badge_mut().set(cart.total_quantity());
        }
        Self {
            session,
            cart,
            error,
        }
    }

    pub fn cart(&self) -> Option<&CartSnapshot> {
        self.cart.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session(&self) -> &StorefrontSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut StorefrontSession {
        &mut self.session
    }

    /// Apply one event. Line changes reload the page once the server
    /// accepts them.
    pub async fn handle(&mut self, event: CartEvent) -> Option<Navigation> {
        match event {
            CartEvent::QuantityChanged { item, quantity } => {
                reload_when_done(self.session.update_quantity(item, quantity).await)
            }
            CartEvent::RemoveClicked(item) => {
                reload_when_done(self.session.remove_item(item).await)
            }
            CartEvent::PlaceOrderClicked => self.session.place_order().await.navigation(),
            CartEvent::DismissToast(id) => {
                self.session.toasts_mut().dismiss(id);
                None
            }
        }
    }

    fn render_line(line: &CartLine) -> String {
        let item = line.id.map(|id| id.to_string()).unwrap_or_default();
        let quantity = line.counted_quantity();
        format!(
            r#"<tr class="cart-line" data-item-id="{item}">
    <td class="cart-product">{product}</td>
    <td class="cart-qty">
        <button type="button" data-action="update-qty" data-item-id="{item}" data-qty="{minus}">-</button>
        <span>{qty}</span>
        <button type="button" data-action="update-qty" data-item-id="{item}" data-qty="{plus}">+</button>
    </td>
    <td class="cart-line-total">{total}</td>
    <td><button type="button" data-action="remove-item" data-item-id="{item}">Remove</button></td>
</tr>"#,
            item = item,
            product = line.product_id.map(|id| id.to_string()).unwrap_or_default(),
            minus = quantity - 1,
            plus = quantity + 1,
            qty = quantity,
            total = line.line_total().display(),
        )
    }

    /// Render the page body.
    pub fn render(&self) -> String {
        let body = match (&self.cart, &self.error) {
            (Some(cart), _) if cart.items.is_empty() => {
                r#"<p class="cart-empty">Your cart is empty.</p>"#.to_string()
            }
            (Some(cart), _) => {
                let lines: String = cart.items.iter().map(Self::render_line).collect();
                format!(
                    r#"<table class="cart-lines">{}</table>
<div class="cart-total">{}</div>
<button type="button" data-action="place-order">Place order</button>"#,
                    lines,
                    cart.total().display()
                )
            }
            (None, Some(message)) => format!(
                r#"<div class="cart-error" role="alert">{}</div>"#,
                escape_html(message)
            ),
            (None, None) => String::new(),
        };

        format!(
            "{}\n<section class=\"cart\" data-page=\"cart\">\n{}\n{}\n{}\n</section>\n{}",
            self.session.render_badge(),
            body,
            self.session.render_status(StatusSlot::Cart),
            self.session.render_status(StatusSlot::Order),
            self.session.render_toasts()
        )
    }
}

fn reload_when_done(outcome: ActionOutcome<()>) -> Option<Navigation> {
    match outcome {
        ActionOutcome::Done(()) => Some(Navigation::Reload),
        other => other.navigation(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};
    use shop_data::{Method, StubTransport};

    use super::*;
    use crate::test_support::session_at;

    fn cart_json() -> Value {
        json!({"items": [
            {"id": 1, "product_id": 4, "quantity": 2, "unit_price_cents": 1050},
            {"id": 2, "product_id": 7, "quantity": 1, "unit_price_cents": 500}
        ]})
    }

    #[tokio::test]
    async fn test_load_syncs_badge_and_renders_lines() {
        let stub = Arc::new(StubTransport::new().json(Method::GET, "/api/cart", 200, cart_json()));
        let page = CartPage::load(session_at(&stub, "/cart")).await;

        assert_eq!(page.session().badge().count(), 3);
        let html = page.render();
        assert_eq!(html.matches("cart-line\"").count(), 2);
        assert!(html.contains("$21.00"));
        assert!(html.contains("$26.00"));
    }

    #[tokio::test]
    async fn test_quantity_change_reloads() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::GET, "/api/cart", 200, cart_json())
                .json(Method::PATCH, "/api/cart/items/1", 200, json!({})),
        );
        let mut page = CartPage::load(session_at(&stub, "/cart")).await;

        let nav = page
            .handle(CartEvent::QuantityChanged {
                item: CartItemId::new(1),
                quantity: 3,
            })
            .await;
        assert_eq!(nav, Some(Navigation::Reload));

        let skipped = page
            .handle(CartEvent::QuantityChanged {
                item: CartItemId::new(1),
                quantity: 0,
            })
            .await;
        assert_eq!(skipped, None);
        assert_eq!(stub.requests_to(&Method::PATCH, "/api/cart/items/1").len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unauthorized() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::GET, "/api/cart", 200, cart_json())
                .json(Method::DELETE, "/api/cart/items/2", 401, json!({})),
        );
        let mut page = CartPage::load(session_at(&stub, "/cart")).await;
        assert_eq!(
            page.handle(CartEvent::RemoveClicked(CartItemId::new(2))).await,
            Some(Navigation::Navigate("/login?redirect=%2Fcart".to_string()))
        );
    }

    #[tokio::test]
    async fn test_place_order_from_cart() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::GET, "/api/cart", 200, cart_json())
                .json(Method::GET, "/api/cart", 200, json!({"items": []}))
                .json(Method::POST, "/api/orders", 201, json!({"id": 31})),
        );
        let mut page = CartPage::load(session_at(&stub, "/cart")).await;
        assert_eq!(page.handle(CartEvent::PlaceOrderClicked).await, None);

        assert_eq!(page.session().badge().count(), 0);
        assert!(page.render().contains("Order placed! Order ID: 31"));
    }

    #[tokio::test]
    async fn test_empty_cart() {
        let stub = Arc::new(StubTransport::new().json(Method::GET, "/api/cart", 200, json!({})));
        let page = CartPage::load(session_at(&stub, "/cart")).await;
        assert!(page.render().contains("Your cart is empty."));
    }
}
