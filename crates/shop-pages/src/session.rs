//! Cart actions shared by every storefront page.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use shop_commerce::prelude::*;
use shop_data::{ApiError, StorefrontApi};
use shop_observability::StructuredLogger;

use crate::html::escape_html;
use crate::location::{Navigation, PageLocation};
use crate::sections::render_badge;
use crate::toast::{ToastNotifier, ToastVariant};

const ADD_TO_CART_FALLBACK: &str = "Failed to add to cart";
const CHECKOUT_FALLBACK: &str = "Checkout failed";
const CART_UPDATE_FALLBACK: &str = "Could not update cart";

const ADD_ERROR_TOAST: Duration = Duration::from_millis(4000);
const CHECKOUT_ERROR_TOAST: Duration = Duration::from_millis(5000);

/// Inline status line a page can show next to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusSlot {
    /// Next to add-to-cart buttons.
    AddToCart,
    /// On the cart page, next to line controls.
    Cart,
    /// Under the checkout button.
    Order,
}

impl StatusSlot {
    /// DOM id of the status element.
    pub fn element_id(&self) -> &'static str {
        match self {
            StatusSlot::AddToCart => "add-msg",
            StatusSlot::Cart => "cart-msg",
            StatusSlot::Order => "order-msg",
        }
    }
}

/// Result of a cart action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T> {
    /// The server accepted the action.
    Done(T),
    /// The action failed; the message has been shown to the user.
    Failed(String),
    /// The server wants a login first.
    LoginRequired(Navigation),
    /// Nothing was sent.
    Skipped,
}

impl<T> ActionOutcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, ActionOutcome::Done(_))
    }

    /// Navigation the page should perform, if any.
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            ActionOutcome::LoginRequired(nav) => Some(nav.clone()),
            _ => None,
        }
    }

    pub fn done(self) -> Option<T> {
        match self {
            ActionOutcome::Done(value) => Some(value),
            _ => None,
        }
    }
}

/// State one page load owns: the cart badge, toasts, status lines and
/// pending alerts, plus the API client those actions go through.
pub struct StorefrontSession {
    api: StorefrontApi,
    location: PageLocation,
    logger: StructuredLogger,
    badge: CartBadge,
    toasts: ToastNotifier,
    status: BTreeMap<StatusSlot, String>,
    alerts: Vec<String>,
}

impl StorefrontSession {
    pub fn new(api: StorefrontApi, location: PageLocation, logger: StructuredLogger) -> Self {
        Self {
            api,
            location,
            logger,
            badge: CartBadge::default(),
            toasts: ToastNotifier::new(),
            status: BTreeMap::new(),
            alerts: Vec::new(),
        }
    }

    /// Seed the badge with the count the server rendered into the page.
    pub fn with_badge_count(mut self, count: i64) -> Self {
        self.badge.set(count);
        self
    }

    pub fn api(&self) -> &StorefrontApi {
        &self.api
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    pub fn badge(&self) -> &CartBadge {
        &self.badge
    }

    pub fn badge_mut(&mut self) -> &mut CartBadge {
        &mut self.badge
    }

    pub fn toasts(&self) -> &ToastNotifier {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastNotifier {
        &mut self.toasts
    }

    /// Current text of a status line.
    pub fn status(&self, slot: StatusSlot) -> Option<&str> {
        self.status.get(&slot).map(String::as_str)
    }

    fn set_status(&mut self, slot: StatusSlot, text: impl Into<String>) {
        self.status.insert(slot, text.into());
    }

    /// Queue a blocking alert.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    /// Alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Add `quantity` (default 1) of a product to the cart.
    ///
    /// On success the badge is bumped right away and then reconciled with
    /// the server's cart. The bump is never rolled back.
    pub async fn add_to_cart(
        &mut self,
        product_id: ProductId,
        quantity: Option<i64>,
    ) -> ActionOutcome<()> {
        let quantity = quantity.filter(|q| *q != 0).unwrap_or(1);

        match self.api.add_cart_item(product_id, quantity).await {
            Ok(_) => {
                self.logger.info_with(
                    "added to cart",
                    &[("product_id", &product_id), ("quantity", &quantity)],
                );
                self.set_status(StatusSlot::AddToCart, "Added to cart.");
                self.toasts.show("Added to cart", ToastVariant::Success);
                self.badge.bump(quantity);
                self.refresh_cart_count().await;
                ActionOutcome::Done(())
            }
            Err(err) => self.fail(
                err,
                StatusSlot::AddToCart,
                ADD_TO_CART_FALLBACK,
                ADD_ERROR_TOAST,
            ),
        }
    }

    /// Set the badge from the server cart. Failures leave it unchanged.
    pub async fn refresh_cart_count(&mut self) -> Option<i64> {
        match self.api.get_cart().await {
            Ok(cart) => {
                let count = cart.total_quantity();
                self.badge.set(count);
                Some(count)
            }
            Err(err) => {
                self.logger
                    .warn_with("cart refresh failed", &[("error", &err)]);
                None
            }
        }
    }

    /// Change a cart line's quantity. Quantities below 1 are ignored.
    pub async fn update_quantity(&mut self, item: CartItemId, quantity: i64) -> ActionOutcome<()> {
        if quantity < 1 {
            return ActionOutcome::Skipped;
        }
        match self.api.update_cart_item(item, quantity).await {
            Ok(()) => {
                self.logger.info_with(
                    "cart line updated",
                    &[("item", &item), ("quantity", &quantity)],
                );
                ActionOutcome::Done(())
            }
            Err(err) => self.fail_quietly(err, StatusSlot::Cart, CART_UPDATE_FALLBACK),
        }
    }

    /// Remove a cart line.
    pub async fn remove_item(&mut self, item: CartItemId) -> ActionOutcome<()> {
        match self.api.remove_cart_item(item).await {
            Ok(()) => {
                self.logger.info_with("cart line removed", &[("item", &item)]);
                ActionOutcome::Done(())
            }
            Err(err) => self.fail_quietly(err, StatusSlot::Cart, CART_UPDATE_FALLBACK),
        }
    }

    /// Turn the cart into an order.
    pub async fn place_order(&mut self) -> ActionOutcome<OrderReceipt> {
        match self.api.place_order().await {
            Ok(receipt) => {
                let order_id = receipt
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                self.logger
                    .info_with("order placed", &[("order_id", &order_id)]);
                self.set_status(StatusSlot::Order, receipt.confirmation());
                self.toasts
                    .show("Order placed successfully", ToastVariant::Success);
                self.badge.set(0);
                self.refresh_cart_count().await;
                ActionOutcome::Done(receipt)
            }
            Err(err) => self.fail(err, StatusSlot::Order, CHECKOUT_FALLBACK, CHECKOUT_ERROR_TOAST),
        }
    }

    /// Status line, error toast and a log line for a failed action.
    fn fail<T>(
        &mut self,
        err: ApiError,
        slot: StatusSlot,
        fallback: &str,
        toast_for: Duration,
    ) -> ActionOutcome<T> {
        if let ApiError::AuthRequired = err {
            return self.login_required();
        }
        let message = err.user_message(fallback);
        self.log_failure(&err, slot);
        self.set_status(slot, message.clone());
        self.toasts.show_for(message.clone(), ToastVariant::Error, toast_for);
        ActionOutcome::Failed(message)
    }

    /// Status line and a log line, no toast.
    fn fail_quietly<T>(&mut self, err: ApiError, slot: StatusSlot, fallback: &str) -> ActionOutcome<T> {
        if let ApiError::AuthRequired = err {
            return self.login_required();
        }
        let message = err.user_message(fallback);
        self.log_failure(&err, slot);
        self.set_status(slot, message.clone());
        ActionOutcome::Failed(message)
    }

    /// Server-side faults log at error level, rejected requests at warn.
    fn log_failure(&self, err: &ApiError, slot: StatusSlot) {
        let element = slot.element_id();
        let fields: [(&str, &dyn fmt::Display); 2] = [("slot", &element), ("error", err)];
        let server_fault = matches!(err, ApiError::Network(_) | ApiError::Decode(_))
            || err.status().is_some_and(|status| status >= 500);
        if server_fault {
            self.logger.error_with("action failed", &fields);
        } else {
            self.logger.warn_with("action failed", &fields);
        }
    }

    pub(crate) fn login_required<T>(&mut self) -> ActionOutcome<T> {
        self.logger.info("login required");
        ActionOutcome::LoginRequired(self.location.login_redirect())
    }

    /// Render one status line.
    pub fn render_status(&self, slot: StatusSlot) -> String {
        format!(
            r#"<p id="{}" class="status-msg" role="status">{}</p>"#,
            slot.element_id(),
            escape_html(self.status(slot).unwrap_or(""))
        )
    }

    /// Render the navigation badge.
    pub fn render_badge(&self) -> String {
        render_badge(&self.badge)
    }

    /// Render the toast container.
    pub fn render_toasts(&self) -> String {
        self.toasts.render()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use shop_data::{Method, StubTransport};

    use super::*;
    use crate::test_support::{logged_session_at, session_at};

    #[tokio::test]
    async fn test_add_to_cart_bumps_then_reconciles() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::POST, "/api/cart/items", 201, json!({"id": 1}))
                .json(
                    Method::GET,
                    "/api/cart",
                    200,
                    json!({"items": [{"quantity": 3}, {"quantity": 2}]}),
                ),
        );
        let mut session = session_at(&stub, "/products").with_badge_count(3);

        let outcome = session.add_to_cart(ProductId::new(4), Some(2)).await;
        assert!(outcome.is_done());
        assert_eq!(session.badge().count(), 5);
        assert_eq!(session.status(StatusSlot::AddToCart), Some("Added to cart."));
        assert_eq!(session.toasts().latest().unwrap().message, "Added to cart");

        let body = stub.requests_to(&Method::POST, "/api/cart/items")[0]
            .json_body()
            .unwrap();
        assert_eq!(body, json!({"product_id": 4, "quantity": 2}));
    }

    #[tokio::test]
    async fn test_add_to_cart_defaults_quantity() {
        let stub = Arc::new(StubTransport::new().json(
            Method::POST,
            "/api/cart/items",
            201,
            json!({}),
        ));
        let mut session = session_at(&stub, "/products");
        session.add_to_cart(ProductId::new(1), None).await;

        let body = stub.requests()[0].json_body().unwrap();
        assert_eq!(body["quantity"], 1);
    }

    #[tokio::test]
    async fn test_badge_bump_survives_failed_refresh() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::POST, "/api/cart/items", 201, json!({}))
                .fail(Method::GET, "/api/cart", "offline"),
        );
        let mut session = session_at(&stub, "/products").with_badge_count(9);
        session.add_to_cart(ProductId::new(1), Some(1)).await;
        assert_eq!(session.badge().count(), 10);
        assert_eq!(session.badge().text(), "9+");
    }

    #[tokio::test]
    async fn test_add_to_cart_failure_uses_server_message() {
        let stub = Arc::new(StubTransport::new().json(
            Method::POST,
            "/api/cart/items",
            409,
            json!({"error": {"code": "conflict", "message": "Out of stock"}}),
        ));
        let mut session = session_at(&stub, "/products").with_badge_count(2);

        let outcome = session.add_to_cart(ProductId::new(1), Some(1)).await;
        assert_eq!(outcome, ActionOutcome::Failed("Out of stock".to_string()));
        assert_eq!(session.badge().count(), 2);
        let toast = session.toasts().latest().unwrap();
        assert_eq!(toast.variant, ToastVariant::Error);
        assert_eq!(toast.duration, Duration::from_millis(4000));
    }

    #[tokio::test]
    async fn test_add_to_cart_network_failure_fallback() {
        let stub = Arc::new(StubTransport::new().fail(Method::POST, "/api/cart/items", "offline"));
        let mut session = session_at(&stub, "/products");
        let outcome = session.add_to_cart(ProductId::new(1), None).await;
        assert_eq!(outcome, ActionOutcome::Failed("Failed to add to cart".to_string()));
        assert_eq!(session.status(StatusSlot::AddToCart), Some("Failed to add to cart"));
    }

    #[tokio::test]
    async fn test_add_to_cart_unauthorized_redirects() {
        let stub = Arc::new(StubTransport::new().json(
            Method::POST,
            "/api/cart/items",
            401,
            json!({"error": "Authentication required"}),
        ));
        let mut session = session_at(&stub, "/products/4");
        let outcome = session.add_to_cart(ProductId::new(4), None).await;
        assert_eq!(
            outcome.navigation(),
            Some(Navigation::Navigate("/login?redirect=%2Fproducts%2F4".to_string()))
        );
        assert!(session.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_update_quantity_below_one_is_noop() {
        let stub = Arc::new(StubTransport::new());
        let mut session = session_at(&stub, "/cart");
        let outcome = session.update_quantity(CartItemId::new(1), 0).await;
        assert_eq!(outcome, ActionOutcome::Skipped);
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_remove_item_failure_sets_status() {
        let stub = Arc::new(StubTransport::new().json(
            Method::DELETE,
            "/api/cart/items/2",
            500,
            json!({}),
        ));
        let mut session = session_at(&stub, "/cart");
        let outcome = session.remove_item(CartItemId::new(2)).await;
        assert_eq!(outcome, ActionOutcome::Failed("Could not update cart".to_string()));
        assert!(session.render_status(StatusSlot::Cart).contains("Could not update cart"));
    }

    #[tokio::test]
    async fn test_place_order_resets_badge() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::POST, "/api/orders", 201, json!({"id": 17}))
                .json(Method::GET, "/api/cart", 200, json!({"items": []})),
        );
        let mut session = session_at(&stub, "/cart").with_badge_count(4);

        let receipt = session.place_order().await.done().unwrap();
        assert_eq!(receipt.id, Some(OrderId::new(17)));
        assert_eq!(session.status(StatusSlot::Order), Some("Order placed! Order ID: 17"));
        assert_eq!(session.badge().count(), 0);
        assert!(!session.badge().is_visible());
    }

    #[tokio::test]
    async fn test_place_order_without_receipt_id() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::POST, "/api/orders", 201, json!({"order_id": "A-5"}))
                .json(Method::GET, "/api/cart", 200, json!({"items": []})),
        );
        let mut session = session_at(&stub, "/cart").with_badge_count(4);

        let outcome = session.place_order().await;
        assert!(outcome.is_done());
        assert_eq!(session.status(StatusSlot::Order), Some("Order placed!"));
        assert_eq!(session.badge().count(), 0);
        assert_eq!(session.toasts().latest().unwrap().variant, ToastVariant::Success);
    }

    #[tokio::test]
    async fn test_place_order_failure() {
        let stub = Arc::new(StubTransport::new().json(
            Method::POST,
            "/api/orders",
            400,
            json!({"error": "Cart is empty"}),
        ));
        let mut session = session_at(&stub, "/cart");
        let outcome = session.place_order().await;
        assert_eq!(outcome, ActionOutcome::Failed("Cart is empty".to_string()));
        assert_eq!(
            session.toasts().latest().unwrap().duration,
            Duration::from_millis(5000)
        );
    }

    #[tokio::test]
    async fn test_failure_log_levels() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::POST, "/api/orders", 503, json!({}))
                .json(Method::POST, "/api/cart/items", 400, json!({"error": "Out of stock"})),
        );
        let mut session = logged_session_at(&stub, "/cart");

        session.place_order().await;
        session.add_to_cart(ProductId::new(3), Some(1)).await;

        let lines = session.logger().captured();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""level":"error""#));
        assert!(lines[0].contains("order-msg"));
        assert!(lines[1].contains(r#""level":"warn""#));
        assert!(lines[1].contains("Out of stock"));
    }

    #[test]
    fn test_alerts_drain() {
        let stub = Arc::new(StubTransport::new());
        let mut session = session_at(&stub, "/");
        session.alert("Please select a rating.");
        assert_eq!(session.take_alerts(), vec!["Please select a rating.".to_string()]);
        assert!(session.take_alerts().is_empty());
    }
}
