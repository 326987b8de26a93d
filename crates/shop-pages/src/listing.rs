//! Product listing page: search form, post-filtered grid, add-to-cart.
//!
//! The page reads `q`, `category` and `sort` from its URL, fetches one page of
//! products, then keeps only the items matching both the text term and the
//! normalized category. Changing a control navigates to a new URL; nothing
//! is re-fetched in place.

use std::collections::BTreeSet;

use shop_commerce::prelude::*;

use crate::html::{escape_attr, escape_html};
use crate::location::Navigation;
use crate::sections::{render_grid, render_results_count, render_results_error};
use crate::session::{StatusSlot, StorefrontSession};
use crate::toast::ToastId;

/// Current values of the search controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchForm {
    pub q: String,
    pub category: String,
    pub sort: SortOption,
}

impl SearchForm {
    /// Control values for a parsed query.
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            q: query.q.clone(),
            category: query.category.clone().unwrap_or_default(),
            sort: query.sort,
        }
    }

    /// Query the form would submit.
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new()
            .with_query(self.q.as_str())
            .with_category(self.category.as_str())
            .with_sort(self.sort)
    }

    /// Render the search controls. `categories` fills the category select.
    pub fn render(&self, categories: &[String]) -> String {
        let mut category_options =
            String::from(r#"<option value="">All categories</option>"#);
        let mut listed: BTreeSet<&str> = categories.iter().map(String::as_str).collect();
        if !self.category.is_empty() {
            listed.insert(self.category.as_str());
        }
        for category in listed {
            category_options.push_str(&format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_attr(category),
                selected(category == self.category),
                escape_html(category)
            ));
        }

        let sort_options: String = SortOption::ALL
            .iter()
            .map(|sort| {
                format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    sort.as_str(),
                    selected(*sort == self.sort),
                    sort.display_name()
                )
            })
            .collect();

        format!(
            r#"<form class="search-form" role="search" data-action="search">
    <input id="q" type="search" name="q" value="{}" placeholder="Search products">
    <select id="category" name="category">{}</select>
    <select id="sort" name="sort">{}</select>
    <button type="button" id="clearBtn" data-action="clear">Clear</button>
</form>"#,
            escape_attr(&self.q),
            category_options,
            sort_options
        )
    }
}

fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}

/// What a listing page load produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub form: SearchForm,
    /// Items left after post-filtering.
    pub count: usize,
    /// Items the server returned before post-filtering.
    pub raw_count: usize,
    pub products: Vec<Product>,
    /// Distinct category labels in the unfiltered response.
    pub categories: Vec<String>,
    pub grid_html: String,
    pub error: Option<String>,
}

impl ListingView {
    fn loaded(form: SearchForm, raw: &[Product], outcome: SearchOutcome) -> Self {
        let categories: BTreeSet<String> = raw
            .iter()
            .map(|p| p.category_label().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        Self {
            form,
            count: outcome.count(),
            raw_count: outcome.raw_count,
            grid_html: render_grid(&outcome.items),
            products: outcome.items,
            categories: categories.into_iter().collect(),
            error: None,
        }
    }

    fn failed(form: SearchForm, message: String) -> Self {
        Self {
            form,
            count: 0,
            raw_count: 0,
            products: Vec::new(),
            categories: Vec::new(),
            grid_html: render_results_error(&message),
            error: Some(message),
        }
    }

    /// Render the listing body: controls, count, grid.
    pub fn render(&self) -> String {
        format!(
            r#"<section class="listing" data-page="products">
{}
<p class="results-summary">{} results</p>
{}
</section>"#,
            self.form.render(&self.categories),
            render_results_count(self.count),
            self.grid_html
        )
    }
}

/// User input on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    /// Text typed into the search box.
    QueryInput(String),
    /// Key pressed in the search box; `Enter` submits.
    QueryKeyDown(String),
    CategoryChanged(String),
    SortChanged(String),
    ClearClicked,
    AddToCart(ProductId),
    DismissToast(ToastId),
}

impl ListingEvent {
    /// Event for a click on an element carrying `data-action` and
    /// `data-product-id`.
    pub fn from_action(action: &str, product_id: Option<&str>) -> Option<Self> {
        match action {
            "add-to-cart" => product_id
                .and_then(|id| id.parse().ok())
                .map(ListingEvent::AddToCart),
            "clear" => Some(ListingEvent::ClearClicked),
            _ => None,
        }
    }
}

/// Controller for `/products`.
pub struct ListingPage {
    session: StorefrontSession,
    form: SearchForm,
    view: ListingView,
}

impl ListingPage {
    /// Load the page for the session's location.
    pub async fn load(session: StorefrontSession) -> Self {
        let query = SearchQuery::from_query_string(&session.location().query);
        let form = SearchForm::from_query(&query);

        let view = match session.api().list_products(&query).await {
            Ok(items) => {
                let raw = items.clone();
                let outcome = query.apply(items);
                session.logger().info_with(
                    "products loaded",
                    &[
                        ("returned", &outcome.raw_count),
                        ("shown", &outcome.count()),
                        ("sort", &query.sort.as_str()),
                    ],
                );
                ListingView::loaded(form.clone(), &raw, outcome)
            }
            Err(err) => {
                session
                    .logger()
                    .warn_with("product listing failed", &[("error", &err)]);
                ListingView::failed(form.clone(), err.user_message("Please try again."))
            }
        };

        Self {
            session,
            form,
            view,
        }
    }

    pub fn view(&self) -> &ListingView {
        &self.view
    }

    /// Live control values, which may differ from the loaded view.
    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn session(&self) -> &StorefrontSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut StorefrontSession {
        &mut self.session
    }

    /// Apply one event. Returns the navigation it triggers, if any.
    pub async fn handle(&mut self, event: ListingEvent) -> Option<Navigation> {
        match event {
            ListingEvent::QueryInput(text) => {
                self.form.q = text;
                None
            }
            ListingEvent::QueryKeyDown(key) => (key == "Enter").then(|| self.submit()),
            ListingEvent::CategoryChanged(category) => {
                self.form.category = category;
                Some(self.submit())
            }
            ListingEvent::SortChanged(sort) => {
                self.form.sort = SortOption::parse(&sort);
                Some(self.submit())
            }
            ListingEvent::ClearClicked => {
                Some(Navigation::Navigate(SearchQuery::cleared_location()))
            }
            ListingEvent::AddToCart(id) => self.session.add_to_cart(id, None).await.navigation(),
            ListingEvent::DismissToast(id) => {
                self.session.toasts_mut().dismiss(id);
                None
            }
        }
    }

    /// Location for the current control values.
    pub fn submit(&self) -> Navigation {
        Navigation::Navigate(self.form.to_query().location())
    }

    /// Render the page body plus badge and toasts.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            self.session.render_badge(),
            self.view.render(),
            self.session.render_status(StatusSlot::AddToCart),
            self.session.render_toasts()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};
    use shop_data::{Method, StubTransport};

    use super::*;
    use crate::test_support::session_at;

    fn catalog() -> Value {
        json!({"items": [
            {"id": 1, "name": "Red Rose", "description": "A single rose", "category": "Flowers", "price_cents": 1050},
            {"id": 2, "name": "Gift Box", "description": "Rose-scented candle inside", "category": "Gifts", "price_cents": 2500},
            {"id": 3, "name": "Rose Candle", "category": "Candles", "price_cents": 1800},
            {"id": 4, "name": "Tulip", "category": "Flower"}
        ]})
    }

    fn stub() -> Arc<StubTransport> {
        Arc::new(StubTransport::new().json(Method::GET, "/api/products", 200, catalog()))
    }

    #[tokio::test]
    async fn test_post_filter_text_and_category() {
        let stub = stub();
        let page = ListingPage::load(session_at(&stub, "/products?q=rose&category=Flower")).await;

        let view = page.view();
        assert_eq!(view.count, 1);
        assert_eq!(view.raw_count, 4);
        assert_eq!(view.products[0].name, "Red Rose");
        assert_eq!(view.grid_html.matches("product-card").count(), view.count);
    }

    #[tokio::test]
    async fn test_category_never_sent() {
        let stub = stub();
        ListingPage::load(session_at(&stub, "/products?q=rose&category=Gifts&sort=newest")).await;

        let sent = stub.requests_to(&Method::GET, "/api/products");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].query(), "limit=50&offset=0&q=rose&sort=newest");
    }

    #[tokio::test]
    async fn test_plural_category_matches_singular() {
        let stub = stub();
        let page = ListingPage::load(session_at(&stub, "/products?category=Candle")).await;
        assert_eq!(page.view().count, 1);
        assert_eq!(page.view().products[0].name, "Rose Candle");
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let stub = stub();
        let first = ListingPage::load(session_at(&stub, "/products?q=rose")).await;
        let second = ListingPage::load(session_at(&stub, "/products?q=rose")).await;
        assert_eq!(first.view(), second.view());
        assert_eq!(first.view().render(), second.view().render());
    }

    #[tokio::test]
    async fn test_form_reflects_url() {
        let stub = stub();
        let page = ListingPage::load(session_at(&stub, "/products?q=rose&category=Gifts")).await;
        let form = &page.view().form;
        assert_eq!(form.q, "rose");
        assert_eq!(form.category, "Gifts");
        assert_eq!(form.sort, SortOption::Popular);

        let html = page.view().render();
        assert!(html.contains(r#"value="rose""#));
        assert!(html.contains(r#"<option value="Gifts" selected>"#));
        assert!(html.contains(r#"<option value="popular" selected>"#));
    }

    #[tokio::test]
    async fn test_failure_renders_error_grid() {
        let stub = Arc::new(StubTransport::new().fail(Method::GET, "/api/products", "offline"));
        let page = ListingPage::load(session_at(&stub, "/products")).await;
        assert_eq!(page.view().count, 0);
        assert!(page.view().error.is_some());
        assert!(page.view().grid_html.contains("Unable to load products"));
    }

    #[tokio::test]
    async fn test_events_navigate() {
        let stub = stub();
        let mut page = ListingPage::load(session_at(&stub, "/products")).await;

        page.handle(ListingEvent::QueryInput("  lily ".to_string())).await;
        assert_eq!(page.handle(ListingEvent::QueryKeyDown("a".to_string())).await, None);
        assert_eq!(
            page.handle(ListingEvent::QueryKeyDown("Enter".to_string())).await,
            Some(Navigation::Navigate("/products?q=lily&sort=popular".to_string()))
        );
        assert_eq!(
            page.handle(ListingEvent::SortChanged("price_asc".to_string())).await,
            Some(Navigation::Navigate("/products?q=lily&sort=price_asc".to_string()))
        );
        assert_eq!(
            page.handle(ListingEvent::ClearClicked).await,
            Some(Navigation::Navigate("/products".to_string()))
        );
    }

    #[tokio::test]
    async fn test_card_click_adds_to_cart() {
        let stub = Arc::new(
            StubTransport::new()
                .json(Method::GET, "/api/products", 200, catalog())
                .json(Method::POST, "/api/cart/items", 201, json!({}))
                .json(Method::GET, "/api/cart", 200, json!({"items": [{"quantity": 1}]})),
        );
        let mut page = ListingPage::load(session_at(&stub, "/products")).await;

        let event = ListingEvent::from_action("add-to-cart", Some("2")).unwrap();
        assert_eq!(page.handle(event).await, None);
        assert_eq!(page.session().badge().count(), 1);
        assert!(page.render().contains("Added to cart."));
    }

    #[test]
    fn test_from_action() {
        assert_eq!(
            ListingEvent::from_action("add-to-cart", Some("7")),
            Some(ListingEvent::AddToCart(ProductId::new(7)))
        );
        assert_eq!(ListingEvent::from_action("add-to-cart", Some("x")), None);
        assert_eq!(ListingEvent::from_action("other", None), None);
    }
}
