//! Product detail page: product fields, quantity stepper, review form.

use shop_commerce::prelude::*;
use shop_data::ApiError;

use crate::html::{escape_attr, escape_html};
use crate::location::Navigation;
use crate::sections::{render_rating_text, render_reviews, render_star_widget};
use crate::session::{ActionOutcome, StatusSlot, StorefrontSession};
use crate::toast::ToastId;

const REVIEW_FALLBACK: &str = "Failed to submit review";

/// Text filled into the detail template.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailView {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image_src: String,
    pub image_alt: String,
    pub rating_text: String,
    pub reviews_html: String,
}

impl ProductDetailView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price().display(),
            description: product.description.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            image_src: product.image_url.clone().unwrap_or_default(),
            image_alt: product.name.clone(),
            rating_text: render_rating_text(&product.summary()),
            reviews_html: render_reviews(&product.reviews),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<h1 id="pdName">{}</h1>
<div id="pdPrice">{}</div>
<p id="pdDesc">{}</p>
<span id="pdCategory">{}</span>
<img id="pdImg" src="{}" alt="{}">
<span id="pdRatingText">{}</span>
{}"#,
            escape_html(&self.name),
            self.price,
            escape_html(&self.description),
            escape_html(&self.category),
            escape_attr(&self.image_src),
            escape_attr(&self.image_alt),
            self.rating_text,
            self.reviews_html
        )
    }
}

/// User input on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    /// Quantity stepper pressed; `+1` or `-1`.
    ChangeQuantity(i64),
    AddToCart,
    StarHover(u8),
    StarLeave,
    StarClicked(i64),
    CommentInput(String),
    SubmitReview,
    DismissToast(ToastId),
}

/// Controller for `/products/{id}`.
pub struct ProductDetailPage {
    session: StorefrontSession,
    product_id: ProductId,
    product: Option<Product>,
    view: Option<ProductDetailView>,
    error: Option<String>,
    quantity: QuantitySelector,
    rating: StarRating,
    comment: String,
}

impl ProductDetailPage {
    /// Fetch the product and build the page.
    pub async fn load(session: StorefrontSession, product_id: ProductId) -> Self {
        let mut page = Self {
            session,
            product_id,
            product: None,
            view: None,
            error: None,
            quantity: QuantitySelector::new(Money::usd(0), None),
            rating: StarRating::new(),
            comment: String::new(),
        };

        match page.session.api().get_product(product_id).await {
            Ok(product) => {
                page.session.logger().info_with(
                    "product loaded",
                    &[("product_id", &product_id), ("reviews", &product.reviews.len())],
                );
                page.quantity = QuantitySelector::new(product.price(), product.stock_qty);
                page.view = Some(ProductDetailView::from_product(&product));
                page.product = Some(product);
            }
            Err(err) => {
                page.session.logger().warn_with(
                    "product load failed",
                    &[("product_id", &product_id), ("error", &err)],
                );
                page.error = Some(err.user_message("Product unavailable"));
            }
        }
        page
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn view(&self) -> Option<&ProductDetailView> {
        self.view.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn quantity(&self) -> &QuantitySelector {
        &self.quantity
    }

    pub fn rating(&self) -> &StarRating {
        &self.rating
    }

    /// Characters typed into the review comment.
    pub fn char_count(&self) -> usize {
        self.draft().char_count()
    }

    pub fn session(&self) -> &StorefrontSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut StorefrontSession {
        &mut self.session
    }

    fn draft(&self) -> ReviewDraft {
        ReviewDraft::new(self.rating.value(), self.comment.as_str())
    }

    /// Apply one event. Returns the navigation it triggers, if any.
    pub async fn handle(&mut self, event: DetailEvent) -> Option<Navigation> {
        match event {
            DetailEvent::ChangeQuantity(delta) => {
                self.quantity.change(delta);
                None
            }
            DetailEvent::AddToCart => self.add_to_cart().await,
            DetailEvent::StarHover(star) => {
                self.rating.hover(star);
                None
            }
            DetailEvent::StarLeave => {
                self.rating.leave();
                None
            }
            DetailEvent::StarClicked(star) => {
                self.rating.set(star);
                None
            }
            DetailEvent::CommentInput(text) => {
                self.comment = text;
                None
            }
            DetailEvent::SubmitReview => self.submit_review().await,
            DetailEvent::DismissToast(id) => {
                self.session.toasts_mut().dismiss(id);
                None
            }
        }
    }

    /// Add the selected quantity to the cart.
    pub async fn add_to_cart(&mut self) -> Option<Navigation> {
        let quantity = self.quantity.quantity();
        self.session
            .add_to_cart(self.product_id, Some(quantity))
            .await
            .navigation()
    }

    /// Validate and post the review form. A posted review reloads the page.
    pub async fn submit_review(&mut self) -> Option<Navigation> {
        let draft = self.draft();
        if let Err(err) = draft.validate() {
            self.session.alert(err.to_string());
            return None;
        }

        match self.session.api().submit_review(self.product_id, &draft).await {
            Ok(receipt) => {
                let review_id = receipt
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                self.session.logger().info_with(
                    "review submitted",
                    &[("product_id", &self.product_id), ("review_id", &review_id)],
                );
                Some(Navigation::Reload)
            }
            Err(ApiError::AuthRequired) => {
                let outcome: ActionOutcome<()> = self.session.login_required();
                outcome.navigation()
            }
            Err(err) => {
                self.session
                    .logger()
                    .warn_with("review failed", &[("error", &err)]);
                self.session.alert(err.user_message(REVIEW_FALLBACK));
                None
            }
        }
    }

    /// Quantity stepper with the running total.
    pub fn render_quantity(&self) -> String {
        format!(
            r#"<div class="qty-stepper" data-max-qty="{}">
    <button type="button" data-action="qty" data-delta="-1" aria-label="Decrease quantity">-</button>
    <span id="qtyValue">{}</span>
    <button type="button" data-action="qty" data-delta="1" aria-label="Increase quantity">+</button>
</div>
<button type="button" id="stickyAddBtn" data-action="add-to-cart">{}</button>"#,
            self.quantity.max(),
            self.quantity.quantity(),
            self.quantity.total().display()
        )
    }

    /// Review form: star picker, comment box, character counter.
    pub fn render_review_form(&self) -> String {
        format!(
            r#"<form class="review-form" data-action="submit-review">
    {}
    <textarea name="comment">{}</textarea>
    <span id="charCount">{}</span>
    <button type="submit">Submit review</button>
</form>"#,
            render_star_widget(&self.rating),
            escape_html(&self.comment),
            self.char_count()
        )
    }

    /// Render the whole page body.
    pub fn render(&self) -> String {
        let main = match (&self.view, &self.error) {
            (Some(view), _) => format!(
                "{}\n{}\n{}\n{}",
                view.render(),
                self.render_quantity(),
                self.session.render_status(StatusSlot::AddToCart),
                self.render_review_form()
            ),
            (None, Some(message)) => format!(
                r#"<div class="detail-error" role="alert">{}</div>"#,
                escape_html(message)
            ),
            (None, None) => String::new(),
        };

        format!(
            r#"{}
<section id="productDetail" data-product-detail data-product-id="{}">
{}
</section>
{}"#,
            self.session.render_badge(),
            self.product_id,
            main,
            self.session.render_toasts()
        )
    }
}
