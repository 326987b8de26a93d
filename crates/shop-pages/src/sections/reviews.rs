//! Reviews list on the product detail page.

use shop_commerce::prelude::*;

use crate::html::escape_html;

/// `"4.5 (12 reviews)"`, zeros when the summary is missing.
pub fn render_rating_text(summary: &ReviewsSummary) -> String {
    summary.display()
}

/// Render the reviews list, or the empty state.
pub fn render_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return r#"<div id="reviewsList" class="reviews-list"><div class="reviews-empty">No reviews yet.</div></div>"#
            .to_string();
    }

    let items: String = reviews.iter().map(render_review).collect();
    format!(r#"<div id="reviewsList" class="reviews-list">{}</div>"#, items)
}

fn render_review(review: &Review) -> String {
    format!(
        r#"<div class="review">
    <div class="review-body">
        <div class="review-author">Customer</div>
        <div class="review-date">{}</div>
        <div class="review-comment">{}</div>
    </div>
    <div class="review-stars" aria-label="{} out of 5 stars">{}</div>
</div>"#,
        escape_html(&review.display_date()),
        escape_html(review.comment.as_deref().unwrap_or("")),
        review.filled_stars(),
        review.stars()
    )
}
