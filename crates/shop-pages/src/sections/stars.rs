//! Interactive star picker in the review form.

use shop_commerce::prelude::*;

/// Render the five star buttons plus the label for the committed value.
pub fn render_star_widget(rating: &StarRating) -> String {
    let buttons: String = (1..=StarRating::MAX)
        .map(|star| {
            let active = if rating.is_active(star) { " active" } else { "" };
            format!(
                r#"<button type="button" class="star{}" data-action="rate" data-value="{}" aria-label="{} star">★</button>"#,
                active, star, star
            )
        })
        .collect();

    format!(
        r#"<div class="star-rating" data-rating="{}">{}<span class="star-label">{}</span></div>"#,
        rating.value().unwrap_or(0),
        buttons,
        rating.label()
    )
}
