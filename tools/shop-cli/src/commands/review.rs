//! Submit a product review.

use anyhow::{bail, Result};
use shop_commerce::prelude::*;
use shop_pages::{DetailEvent, Navigation, ProductDetailPage};

use super::{fail_on_alerts, login_message, ReviewArgs};
use crate::context::Context;

/// Run the review command.
pub async fn run(args: ReviewArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let path = format!("/products/{}", id);
    let mut page = ProductDetailPage::load(ctx.session("detail", &path), id).await;
    if let Some(error) = page.error() {
        bail!("Unable to load product {}: {}", id, error);
    }

    if let Some(rating) = args.rating {
        page.handle(DetailEvent::StarClicked(rating)).await;
        ctx.output
            .debug(&format!("Rating: {}", page.rating().label()));
    }
    page.handle(DetailEvent::CommentInput(args.comment)).await;

    let navigation = page.handle(DetailEvent::SubmitReview).await;
    fail_on_alerts(page.session_mut().take_alerts())?;

    match navigation {
        Some(Navigation::Reload) => {
            ctx.output.success("Thanks for your review!");
            Ok(())
        }
        Some(nav) => bail!(login_message(&nav)),
        None => bail!("Review was not submitted"),
    }
}
