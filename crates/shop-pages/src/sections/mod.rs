//! HTML sections rendered by the page controllers.
//!
//! Every function here is pure: same input, same markup. Untrusted text
//! (names, comments, messages) goes through [`escape_html`](crate::escape_html).

mod badge;
mod card;
mod grid;
mod reviews;
mod stars;
mod toasts;

pub use badge::render_badge;
pub use card::render_product_card;
pub use grid::{render_grid, render_results_count, render_results_error};
pub use reviews::{render_rating_text, render_reviews};
pub use stars::render_star_widget;
pub use toasts::render_toasts;
