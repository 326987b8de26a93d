//! Toast container.

use crate::html::escape_html;
use crate::toast::Toast;

/// Render the live region holding `toasts`.
pub fn render_toasts(toasts: &[Toast]) -> String {
    let items: String = toasts.iter().map(render_toast).collect();
    format!(
        r#"<div id="toast-root" class="toast-root" aria-live="polite" aria-atomic="true">{}</div>"#,
        items
    )
}

fn render_toast(toast: &Toast) -> String {
    format!(
        r#"<div class="toast toast-{}" role="status" data-toast-id="{}">
    <div class="toast-msg">{}</div>
    <button type="button" class="toast-close" aria-label="Dismiss notification" data-action="dismiss-toast" data-toast-id="{}">&times;</button>
</div>"#,
        toast.variant.as_str(),
        toast.id,
        escape_html(&toast.message),
        toast.id
    )
}
