//! Navbar cart badge.

/// Item count shown on the navbar cart link.
///
/// The count is bumped optimistically after an add-to-cart and then
/// overwritten by a reconciling fetch. It is never rolled back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartBadge {
    count: i64,
}

impl CartBadge {
    /// Counts above this render as `9+`.
    pub const DISPLAY_CAP: i64 = 9;

    /// Badge starting at `count`.
    pub fn new(count: i64) -> Self {
        let mut badge = Self::default();
        badge.set(count);
        badge
    }

    /// Set the count. Negative values become zero.
    pub fn set(&mut self, count: i64) {
        self.count = count.max(0);
    }

    /// Add `delta` to the current count.
    pub fn bump(&mut self, delta: i64) {
        self.set(self.count.saturating_add(delta));
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Text inside the badge.
    pub fn text(&self) -> String {
        if self.count > Self::DISPLAY_CAP {
            format!("{}+", Self::DISPLAY_CAP)
        } else {
            self.count.to_string()
        }
    }

    /// Screen-reader label.
    pub fn aria_label(&self) -> String {
        format!("{} items in cart", self.count)
    }

    /// Hidden when the cart is empty.
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump() {
        let mut badge = CartBadge::new(3);
        badge.bump(2);
        assert_eq!(badge.count(), 5);
        assert_eq!(badge.text(), "5");
    }

    #[test]
    fn test_cap_display() {
        let mut badge = CartBadge::new(9);
        assert_eq!(badge.text(), "9");
        badge.bump(1);
        assert_eq!(badge.text(), "9+");
        assert_eq!(badge.aria_label(), "10 items in cart");
    }

    #[test]
    fn test_never_negative() {
        let mut badge = CartBadge::new(-4);
        assert_eq!(badge.count(), 0);
        assert!(!badge.is_visible());

        badge.set(2);
        badge.bump(-5);
        assert_eq!(badge.count(), 0);
    }

    #[test]
    fn test_visibility() {
        assert!(!CartBadge::default().is_visible());
        assert!(CartBadge::new(1).is_visible());
    }
}
