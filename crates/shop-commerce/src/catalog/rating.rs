//! Star-rating input state for the review form.

/// Word shown next to the selected star count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingLabel {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl RatingLabel {
    /// Label for a star value.
    pub fn from_stars(stars: u8) -> Option<Self> {
        match stars {
            1 => Some(RatingLabel::Poor),
            2 => Some(RatingLabel::Fair),
            3 => Some(RatingLabel::Good),
            4 => Some(RatingLabel::VeryGood),
            5 => Some(RatingLabel::Excellent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLabel::Poor => "Poor",
            RatingLabel::Fair => "Fair",
            RatingLabel::Good => "Good",
            RatingLabel::VeryGood => "Very Good",
            RatingLabel::Excellent => "Excellent",
        }
    }
}

/// Five-star input widget.
///
/// Hovering previews a value without committing it; leaving the widget
/// falls back to the committed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarRating {
    value: Option<u8>,
    preview: Option<u8>,
}

impl StarRating {
    pub const MAX: u8 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a rating. Values are clamped into 1..=5.
    pub fn set(&mut self, stars: i64) -> u8 {
        let value = stars.clamp(1, Self::MAX as i64) as u8;
        self.value = Some(value);
        self.preview = None;
        value
    }

    /// Preview a rating while the pointer is over a star.
    pub fn hover(&mut self, stars: u8) {
        self.preview = Some(stars.min(Self::MAX));
    }

    /// Pointer left the widget.
    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// Committed rating.
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    fn shown(&self) -> u8 {
        self.preview.or(self.value).unwrap_or(0)
    }

    /// Whether star number `star` (1-based) is highlighted.
    pub fn is_active(&self, star: u8) -> bool {
        star >= 1 && star <= self.shown()
    }

    /// Label for the committed rating, empty when nothing is selected.
    pub fn label(&self) -> &'static str {
        self.value
            .and_then(RatingLabel::from_stars)
            .map(|l| l.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps() {
        let mut widget = StarRating::new();
        assert_eq!(widget.set(0), 1);
        assert_eq!(widget.set(12), 5);
        assert_eq!(widget.set(3), 3);
        assert_eq!(widget.label(), "Good");
    }

    #[test]
    fn test_hover_then_leave_restores_value() {
        let mut widget = StarRating::new();
        widget.set(2);
        widget.hover(5);
        assert!(widget.is_active(5));
        assert_eq!(widget.label(), "Fair");

        widget.leave();
        assert!(widget.is_active(2));
        assert!(!widget.is_active(3));
    }

    #[test]
    fn test_leave_without_value_clears() {
        let mut widget = StarRating::new();
        widget.hover(4);
        assert!(widget.is_active(4));
        widget.leave();
        assert!((1..=5).all(|s| !widget.is_active(s)));
        assert_eq!(widget.label(), "");
    }

    #[test]
    fn test_labels() {
        assert_eq!(RatingLabel::from_stars(4).unwrap().as_str(), "Very Good");
        assert_eq!(RatingLabel::from_stars(5).unwrap().as_str(), "Excellent");
        assert!(RatingLabel::from_stars(0).is_none());
    }
}
