//! Category matching.
//!
//! Category filters are compared after a naive singularization so that a
//! "Gift" filter matches items filed under "Gifts". This is a heuristic,
//! not a linguistic guarantee: "Glass" becomes "glas".

/// Stem endings that take an "-es" plural ("box" -> "boxes").
const SIBILANT_ENDINGS: [&str; 5] = ["x", "z", "s", "ch", "sh"];

/// Normalize a category for comparison.
///
/// Lower-cases the input, then `...ies` becomes `...y`, a sibilant stem drops
/// a trailing `es`, and anything else ending in `s` drops the `s`. Empty or
/// missing input normalizes to the empty string.
pub fn normalize_category(category: Option<&str>) -> String {
    let lower = category.unwrap_or_default().to_lowercase();

    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if SIBILANT_ENDINGS.iter().any(|end| stem.ends_with(end)) {
            return stem.to_string();
        }
    }
    if let Some(stem) = lower.strip_suffix('s') {
        return stem.to_string();
    }
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_plurals() {
        assert_eq!(normalize_category(Some("Gifts")), "gift");
        assert_eq!(normalize_category(Some("Candles")), "candle");
        assert_eq!(normalize_category(Some("Flowers")), "flower");
        assert_eq!(normalize_category(Some("Baskets")), "basket");
    }

    #[test]
    fn test_es_plurals() {
        assert_eq!(normalize_category(Some("Boxes")), "box");
        assert_eq!(normalize_category(Some("Brushes")), "brush");
        assert_eq!(normalize_category(Some("Peaches")), "peach");
    }

    #[test]
    fn test_ies_plurals() {
        assert_eq!(normalize_category(Some("Accessories")), "accessory");
        assert_eq!(normalize_category(Some("Candies")), "candy");
    }

    #[test]
    fn test_singular_unchanged() {
        assert_eq!(normalize_category(Some("Gift")), "gift");
        assert_eq!(normalize_category(Some("BOX")), "box");
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(normalize_category(Some("")), "");
        assert_eq!(normalize_category(None), "");
    }

    #[test]
    fn test_double_s_loses_final_s() {
        assert_eq!(normalize_category(Some("Glass")), "glas");
    }

    #[test]
    fn test_singular_and_plural_meet() {
        assert_eq!(
            normalize_category(Some("Gift")),
            normalize_category(Some("Gifts"))
        );
        assert_eq!(
            normalize_category(Some("box")),
            normalize_category(Some("Boxes"))
        );
    }
}
