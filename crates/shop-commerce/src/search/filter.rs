//! Client-side post-filter over a page of listing results.

use crate::catalog::{normalize_category, Product};
use crate::search::SearchQuery;

/// Products left after post-filtering one page of listing results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Items that passed both predicates, in server order.
    pub items: Vec<Product>,
    /// Number of items the server returned before filtering.
    pub raw_count: usize,
}

impl SearchOutcome {
    /// Count shown to the user. Always the post-filter length.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SearchQuery {
    /// Text predicate: `name + " " + description` contains the term,
    /// case-insensitively. An empty term always passes.
    pub fn matches_text(&self, product: &Product) -> bool {
        if self.q.is_empty() {
            return true;
        }
        product.search_text().contains(&self.q.to_lowercase())
    }

    /// Category predicate on normalized categories. No filter always passes.
    pub fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None | Some("") => true,
            Some(wanted) => {
                normalize_category(Some(wanted))
                    == normalize_category(Some(product.category_label()))
            }
        }
    }

    /// Both predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product) && self.matches_category(product)
    }

    /// Narrow a page of results. Never adds items.
    pub fn apply(&self, items: Vec<Product>) -> SearchOutcome {
        let raw_count = items.len();
        let items = items.into_iter().filter(|p| self.matches(p)).collect();
        SearchOutcome { items, raw_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortOption;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Red Rose").with_category("Flowers"),
            Product::new(2, "Gift Box").with_category("Gifts"),
        ]
    }

    fn ids(outcome: &SearchOutcome) -> Vec<i64> {
        outcome.items.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_text_filter() {
        let outcome = SearchQuery::new().with_query("rose").apply(catalog());
        assert_eq!(ids(&outcome), vec![1]);
        assert_eq!(outcome.count(), 1);
        assert_eq!(outcome.raw_count, 2);
    }

    #[test]
    fn test_category_filter_normalizes() {
        let outcome = SearchQuery::new().with_category("Gift").apply(catalog());
        assert_eq!(ids(&outcome), vec![2]);
    }

    #[test]
    fn test_unmatched_text_with_matched_category_is_empty() {
        let outcome = SearchQuery::new()
            .with_query("tulip")
            .with_category("Gift")
            .apply(catalog());
        assert!(outcome.is_empty());
        assert_eq!(outcome.count(), 0);
    }

    #[test]
    fn test_no_filters_keeps_everything_in_order() {
        let outcome = SearchQuery::new().with_sort(SortOption::Newest).apply(catalog());
        assert_eq!(ids(&outcome), vec![1, 2]);
    }

    #[test]
    fn test_text_matches_description_case_insensitive() {
        let items = vec![
            Product::new(7, "Bouquet").with_description("Twelve long-stem ROSES"),
            Product::new(8, "Mug"),
        ];
        let outcome = SearchQuery::new().with_query("Roses").apply(items);
        assert_eq!(ids(&outcome), vec![7]);
    }

    #[test]
    fn test_category_name_fallback() {
        let mut product = Product::new(9, "Candle");
        product.category_name = Some("Candles".to_string());
        let outcome = SearchQuery::new().with_category("candle").apply(vec![product]);
        assert_eq!(outcome.count(), 1);
    }

    #[test]
    fn test_item_without_category_fails_category_filter() {
        let outcome = SearchQuery::new()
            .with_category("Gifts")
            .apply(vec![Product::new(3, "Loose item")]);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_count_never_exceeds_page() {
        let items: Vec<Product> = (0..50)
            .map(|i| Product::new(i, format!("Rose {}", i)).with_category("Flowers"))
            .collect();
        let outcome = SearchQuery::new().with_query("rose").apply(items);
        assert_eq!(outcome.count(), 50);
        assert_eq!(outcome.count(), outcome.items.len());
    }
}
