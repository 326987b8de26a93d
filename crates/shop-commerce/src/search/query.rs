//! Search query parsing and URL building.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Number of items requested from the listing endpoint.
pub const LISTING_PAGE_SIZE: u32 = 50;

/// Route of the product listing page.
pub const LISTING_PATH: &str = "/products";

/// Sort options offered by the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Most popular first.
    #[default]
    Popular,
    /// Newest first.
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Popular,
        SortOption::Newest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
    ];

    /// Parse a sort key. Unknown or empty keys fall back to `popular`.
    pub fn parse(s: &str) -> Self {
        match s {
            "newest" => SortOption::Newest,
            "price_asc" => SortOption::PriceAsc,
            "price_desc" => SortOption::PriceDesc,
            "rating" => SortOption::Rating,
            _ => SortOption::Popular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Popular => "popular",
            SortOption::Newest => "newest",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Popular => "Most Popular",
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }
}

/// Search parameters read from the listing page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text term, trimmed.
    pub q: String,
    /// Category filter, applied client-side only.
    pub category: Option<String>,
    /// Sort key forwarded to the server.
    pub sort: SortOption,
}

impl SearchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text term.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = q.into().trim().to_string();
        self
    }

    /// Set the category filter. Empty strings clear it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() { None } else { Some(category) };
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Parse `q`, `category` and `sort` from a URL query string.
    ///
    /// A leading `?` is accepted. The first occurrence of a key wins.
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);

        let mut q = None;
        let mut category = None;
        let mut sort = None;

        for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
            match key.as_ref() {
                "q" if q.is_none() => q = Some(value.into_owned()),
                "category" if category.is_none() => category = Some(value.into_owned()),
                "sort" if sort.is_none() => sort = Some(value.into_owned()),
                _ => {}
            }
        }

        SearchQuery::new()
            .with_query(q.unwrap_or_default())
            .with_category(category.unwrap_or_default())
            .with_sort(SortOption::parse(sort.as_deref().unwrap_or("")))
    }

    /// Query parameters sent to the listing endpoint.
    ///
    /// The category is intentionally left out; it is applied only by the
    /// local post-filter.
    pub fn api_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", LISTING_PAGE_SIZE.to_string()),
            ("offset", "0".to_string()),
        ];
        if !self.q.is_empty() {
            params.push(("q", self.q.clone()));
        }
        params.push(("sort", self.sort.as_str().to_string()));
        params
    }

    /// Encoded query string for the listing endpoint.
    pub fn api_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.api_params() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Listing page location for this query.
    pub fn location(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.q.is_empty() {
            serializer.append_pair("q", &self.q);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        serializer.append_pair("sort", self.sort.as_str());

        let qs = serializer.finish();
        if qs.is_empty() {
            LISTING_PATH.to_string()
        } else {
            format!("{}?{}", LISTING_PATH, qs)
        }
    }

    /// Location of the unfiltered listing.
    pub fn cleared_location() -> String {
        LISTING_PATH.to_string()
    }
}
