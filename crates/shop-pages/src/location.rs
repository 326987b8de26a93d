//! Page location and navigation effects.

use url::form_urlencoded;

/// Where the browser is: a path plus its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub path: String,
    pub query: String,
}

impl PageLocation {
    /// Parse a path-with-query such as `/products?q=rose`.
    pub fn parse(path_with_query: &str) -> Self {
        match path_with_query.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: query.to_string(),
            },
            None => Self {
                path: path_with_query.to_string(),
                query: String::new(),
            },
        }
    }

    /// Path and query joined back together.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Login page that returns here afterwards.
    pub fn login_redirect(&self) -> Navigation {
        let target: String =
            form_urlencoded::byte_serialize(self.path_and_query().as_bytes()).collect();
        Navigation::Navigate(format!("/login?redirect={}", target))
    }
}

/// Effect a handler asks the browser to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Reload the current page.
    Reload,
    /// Go to another location, which loads a fresh page.
    Navigate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let loc = PageLocation::parse("/products?q=rose&sort=popular");
        assert_eq!(loc.path, "/products");
        assert_eq!(loc.query, "q=rose&sort=popular");
        assert_eq!(loc.path_and_query(), "/products?q=rose&sort=popular");

        let bare = PageLocation::parse("/cart");
        assert_eq!(bare.query, "");
        assert_eq!(bare.path_and_query(), "/cart");
    }

    #[test]
    fn test_login_redirect() {
        let loc = PageLocation::parse("/products/3?tab=reviews");
        assert_eq!(
            loc.login_redirect(),
            Navigation::Navigate("/login?redirect=%2Fproducts%2F3%3Ftab%3Dreviews".to_string())
        );
    }
}
