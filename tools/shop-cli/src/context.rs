//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use shop_data::{FetchClient, HttpTransport, StorefrontApi, Transport};
use shop_observability::{RequestId, StructuredLogger};
use shop_pages::{PageLocation, StorefrontSession};

use crate::config::{CliConfig, API_URL_ENV};
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    transport: Arc<dyn Transport>,
    logger: StructuredLogger,
}

impl Context {
    /// Load context from config file and environment.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            find_config(&cwd).unwrap_or_default()
        }
        .with_base_url_override(std::env::var(API_URL_ENV).ok());

        let timeout = Duration::from_secs(config.api.timeout_secs);
        let transport = HttpTransport::new(timeout).context("Failed to build HTTP client")?;

        Ok(Self::with_transport(config, output, Arc::new(transport)))
    }

    /// Context over an explicit transport.
    pub fn with_transport(config: CliConfig, output: Output, transport: Arc<dyn Transport>) -> Self {
        let logger = StructuredLogger::new(RequestId::generate())
            .with_format(config.logging.format)
            .with_min_level(config.logging.min_level());
        Self {
            config,
            output,
            transport,
            logger,
        }
    }

    /// Replace the root logger every page session is scoped from.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// API client for the configured server.
    pub fn api(&self) -> StorefrontApi {
        let mut client =
            FetchClient::new(self.transport.clone()).with_base_url(self.config.api.base_url.as_str());
        if let Some(cookie) = &self.config.api.session_cookie {
            client = client.with_default_header("Cookie", format!("session={}", cookie));
        }
        StorefrontApi::new(client)
    }

    /// Fresh page session at `path`, logging as its own page load.
    pub fn session(&self, page: &str, path: &str) -> StorefrontSession {
        let location = PageLocation::parse(path);
        let logger = self.logger.for_page(page, location.path.as_str());
        StorefrontSession::new(self.api(), location, logger)
    }
}

/// Find a config file in `start` or its parents.
pub fn find_config(start: &Path) -> Option<CliConfig> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path: PathBuf = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                    return Some(config);
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use shop_data::{Method, StubTransport};

    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".storefront.toml"),
            "[api]\nbase_url = \"http://found.test\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = find_config(&nested).unwrap();
        assert_eq!(config.api.base_url, "http://found.test");
    }

    #[test]
    fn test_sessions_scope_root_logger() {
        let ctx = Context::with_transport(
            CliConfig::default(),
            Output::new(false, true),
            Arc::new(StubTransport::new()),
        )
        .with_logger(StructuredLogger::capturing());

        let cart = ctx.session("cart", "/cart?ref=nav");
        let search = ctx.session("listing", "/search?q=mug");
        cart.logger().info("loaded");
        search.logger().info("loaded");
        assert_ne!(cart.logger().request_id(), search.logger().request_id());

        let lines = ctx.logger.captured();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""page":"cart""#));
        assert!(lines[0].contains(r#""route":"/cart""#));
        assert!(lines[1].contains(r#""route":"/search""#));
    }

    #[tokio::test]
    async fn test_session_cookie_header() {
        let stub = Arc::new(StubTransport::new().json(
            Method::GET,
            "/api/cart",
            200,
            serde_json::json!({"items": []}),
        ));
        let mut config = CliConfig::default();
        config.api.base_url = "http://shop.test".to_string();
        config.api.session_cookie = Some("tok".to_string());
        let ctx = Context::with_transport(config, Output::new(false, true), stub.clone());

        ctx.api().get_cart().await.unwrap();
        let sent = stub.requests();
        assert_eq!(sent[0].url(), "http://shop.test/api/cart");
        assert_eq!(sent[0].header_value("cookie"), Some("session=tok"));
    }
}
