use std::sync::Arc;

use shop_data::{FetchClient, StorefrontApi, StubTransport};
use shop_observability::StructuredLogger;

use crate::{PageLocation, StorefrontSession};

pub(crate) fn session_at(stub: &Arc<StubTransport>, path: &str) -> StorefrontSession {
    let api = StorefrontApi::new(FetchClient::new(stub.clone()).with_base_url("http://shop.test"));
    StorefrontSession::new(api, PageLocation::parse(path), StructuredLogger::silent())
}

/// Session whose logger keeps lines in memory.
pub(crate) fn logged_session_at(stub: &Arc<StubTransport>, path: &str) -> StorefrontSession {
    let api = StorefrontApi::new(FetchClient::new(stub.clone()).with_base_url("http://shop.test"));
    StorefrontSession::new(api, PageLocation::parse(path), StructuredLogger::capturing())
}
