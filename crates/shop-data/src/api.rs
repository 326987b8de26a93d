//! Typed client for the storefront REST endpoints.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use shop_commerce::prelude::*;

use crate::{ApiError, FetchClient, RequestBuilder, Response};

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    items: Vec<Product>,
}

/// One method per endpoint the storefront pages call.
///
/// Each call is a single request. A 401 becomes [`ApiError::AuthRequired`],
/// any other non-2xx becomes [`ApiError::Application`] carrying the body's
/// error message when one can be read.
#[derive(Clone)]
pub struct StorefrontApi {
    client: FetchClient,
}

impl StorefrontApi {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    /// `GET /api/products?limit=50&offset=0[&q][&sort]`.
    ///
    /// The category filter is not sent; callers post-filter the page.
    pub async fn list_products(&self, query: &SearchQuery) -> Result<Vec<Product>, ApiError> {
        let url = format!("/api/products?{}", query.api_query_string());
        let listing: ListingResponse = self.fetch_json(self.client.get(url)).await?;
        Ok(listing.items)
    }

    /// `GET /api/products/{id}` with nested reviews and summary.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.fetch_json(self.client.get(format!("/api/products/{}", id)))
            .await
    }

    /// `POST /api/products/{id}/reviews`.
    pub async fn submit_review(
        &self,
        id: ProductId,
        draft: &ReviewDraft,
    ) -> Result<ReviewReceipt, ApiError> {
        let rating = draft
            .validate()
            .map_err(|e| ApiError::Invalid(e.to_string()))?;
        let request = self
            .client
            .post(format!("/api/products/{}/reviews", id))
            .json(&json!({ "rating": rating, "comment": draft.comment }))?;
        let response = self.execute(request).await?;
        Ok(serde_json::from_value(response.json_or_empty()).unwrap_or_default())
    }

    /// `GET /api/cart`.
    pub async fn get_cart(&self) -> Result<CartSnapshot, ApiError> {
        self.fetch_json(self.client.get("/api/cart")).await
    }

    /// `POST /api/cart/items`. Returns the created or updated item.
    pub async fn add_cart_item(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<serde_json::Value, ApiError> {
        let request = self
            .client
            .post("/api/cart/items")
            .json(&json!({ "product_id": product_id, "quantity": quantity }))?;
        let response = self.execute(request).await?;
        Ok(response.json_or_empty())
    }

    /// `PATCH /api/cart/items/{id}`.
    pub async fn update_cart_item(&self, item: CartItemId, quantity: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .patch(format!("/api/cart/items/{}", item))
            .json(&json!({ "quantity": quantity }))?;
        self.execute(request).await.map(|_| ())
    }

    /// `DELETE /api/cart/items/{id}`.
    pub async fn remove_cart_item(&self, item: CartItemId) -> Result<(), ApiError> {
        let request = self.client.delete(format!("/api/cart/items/{}", item));
        self.execute(request).await.map(|_| ())
    }

    /// `POST /api/orders`. The server empties the cart on success.
    pub async fn place_order(&self) -> Result<OrderReceipt, ApiError> {
        let response = self.execute(self.client.post("/api/orders")).await?;
        Ok(serde_json::from_value(response.json_or_empty()).unwrap_or_default())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        Ok(response.json()?)
    }

    /// Send and sort the response into success or the error taxonomy.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.client.send(request).await?;

        if response.is_unauthorized() {
            return Err(ApiError::AuthRequired);
        }
        if !response.is_success() {
            return Err(ApiError::Application {
                status: response.status.as_u16(),
                message: response.error_message(),
            });
        }
        Ok(response)
    }
}
