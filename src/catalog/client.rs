//! Catalog HTTP client - OAuth2 token flow plus cached keyword search

use std::time::Duration;

use chrono::Utc;
use console::style;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{BomError, Result};

use super::cache::{CachedToken, DiskCache};
use super::model::{KeywordResponse, Product};
use super::select::{best_offer, Offer};

/// Everything the reporter needs about one resolved part
#[derive(Debug, Clone)]
pub struct ProductInfo {
    pub mpn: String,
    pub description: String,
    pub manufacturer: String,
    pub vendor: String,
    pub footprint: Option<String>,

    /// `None` when no variation clears the MOQ/availability filters
    pub offer: Option<Offer>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Synchronous client for the DigiKey keyword-search API
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    cache: DiskCache,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl CatalogClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: impl Into<String>,
        cache: DiskCache,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    /// Get an access token, reusing the cached one while valid
    fn access_token(&self) -> Result<String> {
        if let Some(token) = self.cache.load_token() {
            return Ok(token.access_token);
        }

        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(BomError::ApiStatus {
                status: response.status().as_u16(),
                body: response.text()?,
            });
        }

        let token: TokenResponse = response.json()?;
        self.cache.store_token(&CachedToken {
            access_token: token.access_token.clone(),
            expires_at: Utc::now().timestamp() + token.expires_in,
        })?;

        Ok(token.access_token)
    }

    /// Keyword search, served from the disk cache when fresh
    fn keyword_search(&self, keyword: &str) -> Result<KeywordResponse> {
        if let Some(cached) = self.cache.load_search(keyword) {
            return Ok(serde_json::from_value(cached)?);
        }

        eprintln!("{}", style(format!("Fetching {} from DigiKey...", keyword)).dim());

        let token = self.access_token()?;
        let response = self
            .http
            .post(format!("{}/products/v4/search/keyword", self.base_url))
            .header("accept", "application/json")
            .header("Authorization", format!("Bearer {}", token))
            .header("X-DIGIKEY-Client-Id", &self.client_id)
            .json(&serde_json::json!({ "Keywords": keyword, "Limit": 2 }))
            .send()?;

        if !response.status().is_success() {
            return Err(BomError::ApiStatus {
                status: response.status().as_u16(),
                body: response.text()?,
            });
        }

        let raw: Value = response.json()?;
        self.cache.store_search(keyword, &raw)?;
        Ok(serde_json::from_value(raw)?)
    }

    /// Resolve an identifier to product data and its best offer.
    ///
    /// Exact matches win; otherwise the search must return exactly one
    /// product. Zero or several products abort the run.
    pub fn resolve(&self, mpn: &str, order_quantity: u32) -> Result<ProductInfo> {
        let response = self.keyword_search(mpn)?;

        let product = if let Some(exact) = response.exact_matches.first() {
            exact
        } else {
            match response.products.as_slice() {
                [single] => single,
                [] => return Err(BomError::NoMatch(mpn.to_string())),
                _ => return Err(BomError::AmbiguousMatch(mpn.to_string())),
            }
        };

        Ok(extract_product_info(product, order_quantity))
    }
}

fn extract_product_info(product: &Product, order_quantity: u32) -> ProductInfo {
    ProductInfo {
        mpn: product.manufacturer_product_number.clone(),
        description: product.description.product_description.clone(),
        manufacturer: product.manufacturer.name.clone(),
        vendor: "DigiKey".to_string(),
        footprint: product.supplier_device_package().map(String::from),
        offer: best_offer(product, order_quantity),
    }
}
