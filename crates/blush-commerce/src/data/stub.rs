//! Stub services that resolve to empty results after a delay.

use super::{CatalogService, Delay, OrderService};
use crate::catalog::{ListOptions, Page, Product};
use crate::error::FetchError;
use crate::order::Order;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Catalog stub: always an empty page, never a product.
#[derive(Clone)]
pub struct StubCatalog {
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl StubCatalog {
    pub fn new(delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

#[async_trait]
impl CatalogService for StubCatalog {
    async fn fetch_products(&self, options: &ListOptions) -> Result<Page<Product>, FetchError> {
        self.delay.sleep(self.latency).await;
        debug!(page = options.page, category = ?options.category, "stub catalog list");
        Ok(Page::empty())
    }

    async fn fetch_product(&self, slug: &str) -> Result<Option<Product>, FetchError> {
        self.delay.sleep(self.latency).await;
        debug!(slug, "stub catalog lookup");
        Ok(None)
    }
}

/// Order stub: always an empty page, never an order.
#[derive(Clone)]
pub struct StubOrders {
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl StubOrders {
    pub fn new(delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

#[async_trait]
impl OrderService for StubOrders {
    async fn fetch_orders(&self, options: &ListOptions) -> Result<Page<Order>, FetchError> {
        self.delay.sleep(self.latency).await;
        debug!(page = options.page, "stub order list");
        Ok(Page::empty())
    }

    async fn fetch_order(&self, id: &str) -> Result<Option<Order>, FetchError> {
        self.delay.sleep(self.latency).await;
        debug!(id, "stub order lookup");
        Ok(None)
    }
}
