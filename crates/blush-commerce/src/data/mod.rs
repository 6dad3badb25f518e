//! Catalog and order data contract.
//!
//! Screens talk to these traits only. The stub implementations stand in for
//! a real backend: they wait a configured latency and then resolve to empty
//! results. The in-memory implementations are seeded fakes for tests and
//! demos.

mod delay;
mod memory;
mod state;
mod stub;

pub use delay::{Delay, NoDelay};
#[cfg(not(target_arch = "wasm32"))]
pub use delay::TokioDelay;
pub use memory::{InMemoryCatalog, InMemoryOrders};
pub use state::{FetchState, FetchTicket, FetchTracker};
pub use stub::{StubCatalog, StubOrders};

use crate::catalog::{ListOptions, Page, Product};
use crate::error::FetchError;
use crate::order::Order;
use async_trait::async_trait;

/// Read access to the product catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn fetch_products(&self, options: &ListOptions) -> Result<Page<Product>, FetchError>;

    /// Look up a product by slug; `Ok(None)` when it does not exist.
    async fn fetch_product(&self, slug: &str) -> Result<Option<Product>, FetchError>;
}

/// Read access to the signed-in customer's orders.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn fetch_orders(&self, options: &ListOptions) -> Result<Page<Order>, FetchError>;

    async fn fetch_order(&self, id: &str) -> Result<Option<Order>, FetchError>;
}
