//! Seeded in-memory services.

use super::{CatalogService, OrderService};
use crate::catalog::{ListOptions, Page, Product};
use crate::error::FetchError;
use crate::order::Order;
use async_trait::async_trait;

/// Catalog backed by a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn fetch_products(&self, options: &ListOptions) -> Result<Page<Product>, FetchError> {
        let matching: Vec<Product> = self
            .products
            .iter()
            .filter(|p| options.category.as_deref().map_or(true, |c| p.category == c))
            .filter(|p| options.query.as_deref().map_or(true, |q| p.matches_text(q)))
            .cloned()
            .collect();
        Ok(Page::slice(matching, options))
    }

    async fn fetch_product(&self, slug: &str) -> Result<Option<Product>, FetchError> {
        Ok(self.products.iter().find(|p| p.slug == slug).cloned())
    }
}

/// Order history backed by a fixed list, newest first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrders {
    orders: Vec<Order>,
}

impl InMemoryOrders {
    pub fn new(mut orders: Vec<Order>) -> Self {
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Self { orders }
    }
}

#[async_trait]
impl OrderService for InMemoryOrders {
    async fn fetch_orders(&self, options: &ListOptions) -> Result<Page<Order>, FetchError> {
        Ok(Page::slice(self.orders.clone(), options))
    }

    async fn fetch_order(&self, id: &str) -> Result<Option<Order>, FetchError> {
        Ok(self.orders.iter().find(|o| o.id.as_str() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{Address, PaymentKind, PaymentMethod};
    use crate::ids::{OrderId, ProductId};
    use crate::money::Money;
    use crate::order::{OrderLine, OrderStatus};
    use chrono::TimeZone;

    fn product(slug: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(slug),
            slug: slug.to_string(),
            name: slug.replace('-', " "),
            brand: "Petal".to_string(),
            category: category.to_string(),
            price: Money::rupees(499),
            image_url: None,
            in_stock: true,
        }
    }

    fn order(id: &str, day: u32) -> Order {
        Order {
            id: OrderId::new(id),
            status: OrderStatus::Placed,
            lines: vec![OrderLine {
                product_id: ProductId::new("kajal"),
                name: "Kajal".to_string(),
                unit_price: Money::rupees(199),
                quantity: 2,
            }],
            shipping_address: Address::new("Asha Rao", "9876543210", "12 MG Road", "Bengaluru", "Karnataka", "560001"),
            payment: PaymentMethod::new(PaymentKind::Cod),
            placed_at: chrono::Utc.with_ymd_and_hms(2026, 3, day, 10, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_catalog_filters_by_category_and_text() {
        let catalog = InMemoryCatalog::new(vec![
            product("rose-glow-serum", "skincare"),
            product("velvet-lipstick", "makeup"),
            product("glow-highlighter", "makeup"),
        ]);

        let makeup = catalog
            .fetch_products(&ListOptions::default().with_category("makeup"))
            .await
            .unwrap();
        assert_eq!(makeup.items.len(), 2);

        let glow = catalog
            .fetch_products(&ListOptions::default().with_query("glow"))
            .await
            .unwrap();
        assert_eq!(glow.items.len(), 2);

        let both = catalog
            .fetch_products(&ListOptions::default().with_category("makeup").with_query("glow"))
            .await
            .unwrap();
        assert_eq!(both.items[0].slug, "glow-highlighter");
    }

    #[tokio::test]
    async fn test_catalog_lookup_by_slug() {
        let catalog = InMemoryCatalog::new(vec![product("rose-glow-serum", "skincare")]);
        assert!(catalog.fetch_product("rose-glow-serum").await.unwrap().is_some());
        assert!(catalog.fetch_product("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_orders_newest_first_and_paged() {
        let orders = InMemoryOrders::new(vec![order("o-1", 1), order("o-3", 3), order("o-2", 2)]);
        let page = orders
            .fetch_orders(&ListOptions::default().with_page(1, 2))
            .await
            .unwrap();
        let ids: Vec<&str> = page.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o-3", "o-2"]);
        assert!(page.has_more);

        let found = orders.fetch_order("o-1").await.unwrap().unwrap();
        assert_eq!(found.total(), Money::rupees(398));
    }
}
