//! Catalog types and list options.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    /// URL-safe handle used by `/product/:slug`.
    pub slug: String,
    pub name: String,
    pub brand: String,
    /// Category handle used by `/products/:category`.
    pub category: String,
    pub price: Money,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        slug: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            brand: String::new(),
            category: String::new(),
            price,
            image_url: None,
            in_stock: true,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Storefront link to this product.
    pub fn href(&self) -> String {
        format!("/product/{}", self.slug)
    }

    /// Case-insensitive match against name, brand and category.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.brand.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

/// Options for listing catalog items or orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListOptions {
    pub category: Option<String>,
    pub query: Option<String>,
    /// 1-indexed page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            category: None,
            query: None,
            page: 1,
            per_page: 24,
        }
    }
}

impl ListOptions {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.max(1);
        self
    }

    /// Offset of the first item on the requested page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1).saturating_mul(self.per_page as usize)
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// An empty, final page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
        }
    }

    /// Slice a full result set down to the page described by `options`.
    pub fn slice(all: Vec<T>, options: &ListOptions) -> Self {
        let total = all.len();
        let offset = options.offset();
        let end = offset.saturating_add(options.per_page as usize);
        let items: Vec<T> = all
            .into_iter()
            .skip(offset)
            .take(options.per_page as usize)
            .collect();
        Self {
            items,
            has_more: end < total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
