//! Storefront domain types and client-side state for Blush.
//!
//! This crate holds everything the storefront screens share that is not
//! navigation or authentication:
//!
//! - **Catalog**: products and list options
//! - **Cart / Wishlist**: app-scoped state containers
//! - **Checkout**: addresses, payment methods and the three-step progress machine
//! - **Data**: the catalog/order service contract, its stub and in-memory
//!   implementations, and fetch-state bookkeeping for screens
//!
//! # Example
//!
//! ```rust
//! use blush_commerce::prelude::*;
//!
//! let mut progress = CheckoutProgress::new();
//! progress.next_step();
//! progress.next_step();
//! progress.next_step();
//! assert_eq!(progress.current_step(), 3);
//!
//! progress.reset_checkout();
//! assert_eq!(progress.step(), Some(CheckoutStep::Shipping));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod data;
pub mod order;
pub mod wishlist;

pub use error::{CommerceError, FetchError};
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, FetchError};
    pub use crate::ids::*;
    pub use crate::money::Money;

    pub use crate::cart::{Cart, CartLine};
    pub use crate::catalog::{ListOptions, Page, Product};
    pub use crate::checkout::{Address, CheckoutProgress, CheckoutStep, PaymentKind, PaymentMethod};
    pub use crate::data::{
        CatalogService, Delay, FetchState, FetchTicket, FetchTracker, InMemoryCatalog,
        InMemoryOrders, NoDelay, OrderService, StubCatalog, StubOrders,
    };
    pub use crate::order::{Order, OrderLine, OrderStatus};
    pub use crate::wishlist::Wishlist;
}
