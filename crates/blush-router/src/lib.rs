//! Route table for the Blush storefront.
//!
//! The table is a tree of [`RouteNode`]s. Layout nodes wrap their children in
//! shared chrome; a layout with an empty path groups routes without adding a
//! URL segment:
//!
//! ```text
//! Root ("")
//! ├── Marketing ("")  -> /            Home
//! ├── Catalog ("")    -> /products, /products/:category, /product/:slug
//! ├── Auth ("")       -> /login, /register, /forgot-password
//! ├── Account ("/account")
//! │   ├── index       -> redirect "profile"
//! │   └── ...         -> /account/profile, /account/orders/:id, ...
//! ├── /cart, /search, /order/:id, /order/confirmation/:id
//! └── *               -> Not Found
//! Checkout ("/checkout")   standalone
//! Admin ("/admin")         standalone
//! ```
//!
//! # Usage
//!
//! ```rust
//! use blush_router::prelude::*;
//!
//! let table = storefront_routes();
//! let matched = table.resolve("/product/rose-glow-serum").unwrap();
//! assert_eq!(matched.layouts, vec![LayoutKind::Root, LayoutKind::Catalog]);
//! assert_eq!(matched.params.get("slug"), Some("rose-glow-serum"));
//! ```

pub mod prelude;

mod error;
mod layout;
mod pattern;
mod route;
mod search;
mod storefront;
mod table;

pub use error::RouteError;
pub use layout::{Access, Chrome, LayoutKind};
pub use pattern::{Pattern, Segment};
pub use route::{Element, RouteNode, Screen};
pub use search::{decode_query, search_href, QUERY_PARAM, SEARCH_PATH};
pub use storefront::storefront_routes;
pub use table::{Params, RouteMatch, RouteTable, Target, MAX_REDIRECTS};
