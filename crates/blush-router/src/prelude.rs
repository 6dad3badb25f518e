//! Prelude for convenient imports.
//!
//! ```rust
//! use blush_router::prelude::*;
//! ```

pub use crate::{
    decode_query, search_href, storefront_routes, Access, Chrome, Element, LayoutKind, Params,
    RouteError, RouteMatch, RouteNode, RouteTable, Screen, Target,
};
