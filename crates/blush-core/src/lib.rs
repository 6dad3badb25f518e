//! Blush core.
//!
//! Ties the domain crates together for the storefront:
//!
//! - [`StoreConfig`] / [`StoreApp`]: configuration (builder or `store.toml`)
//!   and the route table
//! - [`Navigator`]: route resolution plus guards, followed to the page a
//!   visit actually lands on
//! - [`BoundaryState`]: captured render failures and their recovery actions
//! - [`telemetry`]: tracing subscriber setup for native builds
//!
//! # Quick Start
//!
//! ```rust
//! use blush_core::prelude::*;
//!
//! let navigator = StoreApp::new("blush").navigator().unwrap();
//! let visit = navigator
//!     .visit(Location::new("/checkout"), &Session::anonymous())
//!     .unwrap();
//!
//! assert_eq!(visit.location.pathname, "/login");
//! assert_eq!(visit.location.return_to(), Some("/checkout"));
//! ```

pub mod prelude;
pub mod telemetry;

mod app;
mod boundary;
mod error;
mod navigator;

pub use app::*;
pub use boundary::*;
pub use error::*;
pub use navigator::*;
pub use telemetry::{LogFormat, TelemetryConfig};

pub use blush_auth as auth;
pub use blush_commerce as commerce;
pub use blush_router as router;
