//! Prelude for convenient imports.
//!
//! ```rust
//! use blush_core::prelude::*;
//! ```

pub use blush_auth::{GuardOutcome, Location, NavState, Role, Session, User};
pub use blush_router::prelude::*;

pub use crate::{
    BoundaryState, Navigator, RecoveryAction, RenderFailure, StoreApp, StoreConfig, StoreError,
    TelemetryConfig, Visit, VisitOutcome,
};
