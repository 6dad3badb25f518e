//! Authentication state and route guards for Blush.
//!
//! The storefront never talks to an auth backend directly. A
//! [`SessionProvider`] supplies the signed-in user; the guards here are pure
//! decisions over a [`Session`] snapshot and the current [`Location`].

mod error;
mod guard;
mod location;
mod provider;
mod session;
mod user;

pub use error::AuthError;
pub use guard::{AuthGuard, GuardOutcome, GuestGuard, Redirect, DEFAULT_LOGIN_PATH};
pub use location::{Location, NavState, PendingReturn, ReturnTo};
pub use provider::{InMemorySessionProvider, SessionProvider};
pub use session::Session;
pub use user::{Role, User};
