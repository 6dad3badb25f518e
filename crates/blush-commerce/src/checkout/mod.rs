//! Checkout module.
//!
//! Contains the address and payment value objects and the step machine that
//! drives the checkout screens and stepper.

mod address;
mod payment;
mod progress;

pub use address::Address;
pub use payment::{PaymentKind, PaymentMethod};
pub use progress::{CheckoutProgress, CheckoutStep};
