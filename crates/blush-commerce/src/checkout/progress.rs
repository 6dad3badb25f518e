//! Checkout step machine.
//!
//! One `CheckoutProgress` exists per checkout session. It is created when the
//! checkout layout mounts and dropped when the shopper navigates away.

use crate::checkout::{Address, PaymentMethod};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 3;

    /// All steps in stepper order.
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Confirmation,
    ];

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Confirmation => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(CheckoutStep::Shipping),
            2 => Some(CheckoutStep::Payment),
            3 => Some(CheckoutStep::Confirmation),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }
}

/// Checkout progress state.
///
/// `next_step` and `previous_step` saturate at the ends of `1..=3`.
/// `set_current_step` stores whatever it is given; [`CheckoutProgress::step`]
/// reports `None` for a raw value outside the range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutProgress {
    current_step: u8,
    selected_address: Option<Address>,
    selected_payment: Option<PaymentMethod>,
}

impl Default for CheckoutProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutProgress {
    pub fn new() -> Self {
        Self {
            current_step: CheckoutStep::FIRST,
            selected_address: None,
            selected_payment: None,
        }
    }

    /// Raw step number as last stored.
    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// The current step, or `None` if an external caller stored an
    /// out-of-range value.
    pub fn step(&self) -> Option<CheckoutStep> {
        CheckoutStep::from_number(self.current_step)
    }

    pub fn selected_address(&self) -> Option<&Address> {
        self.selected_address.as_ref()
    }

    pub fn selected_payment(&self) -> Option<&PaymentMethod> {
        self.selected_payment.as_ref()
    }

    /// Advance one step, stopping at Confirmation.
    pub fn next_step(&mut self) -> u8 {
        let next = self
            .current_step
            .saturating_add(1)
            .clamp(CheckoutStep::FIRST, CheckoutStep::LAST);
        debug!(from = self.current_step, to = next, "checkout next step");
        self.current_step = next;
        next
    }

    /// Go back one step, stopping at Shipping.
    pub fn previous_step(&mut self) -> u8 {
        let prev = self
            .current_step
            .saturating_sub(1)
            .clamp(CheckoutStep::FIRST, CheckoutStep::LAST);
        debug!(from = self.current_step, to = prev, "checkout previous step");
        self.current_step = prev;
        prev
    }

    /// Unconditional set; callers are responsible for passing `1..=3`.
    pub fn set_current_step(&mut self, step: u8) {
        if CheckoutStep::from_number(step).is_none() {
            warn!(step, "checkout step set outside 1..=3");
        }
        self.current_step = step;
    }

    pub fn set_selected_address(&mut self, address: Address) {
        self.selected_address = Some(address);
    }

    pub fn set_selected_payment(&mut self, payment: PaymentMethod) {
        self.selected_payment = Some(payment);
    }

    /// Back to Shipping with no selections.
    pub fn reset_checkout(&mut self) {
        debug!("checkout reset");
        *self = Self::new();
    }

    /// What the current screen still needs before "Continue" makes sense.
    pub fn missing_for_next(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.step() {
            Some(CheckoutStep::Shipping) => {
                if self.selected_address.is_none() {
                    missing.push("shipping address");
                }
            }
            Some(CheckoutStep::Payment) => {
                if self.selected_payment.is_none() {
                    missing.push("payment method");
                }
            }
            Some(CheckoutStep::Confirmation) | None => {}
        }
        missing
    }

    /// Whether a stepper entry should render as completed.
    pub fn is_completed(&self, step: CheckoutStep) -> bool {
        step.number() < self.current_step
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        let step = self.current_step.clamp(CheckoutStep::FIRST, CheckoutStep::LAST);
        ((u16::from(step) * 100) / u16::from(CheckoutStep::LAST)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::PaymentKind;

    fn address() -> Address {
        Address::new("Asha Rao", "9876543210", "12 MG Road", "Bengaluru", "Karnataka", "560001")
    }

    #[test]
    fn test_checkout_creation() {
        let progress = CheckoutProgress::new();
        assert_eq!(progress.current_step(), 1);
        assert_eq!(progress.step(), Some(CheckoutStep::Shipping));
        assert!(progress.selected_address().is_none());
        assert!(progress.selected_payment().is_none());
    }

    #[test]
    fn test_next_step_saturates() {
        let mut progress = CheckoutProgress::new();
        for _ in 0..5 {
            progress.next_step();
            assert!(progress.current_step() <= 3);
        }
        assert_eq!(progress.current_step(), 3);
    }

    #[test]
    fn test_previous_step_saturates() {
        let mut progress = CheckoutProgress::new();
        progress.set_current_step(3);
        for _ in 0..5 {
            progress.previous_step();
            assert!(progress.current_step() >= 1);
        }
        assert_eq!(progress.current_step(), 1);
    }

    #[test]
    fn test_reset_clears_selections() {
        let mut progress = CheckoutProgress::new();
        progress.set_selected_address(address());
        progress.next_step();
        progress.next_step();

        progress.reset_checkout();

        assert_eq!(progress, CheckoutProgress::new());
        assert_eq!(progress.current_step(), 1);
        assert!(progress.selected_address().is_none());
        assert!(progress.selected_payment().is_none());
    }

    #[test]
    fn test_set_current_step_is_unclamped() {
        let mut progress = CheckoutProgress::new();
        progress.set_current_step(7);
        assert_eq!(progress.current_step(), 7);
        assert_eq!(progress.step(), None);

        // transitions bring an out-of-range value back into 1..=3
        progress.previous_step();
        assert_eq!(progress.current_step(), 3);

        progress.set_current_step(0);
        progress.next_step();
        assert_eq!(progress.current_step(), 1);
    }

    #[test]
    fn test_missing_for_next() {
        let mut progress = CheckoutProgress::new();
        assert_eq!(progress.missing_for_next(), vec!["shipping address"]);

        progress.set_selected_address(address());
        assert!(progress.missing_for_next().is_empty());

        progress.next_step();
        assert_eq!(progress.missing_for_next(), vec!["payment method"]);

        progress.set_selected_payment(PaymentMethod::new(PaymentKind::Cod));
        assert!(progress.missing_for_next().is_empty());
    }

    #[test]
    fn test_stepper_helpers() {
        let mut progress = CheckoutProgress::new();
        progress.next_step();
        assert!(progress.is_completed(CheckoutStep::Shipping));
        assert!(!progress.is_completed(CheckoutStep::Payment));
        assert_eq!(progress.progress_percent(), 66);
        progress.next_step();
        assert_eq!(progress.progress_percent(), 100);
    }
}
