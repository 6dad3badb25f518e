//! Payment method selection.

use serde::{Deserialize, Serialize};

/// Supported payment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Card,
    Upi,
    Netbanking,
    Wallet,
    Cod,
}

impl PaymentKind {
    /// All kinds in the order the payment screen lists them.
    pub const ALL: [PaymentKind; 5] = [
        PaymentKind::Card,
        PaymentKind::Upi,
        PaymentKind::Netbanking,
        PaymentKind::Wallet,
        PaymentKind::Cod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Card => "card",
            PaymentKind::Upi => "upi",
            PaymentKind::Netbanking => "netbanking",
            PaymentKind::Wallet => "wallet",
            PaymentKind::Cod => "cod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentKind::Card => "Credit / Debit Card",
            PaymentKind::Upi => "UPI",
            PaymentKind::Netbanking => "Net Banking",
            PaymentKind::Wallet => "Wallet",
            PaymentKind::Cod => "Cash on Delivery",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// A selected payment method. `details` is opaque to the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PaymentMethod {
    pub fn new(kind: PaymentKind) -> Self {
        Self { kind, details: None }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_kind_parse() {
        for kind in PaymentKind::ALL {
            assert_eq!(PaymentKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PaymentKind::parse("cheque"), None);
    }

    #[test]
    fn test_payment_method_wire_shape() {
        let method = PaymentMethod::new(PaymentKind::Upi)
            .with_details(serde_json::json!({ "vpa": "asha@okbank" }));
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["type"], "upi");
        assert_eq!(json["details"]["vpa"], "asha@okbank");

        let cod = serde_json::to_value(PaymentMethod::new(PaymentKind::Cod)).unwrap();
        assert!(cod.get("details").is_none());
    }
}
