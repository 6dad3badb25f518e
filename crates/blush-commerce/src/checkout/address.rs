//! Shipping address.

use crate::error::CommerceError;
use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Address {
    /// Address ID (None for unsaved addresses).
    pub id: Option<AddressId>,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    /// Apartment, landmark, etc.
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// Create a new address with the required fields.
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        address_line1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
            phone: phone.into(),
            address_line1: address_line1.into(),
            address_line2: None,
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
            is_default: false,
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address_line1.as_str()];
        if let Some(ref line2) = self.address_line2 {
            parts.push(line2);
        }
        parts.push(&self.city);
        parts.push(&self.state);
        parts.push(&self.pincode);
        parts.join(", ")
    }

    /// Names of required fields that are empty or malformed.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if !is_digits(&self.phone, 10) {
            missing.push("phone");
        }
        if self.address_line1.trim().is_empty() {
            missing.push("address line 1");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.state.trim().is_empty() {
            missing.push("state");
        }
        if !is_digits(&self.pincode, 6) {
            missing.push("pincode");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::InvalidAddress(missing.join(", ")))
        }
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    let value = value.trim();
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}
