//! User profile model

use serde::{Deserialize, Serialize};

use crate::error::{SpendwiseError, SpendwiseResult};

/// Country prefix applied to the profile mobile for SMS alerts
pub const PHONE_PREFIX: &str = "+91";

/// Number of digits in a mobile number
pub const MOBILE_DIGITS: usize = 10;

/// The registered user, created once at first run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub mobile: String,
}

impl UserProfile {
    /// Build a profile from registration input, trimming both fields
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            mobile: mobile.into().trim().to_string(),
        }
    }

    /// Check the registration rules: non-empty name, 10-digit mobile
    pub fn validate(&self) -> SpendwiseResult<()> {
        if self.name.is_empty() {
            return Err(SpendwiseError::InvalidInput("Name is required.".into()));
        }

        if self.mobile.len() != MOBILE_DIGITS || !self.mobile.chars().all(|c| c.is_ascii_digit()) {
            return Err(SpendwiseError::InvalidInput(format!(
                "Mobile number must be {} digits.",
                MOBILE_DIGITS
            )));
        }

        Ok(())
    }

    /// Alert number derived from the mobile, e.g. `+91 9876543210`
    pub fn alert_phone_number(&self) -> String {
        format!("{} {}", PHONE_PREFIX, self.mobile)
    }
}
