#![forbid(unsafe_code)]

//! Sign-up form: field order for remote focus and input validation.
//!
//! The form is five controls in one column. Focus starts on the first name
//! and walks down to the register button through a [`FieldChain`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::chain::FieldChain;

/// Focusable control of the sign-up form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    FirstName,
    LastName,
    Email,
    MobileNumber,
    RegisterButton,
}

impl SignUpField {
    pub const ORDER: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::MobileNumber,
        Self::RegisterButton,
    ];

    /// Focus chain over the whole form, nothing focused yet.
    #[must_use]
    pub fn chain() -> FieldChain<Self> {
        FieldChain::new(Self::ORDER.to_vec())
    }
}

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Values typed into the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
}

impl SignUpForm {
    /// Check the form before registering.
    ///
    /// Every field is required, the mobile number must be an integer, and
    /// the email must look like `local@domain.tld`. The first failing rule
    /// is reported.
    pub fn validate(&self) -> Result<(), SignUpError> {
        let fields = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.mobile_number,
        ];
        if fields.iter().any(|value| value.is_empty()) {
            return Err(SignUpError::MissingField);
        }
        if self.mobile_number.parse::<i64>().is_err() {
            return Err(SignUpError::InvalidMobileNumber);
        }
        let email_ok = EMAIL_PATTERN
            .as_ref()
            .is_some_and(|re| re.is_match(&self.email));
        if !email_ok {
            return Err(SignUpError::InvalidEmail);
        }
        Ok(())
    }

    /// Empty every field after a successful registration.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sign-up form rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpError {
    MissingField,
    InvalidMobileNumber,
    InvalidEmail,
}

impl fmt::Display for SignUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => f.write_str("All fields are required."),
            Self::InvalidMobileNumber => f.write_str("Invalid mobile number."),
            Self::InvalidEmail => f.write_str("Invalid email address."),
        }
    }
}

impl std::error::Error for SignUpError {}
