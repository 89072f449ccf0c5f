use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One record in the directory. The contact's name is the directory key,
/// so it is not repeated here.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Telefon")]
    pub phone: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Adresa")]
    pub address: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Phone may contain only digits, spaces, '+' and '-', and at least one digit".to_string()
    }

    pub fn email_req() -> String {
        "Email must contain '@'".to_string()
    }
}

impl Contact {
    pub fn new(
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Contact {
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Checks phone and email, reporting the first requirement that fails.
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_valid_phone(&self.phone) {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        if !is_valid_email(&self.email) {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }

        Ok(())
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    // Spaces, '+' and '-' are separators and are ignored
    // Whatever remains must be one or more ASCII digits
    let mut digits = phone.chars().filter(|c| !matches!(c, ' ' | '+' | '-')).peekable();

    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Trims surrounding whitespace. Case is kept, so keys stay case-sensitive.
pub fn normalize_name(name: &str) -> &str {
    name.trim()
}

pub fn validate_name(name: &str) -> Result<(), AppError> {
    if normalize_name(name).is_empty() {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }
    Ok(())
}
