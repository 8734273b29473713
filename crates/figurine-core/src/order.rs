//! Client-side validation of the order form. Orders are never sent anywhere.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub figure_type: String,
    /// Free text; optional.
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("all required fields must be filled in")]
    MissingFields,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("phone number is not valid")]
    InvalidPhone,
}

impl OrderForm {
    /// Checks run in order: required fields, email, phone.
    pub fn validate(&self) -> Result<(), OrderError> {
        let required = [
            &self.name,
            &self.email,
            &self.phone,
            &self.company,
            &self.figure_type,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(OrderError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(OrderError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(OrderError::InvalidPhone);
        }
        Ok(())
    }
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits, whitespace and `- + ( )` only.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "-+()".contains(c))
}
