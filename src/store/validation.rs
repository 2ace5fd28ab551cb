//! Input validation for store mutators.
//!
//! Validators return `Result<(), String>`; mutators wrap the message in
//! `StoreError::Validation`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Pragmatic email shape check: one @, no whitespace, dotted domain
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

const MAX_TITLE_LEN: usize = 200;

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("email is required".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(format!("invalid email address: {email}"));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title is required".to_string());
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(format!("title is too long (max {MAX_TITLE_LEN} characters)"));
    }
    Ok(())
}

pub fn validate_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() {
        return Err("amount must be a finite number".to_string());
    }
    if amount <= 0.0 {
        return Err("amount must be greater than zero".to_string());
    }
    Ok(())
}

pub fn validate_travelers(travelers: u32) -> Result<(), String> {
    if travelers == 0 {
        return Err("at least one traveler is required".to_string());
    }
    Ok(())
}
