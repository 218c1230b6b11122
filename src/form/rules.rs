//! Field validation rules for the contact form.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, at least one
/// `.` in the domain part.
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Digits plus the common grouping characters.
static PHONE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s()-]+$").unwrap());

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Grouping is not checked: any mix of the allowed characters carrying at
/// least ten digits passes.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_CHARS.is_match(phone) && phone.chars().filter(char::is_ascii_digit).count() >= 10
}

/// Membership age band for the club.
pub fn validate_age(age: &str) -> bool {
    age.parse::<f64>()
        .map(|age| (10.0..=15.0).contains(&age))
        .unwrap_or(false)
}
