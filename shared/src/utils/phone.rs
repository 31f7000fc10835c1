//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Accepted phone format: exactly 10 ASCII digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());

/// Check whether a phone number is valid (exactly 10 digits)
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logging, keeping only the last 4 characters.
///
/// Counts characters rather than bytes: the input is an opaque caller
/// string and may not be ASCII.
pub fn mask_phone(phone: &str) -> String {
    let count = phone.chars().count();
    if count <= 4 {
        "****".to_string()
    } else {
        let tail: String = phone.chars().skip(count - 4).collect();
        format!("***{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digit_numbers() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("0000000000"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("555123456"));
        assert!(!is_valid_phone("55512345678"));
        assert!(!is_valid_phone("+5551234567"));
        assert!(!is_valid_phone("555123456a"));
        assert!(!is_valid_phone("555 123 4567"));
    }

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(mask_phone("5551234567"), "***4567");
        assert_eq!(mask_phone("1234"), "****");
        assert_eq!(mask_phone(""), "****");
    }

    #[test]
    fn masks_multibyte_input_without_panicking() {
        // Arbitrary caller strings reach this through logging; a byte
        // offset inside a multibyte character must not abort.
        assert_eq!(mask_phone("a€€€"), "****");
        assert_eq!(mask_phone("phone-€€€€x"), "***€€€x");
        assert_eq!(mask_phone("€€€€€"), "***€€€€");
    }
}
