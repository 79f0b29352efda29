//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number is empty")]
    Empty,
    /// The input contains something other than digits and separators.
    #[error("phone number may only contain digits, spaces, hyphens, and a leading +")]
    NonDigit,
    /// The input string is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A loosely validated phone number.
///
/// Spaces, hyphens, and plus signs are treated as cosmetic; everything
/// left over must be a digit. The number is stored exactly as entered so
/// formatting like `081-234-5678` survives a save round trip.
///
/// ## Examples
///
/// ```
/// use profile_console_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("081-234-567").is_ok());
/// assert!(PhoneNumber::parse("+66 81 234 5678").is_ok());
///
/// assert!(PhoneNumber::parse("abc").is_err());
/// assert!(PhoneNumber::parse("081-234-567 ext 2").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Maximum length of a phone number as entered.
    pub const MAX_LENGTH: usize = 32;

    /// Characters treated as formatting rather than content.
    const SEPARATORS: [char; 3] = [' ', '-', '+'];

    /// Parse a `PhoneNumber` from a string.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty (after trimming)
    /// - Is longer than 32 characters
    /// - Contains anything other than digits once separators are stripped,
    ///   or consists of separators only
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let mut digits = s.chars().filter(|c| !Self::SEPARATORS.contains(c)).peekable();
        if digits.peek().is_none() {
            return Err(PhoneNumberError::NonDigit);
        }
        if !digits.all(|c| c.is_ascii_digit()) {
            return Err(PhoneNumberError::NonDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the digits with all separators stripped.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(PhoneNumber::parse("0812345678").is_ok());
        assert!(PhoneNumber::parse("081-234-567").is_ok());
        assert!(PhoneNumber::parse("+66 81 234 5678").is_ok());
    }

    #[test]
    fn test_parse_keeps_formatting() {
        let phone = PhoneNumber::parse("081-234-567").unwrap();
        assert_eq!(phone.as_str(), "081-234-567");
    }

    #[test]
    fn test_digits_strips_separators() {
        let phone = PhoneNumber::parse("+66 81-234-5678").unwrap();
        assert_eq!(phone.digits(), "66812345678");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneNumberError::Empty));
        assert_eq!(PhoneNumber::parse("  "), Err(PhoneNumberError::Empty));
    }

    #[test]
    fn test_parse_letters() {
        assert_eq!(PhoneNumber::parse("abc"), Err(PhoneNumberError::NonDigit));
        assert_eq!(
            PhoneNumber::parse("081-234-567 ext 2"),
            Err(PhoneNumberError::NonDigit)
        );
    }

    #[test]
    fn test_parse_separators_only() {
        assert_eq!(PhoneNumber::parse("+--"), Err(PhoneNumberError::NonDigit));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "1".repeat(40);
        assert!(matches!(
            PhoneNumber::parse(&long),
            Err(PhoneNumberError::TooLong { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = PhoneNumber::parse("081-234-567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"081-234-567\"");

        let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }
}
