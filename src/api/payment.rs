//! Client-side payment field format checks, run before `place_order`.
//!
//! Nothing here talks to a gateway; the backend validates again. These checks
//! only stop obviously malformed input from leaving the checkout form.

use crate::error::{AppError, AppResult};

/// Card number: digits only (spaces/dashes stripped), 13-19 digits, Luhn.
pub fn validate_card_number(raw: &str) -> AppResult<()> {
    let digits: Vec<u32> = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_digit(10).ok_or_else(|| AppError::user("invalid_card", "Card number may contain digits only")))
        .collect::<Result<_, _>>()?;
    if digits.len() < 13 || digits.len() > 19 {
        return Err(AppError::user("invalid_card", "Card number must be 13 to 19 digits"));
    }
    let mut sum = 0u32;
    for (i, d) in digits.iter().rev().enumerate() {
        let mut d = *d;
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    if sum % 10 != 0 {
        return Err(AppError::user("invalid_card", "Card number failed validation"));
    }
    Ok(())
}

/// Expiry in `MM/YY`, not in the past relative to `(current_year, current_month)`.
pub fn validate_expiry(raw: &str, current_year: u32, current_month: u32) -> AppResult<()> {
    let Some((mm, yy)) = raw.split_once('/') else {
        return Err(AppError::user("invalid_expiry", "Expiry must be MM/YY"));
    };
    let (Ok(month), Ok(year)) = (mm.parse::<u32>(), yy.parse::<u32>()) else {
        return Err(AppError::user("invalid_expiry", "Expiry must be MM/YY"));
    };
    if mm.len() != 2 || yy.len() != 2 || month < 1 || month > 12 {
        return Err(AppError::user("invalid_expiry", "Expiry must be MM/YY"));
    }
    let year = 2000 + year;
    if year < current_year || (year == current_year && month < current_month) {
        return Err(AppError::user("invalid_expiry", "Card has expired"));
    }
    Ok(())
}

/// CVV: 3 or 4 digits.
pub fn validate_cvv(raw: &str) -> AppResult<()> {
    if (raw.len() == 3 || raw.len() == 4) && raw.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::user("invalid_cvv", "CVV must be 3 or 4 digits"))
    }
}

/// Mobile-banking account number: 10-14 digits.
pub fn validate_mobile_account(raw: &str) -> AppResult<()> {
    if raw.len() >= 10 && raw.len() <= 14 && raw.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::user("invalid_account", "Account number must be 10 to 14 digits"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_good_numbers() {
        assert!(validate_card_number("4532015112830366").is_ok());
        assert!(validate_card_number("4532 0151 1283 0366").is_ok());
        assert!(validate_card_number("4532-0151-1283-0366").is_ok());
    }

    #[test]
    fn luhn_rejects_bad_checksum_and_shape() {
        assert!(validate_card_number("4532015112830367").is_err());
        assert!(validate_card_number("123456").is_err());
        assert!(validate_card_number("4532a15112830366").is_err());
    }

    #[test]
    fn expiry_checks_format_and_past_dates() {
        assert!(validate_expiry("12/30", 2026, 8).is_ok());
        assert!(validate_expiry("08/26", 2026, 8).is_ok()); // expires end of current month
        assert!(validate_expiry("07/26", 2026, 8).is_err());
        assert!(validate_expiry("13/30", 2026, 8).is_err());
        assert!(validate_expiry("1230", 2026, 8).is_err());
        assert!(validate_expiry("1/30", 2026, 8).is_err());
    }

    #[test]
    fn cvv_and_mobile_account_lengths() {
        assert!(validate_cvv("123").is_ok());
        assert!(validate_cvv("1234").is_ok());
        assert!(validate_cvv("12").is_err());
        assert!(validate_cvv("12a").is_err());
        assert!(validate_mobile_account("01712345678").is_ok());
        assert!(validate_mobile_account("123").is_err());
        assert!(validate_mobile_account("0171234567890123").is_err());
    }
}
