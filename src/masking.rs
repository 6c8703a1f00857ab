//! Display masking applied at the report boundary; stored values are never
//! rewritten.

/// strip everything but digits
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Partially hidden canonical form of an 11-digit document
/// (`***.456.789-**`). Anything else passes through unchanged.
pub fn mask_document(document: &str) -> String {
    let digits = digits_only(document);
    if digits.len() != 11 {
        return document.to_string();
    }

    format!("***.{}.{}-**", &digits[3..6], &digits[6..9])
}

/// First and last four digits of a 16-digit card number with the middle
/// blanked (`1234 **** **** 5678`). Anything else passes through unchanged.
pub fn mask_card_number(number: &str) -> String {
    let digits = digits_only(number);
    if digits.len() != 16 {
        return number.to_string();
    }

    format!("{} **** **** {}", &digits[..4], &digits[12..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("123.456.789-01"), "12345678901");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_mask_document() {
        assert_eq!(mask_document("12345678901"), "***.456.789-**");
        assert_eq!(mask_document("123.456.789-01"), "***.456.789-**");
    }

    #[test]
    fn test_mask_document_passes_through_unexpected_lengths() {
        assert_eq!(mask_document("1234"), "1234");
        assert_eq!(mask_document(""), "");
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("1234567812345678"), "1234 **** **** 5678");
        assert_eq!(mask_card_number("1234 5678 1234 5678"), "1234 **** **** 5678");
    }

    #[test]
    fn test_mask_card_number_passes_through_unexpected_lengths() {
        assert_eq!(mask_card_number("1234567"), "1234567");
    }
}
