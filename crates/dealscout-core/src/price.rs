//! Rupee price formatting.
//!
//! The search service reports prices in whole rupees (no paise), so the
//! formatter works on integers and never prints decimal places. Digit
//! grouping follows the Indian numbering convention: the first group of
//! three digits from the right, then groups of two (`12,34,567`).

/// Currency symbol for Indian rupees.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// Format a whole-rupee amount for display.
///
/// ```
/// use dealscout_core::price::format_rupees;
/// assert_eq!(format_rupees(679), "\u{20b9}679");
/// assert_eq!(format_rupees(12345), "\u{20b9}12,345");
/// ```
pub fn format_rupees(amount: i64) -> String {
    format!("{}{}", RUPEE_SYMBOL, group_indian(amount))
}

/// Apply Indian digit grouping to an integer amount.
fn group_indian(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let len = digits.len();

    let mut grouped = String::with_capacity(len + len / 2 + 1);
    if amount < 0 {
        grouped.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        let at_boundary = remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0);
        if i > 0 && at_boundary {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_grouping_below_four_digits() {
        assert_eq!(format_rupees(0), "\u{20b9}0");
        assert_eq!(format_rupees(7), "\u{20b9}7");
        assert_eq!(format_rupees(679), "\u{20b9}679");
        assert_eq!(format_rupees(999), "\u{20b9}999");
    }

    #[test]
    fn test_first_group_of_three() {
        assert_eq!(format_rupees(1234), "\u{20b9}1,234");
        assert_eq!(format_rupees(12345), "\u{20b9}12,345");
    }

    #[test]
    fn test_indian_groups_of_two() {
        assert_eq!(format_rupees(123456), "\u{20b9}1,23,456");
        assert_eq!(format_rupees(1234567), "\u{20b9}12,34,567");
        assert_eq!(format_rupees(100000), "\u{20b9}1,00,000");
        assert_eq!(format_rupees(10000000), "\u{20b9}1,00,00,000");
    }

    #[test]
    fn test_negative_amount() {
        // Never produced by the search service, but the formatter must not
        // garble it either.
        assert_eq!(format_rupees(-12345), "\u{20b9}-12,345");
    }
}
