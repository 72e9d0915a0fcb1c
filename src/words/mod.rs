//! Currency amounts in words, Indian numbering convention.
//!
//! Partitions the integer rupee part into crore (10^7), lakh (10^5),
//! thousand, hundred, and a final two-digit remainder, then names each group
//! in uppercase. Fractional paise are dropped, not rounded — a documented
//! limitation carried from the reference behaviour.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const ONES: [&str; 10] = [
    "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];
const TEENS: [&str; 10] = [
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
];
const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

/// Convert a currency amount to uppercase words, suffixed "RUPEES ONLY".
///
/// Zero is the one asymmetric case: it returns bare `"ZERO"` with no suffix.
/// Paise are truncated. Amounts are expected non-negative; a negative input
/// clamps the rupee part to zero.
///
/// ```
/// use bijak::words::amount_in_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_in_words(dec!(1500)), "ONE THOUSAND FIVE HUNDRED RUPEES ONLY");
/// assert_eq!(amount_in_words(dec!(0)), "ZERO");
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    let rupees = amount.trunc().to_u64().unwrap_or_default();
    if rupees == 0 {
        return "ZERO".to_string();
    }
    format!("{} RUPEES ONLY", integer_words(rupees))
}

/// Name a positive integer in the Indian grouping. Counts above 999 crore
/// recurse on the crore part, so 10^12 reads "ONE LAKH CRORE".
fn integer_words(n: u64) -> String {
    let crore = n / 10_000_000;
    let lakh = (n % 10_000_000) / 100_000;
    let thousand = (n % 100_000) / 1_000;
    let hundred = (n % 1_000) / 100;
    let remainder = n % 100;

    let mut words = String::new();

    if crore > 0 {
        let crore_words = if crore < 1_000 {
            below_thousand(crore)
        } else {
            integer_words(crore)
        };
        words.push_str(&crore_words);
        words.push_str(" CRORE ");
    }
    if lakh > 0 {
        words.push_str(&below_thousand(lakh));
        words.push_str(" LAKH ");
    }
    if thousand > 0 {
        words.push_str(&below_thousand(thousand));
        words.push_str(" THOUSAND ");
    }
    if hundred > 0 {
        words.push_str(ONES[hundred as usize]);
        words.push_str(" HUNDRED ");
    }
    if remainder > 0 {
        push_below_hundred(&mut words, remainder);
    }

    words.trim().to_string()
}

/// Shared sub-algorithm for a group below 1000: the hundred digit plus a
/// two-digit remainder.
fn below_thousand(n: u64) -> String {
    debug_assert!(n < 1_000);
    let h = n / 100;
    let r = n % 100;

    let mut result = String::new();
    if h > 0 {
        result.push_str(ONES[h as usize]);
        result.push_str(" HUNDRED ");
    }
    if r > 0 {
        push_below_hundred(&mut result, r);
    }
    result.trim().to_string()
}

fn push_below_hundred(out: &mut String, n: u64) {
    debug_assert!(n > 0 && n < 100);
    if n < 10 {
        out.push_str(ONES[n as usize]);
    } else if n < 20 {
        out.push_str(TEENS[(n - 10) as usize]);
    } else {
        out.push_str(TENS[(n / 10) as usize]);
        if n % 10 > 0 {
            out.push(' ');
            out.push_str(ONES[(n % 10) as usize]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn spec_fixtures() {
        assert_eq!(amount_in_words(dec!(100)), "ONE HUNDRED RUPEES ONLY");
        assert_eq!(
            amount_in_words(dec!(1500)),
            "ONE THOUSAND FIVE HUNDRED RUPEES ONLY"
        );
        assert_eq!(amount_in_words(dec!(100000)), "ONE LAKH RUPEES ONLY");
        assert_eq!(
            amount_in_words(dec!(1234567)),
            "TWELVE LAKH THIRTY FOUR THOUSAND FIVE HUNDRED SIXTY SEVEN RUPEES ONLY"
        );
    }

    // The zero case deliberately lacks the "RUPEES ONLY" suffix; this pins
    // the reference behaviour rather than fixing the inconsistency.
    #[test]
    fn zero_is_bare() {
        assert_eq!(amount_in_words(dec!(0)), "ZERO");
    }

    #[test]
    fn teens_and_tens() {
        assert_eq!(amount_in_words(dec!(10)), "TEN RUPEES ONLY");
        assert_eq!(amount_in_words(dec!(19)), "NINETEEN RUPEES ONLY");
        assert_eq!(amount_in_words(dec!(20)), "TWENTY RUPEES ONLY");
        assert_eq!(amount_in_words(dec!(21)), "TWENTY ONE RUPEES ONLY");
        assert_eq!(amount_in_words(dec!(99)), "NINETY NINE RUPEES ONLY");
    }

    #[test]
    fn crore_amounts() {
        assert_eq!(amount_in_words(dec!(10000000)), "ONE CRORE RUPEES ONLY");
        assert_eq!(
            amount_in_words(dec!(23456789)),
            "TWO CRORE THIRTY FOUR LAKH FIFTY SIX THOUSAND SEVEN HUNDRED EIGHTY NINE RUPEES ONLY"
        );
    }

    #[test]
    fn paise_are_truncated_not_rounded() {
        assert_eq!(amount_in_words(dec!(8614.99)), amount_in_words(dec!(8614)));
        assert_eq!(amount_in_words(dec!(0.99)), "ZERO");
    }

    #[test]
    fn no_double_spaces() {
        for n in [101u64, 1001, 100001, 10000001, 20050009, 90909] {
            let words = amount_in_words(Decimal::from(n));
            assert!(!words.contains("  "), "double space in '{words}' for {n}");
            assert!(!words.starts_with(' ') && !words.ends_with(' '));
        }
    }

    #[test]
    fn hundred_with_remainder() {
        assert_eq!(amount_in_words(dec!(657)), "SIX HUNDRED FIFTY SEVEN RUPEES ONLY");
        assert_eq!(
            amount_in_words(dec!(8614)),
            "EIGHT THOUSAND SIX HUNDRED FOURTEEN RUPEES ONLY"
        );
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(amount_in_words(dec!(-5)), "ZERO");
    }
}
