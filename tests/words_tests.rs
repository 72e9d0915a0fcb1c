#![cfg(feature = "words")]

use bijak::words::amount_in_words;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// --- Spec fixtures ---

#[test]
fn curated_fixtures() {
    let cases = [
        (dec!(100), "ONE HUNDRED RUPEES ONLY"),
        (dec!(1500), "ONE THOUSAND FIVE HUNDRED RUPEES ONLY"),
        (dec!(100000), "ONE LAKH RUPEES ONLY"),
        (
            dec!(1234567),
            "TWELVE LAKH THIRTY FOUR THOUSAND FIVE HUNDRED SIXTY SEVEN RUPEES ONLY",
        ),
        (dec!(8614), "EIGHT THOUSAND SIX HUNDRED FOURTEEN RUPEES ONLY"),
        (dec!(10000000), "ONE CRORE RUPEES ONLY"),
    ];
    for (amount, expected) in cases {
        assert_eq!(amount_in_words(amount), expected);
    }
}

// The reference behaviour returns bare "ZERO" — no "RUPEES ONLY" suffix.
// This asymmetry is preserved deliberately; the test exists to flag it.
#[test]
fn zero_is_bare_zero() {
    assert_eq!(amount_in_words(dec!(0)), "ZERO");
}

#[test]
fn paise_truncated() {
    assert_eq!(
        amount_in_words(dec!(1500.99)),
        "ONE THOUSAND FIVE HUNDRED RUPEES ONLY"
    );
}

// --- Meaning survives re-parsing ---

/// Parse an uppercase Indian-convention phrase back into a number.
/// Test-only inverse used to check the conversion is lossless in meaning.
fn parse_words(words: &str) -> u64 {
    if words == "ZERO" {
        return 0;
    }
    let stripped = words.strip_suffix(" RUPEES ONLY").expect("suffix");
    let mut total: u64 = 0;
    let mut group: u64 = 0;
    for token in stripped.split_whitespace() {
        match token {
            "CRORE" => {
                total = (total + group) * 10_000_000;
                group = 0;
            }
            "LAKH" => {
                total += group * 100_000;
                group = 0;
            }
            "THOUSAND" => {
                total += group * 1_000;
                group = 0;
            }
            "HUNDRED" => {
                group *= 100;
            }
            unit => {
                let value = match unit {
                    "ONE" => 1, "TWO" => 2, "THREE" => 3, "FOUR" => 4, "FIVE" => 5,
                    "SIX" => 6, "SEVEN" => 7, "EIGHT" => 8, "NINE" => 9, "TEN" => 10,
                    "ELEVEN" => 11, "TWELVE" => 12, "THIRTEEN" => 13, "FOURTEEN" => 14,
                    "FIFTEEN" => 15, "SIXTEEN" => 16, "SEVENTEEN" => 17, "EIGHTEEN" => 18,
                    "NINETEEN" => 19, "TWENTY" => 20, "THIRTY" => 30, "FORTY" => 40,
                    "FIFTY" => 50, "SIXTY" => 60, "SEVENTY" => 70, "EIGHTY" => 80,
                    "NINETY" => 90,
                    other => panic!("unexpected token '{other}' in '{words}'"),
                };
                group += value;
            }
        }
    }
    total + group
}

#[test]
fn words_round_trip_in_meaning() {
    for n in [
        0u64, 1, 9, 10, 15, 19, 20, 21, 57, 99, 100, 101, 110, 657, 999, 1000, 1500, 8614,
        99_999, 100_000, 123_456, 999_999, 1_000_000, 1_234_567, 9_999_999, 10_000_000,
        23_456_789, 1_000_000_000,
    ] {
        let words = amount_in_words(Decimal::from(n));
        assert_eq!(parse_words(&words), n, "mismatch for {n}: '{words}'");
    }
}

// --- Output hygiene ---

#[test]
fn single_interior_spaces_only() {
    for n in (0u64..2_000).chain([10_101, 100_001, 20_050_009, 707_070_707]) {
        let words = amount_in_words(Decimal::from(n));
        assert!(!words.contains("  "), "double space for {n}: '{words}'");
        assert_eq!(words, words.trim());
    }
}

#[test]
fn nonzero_amounts_end_with_suffix() {
    for n in [1u64, 10, 100, 1000, 100_000, 10_000_000] {
        assert!(amount_in_words(Decimal::from(n)).ends_with(" RUPEES ONLY"));
    }
}
