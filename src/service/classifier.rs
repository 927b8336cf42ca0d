//! Token classification and string transformation.
//!
//! The core of the service: a pure, single-pass partition of input tokens
//! into odd numbers, even numbers, alphabetic tokens, and special
//! characters, together with an arbitrary-precision numeric sum and a
//! derived concatenation string.

use num_bigint::BigUint;

/// Result of classifying one input array.
///
/// Each list preserves the relative order tokens appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Numeric tokens with odd values, original string form.
    pub odd_numbers: Vec<String>,
    /// Numeric tokens with even values, original string form.
    pub even_numbers: Vec<String>,
    /// Tokens containing at least one letter, fully upper-cased.
    pub alphabets: Vec<String>,
    /// Tokens with no letters that are not purely numeric.
    pub special_characters: Vec<String>,
    /// Decimal sum of all numeric tokens.
    pub sum: String,
    /// Letters from all alphabetic tokens, reversed and alternate-cased.
    pub concat_string: String,
}

/// Classify an input array of tokens.
///
/// Every token lands in exactly one category:
///
/// 1. Non-empty and all ASCII decimal digits: numeric. The original string
///    is kept verbatim (leading zeros included) and routed to the even or
///    odd list by the value's parity. The value is added to the sum.
/// 2. Otherwise, if it contains at least one letter: alphabetic. The token
///    is upper-cased.
/// 3. Otherwise: special character, kept unchanged.
///
/// The concatenation string is built from the letters of all alphabetic
/// tokens (digits and punctuation inside mixed tokens are skipped),
/// lower-cased, reversed, then upper-cased at even positions.
///
/// Infallible: an empty input yields empty lists, a sum of `"0"`, and an
/// empty concatenation string.
#[must_use]
pub fn classify(input: &[String]) -> Classification {
    let mut odd_numbers = Vec::new();
    let mut even_numbers = Vec::new();
    let mut alphabets = Vec::new();
    let mut special_characters = Vec::new();
    let mut sum = BigUint::default();
    let mut letters: Vec<char> = Vec::new();

    for token in input {
        if is_numeric(token) {
            if let Some(value) = BigUint::parse_bytes(token.as_bytes(), 10) {
                sum += value;
            }
            if is_even(token) {
                even_numbers.push(token.clone());
            } else {
                odd_numbers.push(token.clone());
            }
        } else if token.chars().any(char::is_alphabetic) {
            alphabets.push(token.to_uppercase());
            for ch in token.chars().filter(|ch| ch.is_alphabetic()) {
                letters.extend(ch.to_lowercase());
            }
        } else {
            special_characters.push(token.clone());
        }
    }

    letters.reverse();

    Classification {
        odd_numbers,
        even_numbers,
        alphabets,
        special_characters,
        sum: sum.to_string(),
        concat_string: alternate_case(&letters),
    }
}

/// A numeric token is non-empty and all ASCII decimal digits.
fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parity of a numeric token, read from its last digit so that tokens of
/// any length never need fixed-width parsing.
fn is_even(token: &str) -> bool {
    token
        .as_bytes()
        .last()
        .copied()
        .is_some_and(|b| (b - b'0') % 2 == 0)
}

/// Upper-case characters at even positions, keep odd positions as-is.
///
/// The input characters are already lower-cased at collection time.
fn alternate_case(letters: &[char]) -> String {
    let mut result = String::with_capacity(letters.len());
    for (i, ch) in letters.iter().enumerate() {
        if i % 2 == 0 {
            result.extend(ch.to_uppercase());
        } else {
            result.push(*ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_mixed_input() {
        let result = classify(&input(&["a", "1", "334", "4", "R", "$"]));
        assert_eq!(result.odd_numbers, vec!["1"]);
        assert_eq!(result.even_numbers, vec!["334", "4"]);
        assert_eq!(result.alphabets, vec!["A", "R"]);
        assert_eq!(result.special_characters, vec!["$"]);
        assert_eq!(result.sum, "339");
        assert_eq!(result.concat_string, "Ra");
    }

    #[test]
    fn test_empty_input() {
        let result = classify(&[]);
        assert!(result.odd_numbers.is_empty());
        assert!(result.even_numbers.is_empty());
        assert!(result.alphabets.is_empty());
        assert!(result.special_characters.is_empty());
        assert_eq!(result.sum, "0");
        assert_eq!(result.concat_string, "");
    }

    #[test]
    fn test_alphabetic_tokens_and_concat() {
        let result = classify(&input(&["abc", "ABC", "123"]));
        assert_eq!(result.alphabets, vec!["ABC", "ABC"]);
        assert_eq!(result.odd_numbers, vec!["123"]);
        assert!(result.even_numbers.is_empty());
        assert!(result.special_characters.is_empty());
        assert_eq!(result.sum, "123");
        // Letters a,b,c,a,b,c reversed to c,b,a,c,b,a then alternate-cased
        assert_eq!(result.concat_string, "CbAcBa");
    }

    #[test]
    fn test_odd_even_split() {
        let result = classify(&input(&["5", "10"]));
        assert_eq!(result.odd_numbers, vec!["5"]);
        assert_eq!(result.even_numbers, vec!["10"]);
        assert_eq!(result.sum, "15");
    }

    #[test]
    fn test_mixed_alphanumeric_token() {
        let result = classify(&input(&["a1b2"]));
        assert_eq!(result.alphabets, vec!["A1B2"]);
        assert!(result.odd_numbers.is_empty());
        assert!(result.even_numbers.is_empty());
        assert!(result.special_characters.is_empty());
        assert_eq!(result.sum, "0");
        // Digits in a mixed token contribute nothing to the concat string
        assert_eq!(result.concat_string, "Ba");
    }

    #[test]
    fn test_every_token_classified_once() {
        let tokens = input(&["7", "42", "xyz", "@#", "a9", "", "007", "  "]);
        let result = classify(&tokens);
        let total = result.odd_numbers.len()
            + result.even_numbers.len()
            + result.alphabets.len()
            + result.special_characters.len();
        assert_eq!(total, tokens.len());
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let result = classify(&input(&["007", "010"]));
        assert_eq!(result.odd_numbers, vec!["007"]);
        assert_eq!(result.even_numbers, vec!["010"]);
        assert_eq!(result.sum, "17");
    }

    #[test]
    fn test_empty_token_is_special() {
        let result = classify(&input(&[""]));
        assert_eq!(result.special_characters, vec![""]);
        assert_eq!(result.sum, "0");
    }

    #[test]
    fn test_signed_and_decimal_tokens_are_not_numeric() {
        let result = classify(&input(&["-3", "1.5", "+2"]));
        assert!(result.odd_numbers.is_empty());
        assert!(result.even_numbers.is_empty());
        assert_eq!(result.special_characters, vec!["-3", "1.5", "+2"]);
        assert_eq!(result.sum, "0");
    }

    #[test]
    fn test_huge_numeric_tokens_do_not_overflow() {
        let big = "9".repeat(40);
        let result = classify(&input(&[big.as_str(), "1"]));
        assert_eq!(result.odd_numbers, vec![big.clone(), "1".to_string()]);
        // 10^40 - 1 + 1 = 10^40
        let mut expected = String::from("1");
        expected.push_str(&"0".repeat(40));
        assert_eq!(result.sum, expected);
    }

    #[test]
    fn test_category_order_is_stable() {
        let result = classify(&input(&["9", "b", "3", "a", "2", "8", "&", "*"]));
        assert_eq!(result.odd_numbers, vec!["9", "3"]);
        assert_eq!(result.even_numbers, vec!["2", "8"]);
        assert_eq!(result.alphabets, vec!["B", "A"]);
        assert_eq!(result.special_characters, vec!["&", "*"]);
    }

    #[test]
    fn test_unicode_letters_are_alphabetic() {
        let result = classify(&input(&["héllo", "日本"]));
        assert_eq!(result.alphabets.len(), 2);
        assert!(result.special_characters.is_empty());
    }

    #[test]
    fn test_non_ascii_digits_are_not_numeric() {
        // Arabic-Indic digits contain no letters and fail the ASCII digit test
        let result = classify(&input(&["٤٢"]));
        assert_eq!(result.special_characters, vec!["٤٢"]);
        assert_eq!(result.sum, "0");
    }
}
