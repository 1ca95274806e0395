//! Phone masking for the lead form.
//!
//! Brazilian mobile numbers: 2-digit area code plus a subscriber number of
//! up to 9 digits. The display is always rebuilt from the digits alone.

pub const MAX_PHONE_DIGITS: usize = 11;

const AREA_CODE_LEN: usize = 2;
const FIRST_GROUP_END: usize = 7;

/// Keeps only ASCII digits, capped at [`MAX_PHONE_DIGITS`].
pub fn raw_digits(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Formats whatever the user typed as `(DD) XXXXX-XXXX`, partially filled.
pub fn mask_phone(input: &str) -> String {
    let digits = raw_digits(input);
    format_digits(&digits)
}

fn format_digits(digits: &str) -> String {
    let len = digits.len();
    match len {
        0 => String::new(),
        1..=AREA_CODE_LEN => format!("({}", digits),
        3..=FIRST_GROUP_END => format!("({}) {}", &digits[..AREA_CODE_LEN], &digits[AREA_CODE_LEN..]),
        _ => format!(
            "({}) {}-{}",
            &digits[..AREA_CODE_LEN],
            &digits[AREA_CODE_LEN..FIRST_GROUP_END],
            &digits[FIRST_GROUP_END..]
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("1", "(1")]
    #[case("11", "(11")]
    #[case("119", "(11) 9")]
    #[case("1199999", "(11) 99999")]
    #[case("11999998", "(11) 99999-8")]
    #[case("1199999888", "(11) 99999-888")]
    #[case("11999998888", "(11) 99999-8888")]
    fn formats_by_digit_count(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask_phone(input), expected);
    }

    #[test]
    fn every_length_matches_one_pattern() {
        let all = "11999998888";
        for n in 0..=MAX_PHONE_DIGITS {
            let masked = mask_phone(&all[..n]);
            let patterns = [
                masked.is_empty(),
                masked.starts_with('(') && !masked.contains(')'),
                masked.contains(") ") && !masked.contains('-'),
                masked.contains(") ") && masked.contains('-'),
            ];
            assert_eq!(patterns.iter().filter(|p| **p).count(), 1, "{} digits: {:?}", n, masked);
        }
    }

    #[test]
    fn masking_is_idempotent() {
        let all = "11999998888";
        for n in 0..=MAX_PHONE_DIGITS {
            let once = mask_phone(&all[..n]);
            assert_eq!(mask_phone(&once), once);
        }
    }

    #[test]
    fn strips_non_digits_before_truncating() {
        assert_eq!(raw_digits("abc119999988889"), "11999998888");
        assert_eq!(mask_phone("abc119999988889"), mask_phone("11999998888"));
    }

    #[test]
    fn editing_a_masked_value_keeps_digits_in_order() {
        // User types one more digit at the end of an already masked value
        assert_eq!(mask_phone("(11) 99999-8884"), "(11) 99999-8884");
        assert_eq!(mask_phone("(11) 999995"), "(11) 99999-5");
        // Backspace over the dash leaves the first group only
        assert_eq!(mask_phone("(11) 99999"), "(11) 99999");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(raw_digits("١١٢"), "");
    }
}
