use itertools::Itertools;
use lazy_regex::regex;

/// Parses the two ASCII numeric components of a coordinate string such as
/// `(11.7, 13.5)` or `X:11.7 Y:13.5`.
pub(crate) fn parse_pair(text: &str) -> Option<(f64, f64)> {
    let (x, y) = regex!(r"-?[0-9]+(?:\.[0-9]+)?")
        .find_iter(text)
        .map(|m| m.as_str())
        .collect_tuple()?;
    Some((x.parse().ok()?, y.parse().ok()?))
}

/// Parses a non-negative amount written in ASCII digits, ignoring thousands separators and any
/// unit glyphs around the digits.
pub(crate) fn parse_amount(text: &str) -> Option<u64> {
    let caps = regex!(r"^[^0-9-]*?([0-9][0-9,]*)[^0-9]*$").captures(text)?;
    caps[1].replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pair_is_exact() {
        assert_eq!(parse_pair("(11.7, 13.5)"), Some((11.7, 13.5)));
        assert_eq!(parse_pair("X:11.7 Y:13.5"), Some((11.7, 13.5)));
        assert_eq!(parse_pair("( 8 , 20.1 )"), Some((8.0, 20.1)));
    }

    #[test]
    fn pair_needs_two_components() {
        assert_eq!(parse_pair("(11.7)"), None);
        assert_eq!(parse_pair("(1.0, 2.0, 3.0)"), None);
        assert_eq!(parse_pair("unknown"), None);
        assert_eq!(parse_pair(""), None);
    }

    #[test]
    fn pair_ignores_non_ascii_digits() {
        assert_eq!(parse_pair("(１１.７, １３.５)"), None);
        assert_eq!(parse_pair("X:١ Y:11.7 Z:13.5"), Some((11.7, 13.5)));
    }

    #[test]
    fn amount_strips_separators_and_glyphs() {
        assert_eq!(parse_amount("107"), Some(107));
        assert_eq!(parse_amount("1,250 ギル"), Some(1250));
        assert_eq!(parse_amount("+ 3,000,000"), Some(3_000_000));
    }

    #[test]
    fn amount_rejects_non_numbers() {
        assert_eq!(parse_amount("なし"), None);
        assert_eq!(parse_amount("1.5"), None);
        assert_eq!(parse_amount("10 x 2"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn amount_ignores_non_ascii_digits() {
        assert_eq!(parse_amount("１２３"), None);
        assert_eq!(parse_amount("１,２５０ ギル"), None);
    }
}
