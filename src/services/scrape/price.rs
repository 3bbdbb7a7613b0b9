use regex::Regex;
use std::sync::LazyLock;

static PRICE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d,]+[.,]?\d*").unwrap());

/// Extracts a price from merchant display text such as `"1 234,56 €"`.
///
/// Whitespace (including non-breaking thousands separators) is stripped
/// first, then the first decimal-number-shaped token is taken, commas are
/// normalized to dots and the leading number is parsed. No match yields 0.
pub fn parse_price(text: &str) -> f64 {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let Some(token) = PRICE_TOKEN.find(&compact) else {
        return 0.0;
    };

    let normalized = token.as_str().replace(',', ".");

    // keep only the leading "<digits>[.<digits>]" when the token carries
    // extra separators, e.g. "1.234.56"
    let mut parts = normalized.splitn(3, '.');
    let whole = parts.next().unwrap_or_default();
    let number = match parts.next() {
        Some(fraction) if !fraction.is_empty() => format!("{whole}.{fraction}"),
        _ => whole.to_string(),
    };

    number.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_decimal_comma() {
        assert_eq!(parse_price("49,99 €"), 49.99);
    }

    #[test]
    fn space_thousands_separator() {
        assert_eq!(parse_price("1 234,56 €"), 1234.56);
    }

    #[test]
    fn narrow_no_break_space_separator() {
        assert_eq!(parse_price("1\u{202f}234,56\u{a0}€"), 1234.56);
    }

    #[test]
    fn plain_dot_decimal() {
        assert_eq!(parse_price("$19.90"), 19.9);
    }

    #[test]
    fn integer_price() {
        assert_eq!(parse_price("120€"), 120.0);
    }

    #[test]
    fn trailing_decimal_separator() {
        assert_eq!(parse_price("15."), 15.0);
    }

    #[test]
    fn no_digits_yields_zero() {
        assert_eq!(parse_price("Prix indisponible"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }
}
